// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, timer ticks, network task results)
// - Dispatching store actions and spawning network tasks
//
// All state mutation happens on this task; network tasks only report back
// over the NetEvent channel.

pub mod app;
pub mod components;
pub mod layout;
pub mod theme;
pub mod views;

use crate::api::ApiClient;
use crate::config::Config;
use crate::logging::LogBuffer;
use crate::net::{self, NetEvent};
use crate::order::OrderRequest;
use crate::store::Action;
use anyhow::{Context, Result};
use app::{App, Focus, View};
use components::ToastKind;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

/// Run the TUI
///
/// Sets up the terminal, kicks off the initial product load, runs the event
/// loop until the user quits, and restores the terminal.
pub async fn run_tui(
    config: Config,
    api: ApiClient,
    log_buffer: LogBuffer,
    mut event_rx: mpsc::Receiver<NetEvent>,
    event_tx: mpsc::Sender<NetEvent>,
) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(&config, log_buffer);

    // Initial load: one GET /products on startup
    app.dispatch(Action::LoadStarted);
    net::spawn_load(api.clone(), event_tx.clone());

    let result = run_event_loop(&mut terminal, &mut app, &api, &event_tx, &mut event_rx).await;

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// tokio::select! multiplexes three sources:
/// 1. Keyboard input (navigation and commands)
/// 2. Timer ticks (periodic redraw + animation)
/// 3. Network task results (catalog, seed, order, health)
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    api: &ApiClient,
    tx: &mpsc::Sender<NetEvent>,
    event_rx: &mut mpsc::Receiver<NetEvent>,
) -> Result<()> {
    // 5 FPS is plenty for a storefront; input is polled far more often
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    if let Ok(Event::Key(key_event)) = event::read() {
                        handle_key_event(app, key_event, api, tx);
                    }
                }
            } => {}

            // Periodic tick for redrawing and the loading animation
            _ = tick_interval.tick() => {
                app.tick_animation();
            }

            // Network task results
            Some(net_event) = event_rx.recv() => {
                handle_net_event(app, net_event);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Apply a network task result to the store and acknowledge it to the user
fn handle_net_event(app: &mut App, event: NetEvent) {
    match event {
        NetEvent::ProductsLoaded(Ok(products)) => {
            tracing::info!("Catalog loaded: {} products", products.len());
            app.dispatch(Action::CatalogLoaded(products));
        }
        NetEvent::ProductsLoaded(Err(_)) => {
            // The fixed error message renders in place of the grid
            app.dispatch(Action::LoadFailed);
        }
        NetEvent::SeedFinished(Ok(products)) => {
            let count = products.len();
            app.dispatch(Action::SeedCompleted(products));
            app.show_toast(ToastKind::Success, format!("Demo data loaded ({} products)", count));
        }
        NetEvent::SeedFinished(Err(_)) => {
            app.dispatch(Action::SeedFailed);
            app.show_toast(ToastKind::Error, "Seeding failed");
        }
        NetEvent::OrderFinished(Ok(())) => {
            app.dispatch(Action::CheckoutSucceeded);
            app.show_toast(ToastKind::Success, "Order placed!");
        }
        NetEvent::OrderFinished(Err(_)) => {
            // Cart stays intact for a manual retry
            app.dispatch(Action::CheckoutFailed);
            app.show_toast(ToastKind::Error, "Checkout failed");
        }
        NetEvent::HealthChecked(Ok(status)) => {
            app.show_toast(ToastKind::Info, format!("Backend status: HTTP {}", status));
        }
        NetEvent::HealthChecked(Err(_)) => {
            app.show_toast(ToastKind::Error, "Backend unreachable");
        }
    }
}

/// Handle keyboard input
/// Layered dispatch: search box -> global keys -> shop navigation
fn handle_key_event(app: &mut App, key_event: KeyEvent, api: &ApiClient, tx: &mpsc::Sender<NetEvent>) {
    if key_event.kind != KeyEventKind::Press {
        return;
    }

    // Layer 1: the search box captures all input while active
    if app.search_active {
        handle_search_input(app, key_event.code);
        return;
    }

    // Layer 2: global keys (work regardless of view)
    if handle_global_keys(app, key_event.code, api, tx) {
        return;
    }

    // Layer 3: shop navigation
    if app.view == View::Shop {
        handle_shop_keys(app, key_event.code);
    }
}

/// Search box editing: every keystroke flows straight into the query
/// (no debounce, no validation), and the filter recomputes immediately.
fn handle_search_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc | KeyCode::Enter => {
            app.search_active = false;
        }
        KeyCode::Backspace => {
            let mut query = app.store.query.clone();
            query.pop();
            app.dispatch(Action::QueryChanged(query));
        }
        KeyCode::Char(c) => {
            let mut query = app.store.query.clone();
            query.push(c);
            app.dispatch(Action::QueryChanged(query));
        }
        _ => {}
    }
}

/// Handle global keys - returns true if handled
fn handle_global_keys(
    app: &mut App,
    key: KeyCode,
    api: &ApiClient,
    tx: &mpsc::Sender<NetEvent>,
) -> bool {
    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.should_quit = true;
            true
        }
        KeyCode::Char('/') => {
            app.view = View::Shop;
            app.search_active = true;
            true
        }
        KeyCode::Char('l') | KeyCode::Char('L') => {
            app.view = if app.view == View::Logs { View::Shop } else { View::Logs };
            true
        }
        KeyCode::Char('?') => {
            app.view = View::Help;
            true
        }
        KeyCode::Esc => {
            app.view = View::Shop;
            true
        }
        KeyCode::Char('d') | KeyCode::Char('D') => {
            trigger_seed(app, api, tx);
            true
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            trigger_reload(app, api, tx);
            true
        }
        KeyCode::Char('b') | KeyCode::Char('B') => {
            net::spawn_health(api.clone(), tx.clone());
            true
        }
        KeyCode::Char('c') | KeyCode::Char('C') => {
            trigger_checkout(app, api, tx);
            true
        }
        _ => false,
    }
}

/// Shop view navigation and cart editing
fn handle_shop_keys(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Tab | KeyCode::BackTab => {
            app.focus = app.focus.toggle();
        }
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor(1),
        KeyCode::Left | KeyCode::Char('[') => {
            if app.focus == Focus::Products {
                app.cycle_size(-1);
            }
        }
        KeyCode::Right | KeyCode::Char(']') => {
            if app.focus == Focus::Products {
                app.cycle_size(1);
            }
        }
        KeyCode::Char('a') | KeyCode::Enter => {
            if app.focus == Focus::Products {
                add_selected_to_cart(app);
            }
        }
        KeyCode::Char('x') | KeyCode::Delete => {
            if app.focus == Focus::Cart {
                app.dispatch(Action::RemoveFromCart(app.cart_cursor));
            }
        }
        _ => {}
    }
}

/// Add the product under the cursor to the cart, unconditionally
///
/// The size selector's position is intentionally not consulted; the order
/// later carries the product's first declared size.
fn add_selected_to_cart(app: &mut App) {
    if let Some(product) = app.product_under_cursor() {
        let title = product.title.clone();
        app.dispatch(Action::AddToCart(product));
        app.show_toast(ToastKind::Info, format!("Added {}", title));
    }
}

/// Manual catalog reload; ignored while a load is already in flight
fn trigger_reload(app: &mut App, api: &ApiClient, tx: &mpsc::Sender<NetEvent>) {
    if app.store.loading {
        return;
    }
    app.dispatch(Action::LoadStarted);
    net::spawn_load(api.clone(), tx.clone());
}

/// Seed demo data, then refetch; ignored while a load is already in flight
fn trigger_seed(app: &mut App, api: &ApiClient, tx: &mpsc::Sender<NetEvent>) {
    if app.store.loading {
        return;
    }
    app.dispatch(Action::LoadStarted);
    net::spawn_seed(api.clone(), tx.clone());
}

/// Submit the cart as an order
///
/// No-op on an empty cart (no network call is made) and while a previous
/// submission is still pending.
fn trigger_checkout(app: &mut App, api: &ApiClient, tx: &mpsc::Sender<NetEvent>) {
    if app.store.cart.is_empty() || app.store.checkout_pending {
        return;
    }
    let order = OrderRequest::from_cart(&app.store.cart);
    app.dispatch(Action::CheckoutStarted);
    net::spawn_checkout(api.clone(), order, tx.clone());
}

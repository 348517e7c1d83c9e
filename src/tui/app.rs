// TUI application state
//
// Wraps the store (the single owner of shop state) with UI-only state:
// current view, focused panel, cursors, search-box mode, toast. Everything
// here mutates only from the event loop task.

use super::components::{Toast, ToastKind};
use super::theme::Theme;
use crate::catalog::Product;
use crate::config::Config;
use crate::logging::LogBuffer;
use crate::store::{Action, Store};
use std::collections::HashMap;
use std::time::Instant;

/// Different views the TUI can display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Shop, // Product grid + cart
    Logs, // Captured tracing output
    Help, // Keybindings
}

impl View {
    /// Display name for the status bar
    pub fn name(&self) -> &'static str {
        match self {
            View::Shop => "Shop",
            View::Logs => "Logs",
            View::Help => "Help",
        }
    }
}

/// Which panel receives navigation keys in the shop view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Products,
    Cart,
}

impl Focus {
    pub fn toggle(self) -> Self {
        match self {
            Focus::Products => Focus::Cart,
            Focus::Cart => Focus::Products,
        }
    }
}

/// Main application state for the TUI
pub struct App {
    /// Shop state (catalog, query, cart, load-cycle flags)
    pub store: Store,

    /// Current view being displayed
    pub view: View,

    /// Focused panel in the shop view
    pub focus: Focus,

    /// Cursor into the filtered product list
    pub product_cursor: usize,

    /// Cursor into the cart lines
    pub cart_cursor: usize,

    /// Per-product size selector position, keyed by product id
    ///
    /// Deliberately display-only: the chosen size is not read at
    /// add-to-cart time (orders carry the product's first size).
    pub size_cursor: HashMap<u64, usize>,

    /// Whether keystrokes currently edit the search box
    pub search_active: bool,

    /// Active toast notification, if any
    pub toast: Option<Toast>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Captured tracing output for the logs view
    pub log_buffer: LogBuffer,

    /// Current color theme
    pub theme: Theme,

    /// Backend base URL (status bar display)
    pub backend_url: String,

    /// When the app started (for uptime display)
    pub start_time: Instant,

    /// Animation frame counter for the loading indicator
    pub animation_frame: usize,
}

impl App {
    pub fn new(config: &Config, log_buffer: LogBuffer) -> Self {
        let theme = Theme::from_name(&config.theme);
        tracing::debug!("Theme: {}", theme.name);
        Self {
            store: Store::new(),
            view: View::default(),
            focus: Focus::default(),
            product_cursor: 0,
            cart_cursor: 0,
            size_cursor: HashMap::new(),
            search_active: false,
            toast: None,
            should_quit: false,
            log_buffer,
            theme,
            backend_url: config.backend_url.clone(),
            start_time: Instant::now(),
            animation_frame: 0,
        }
    }

    /// Apply a store action and keep the cursors in range afterwards
    pub fn dispatch(&mut self, action: Action) {
        self.store.apply(action);
        self.clamp_cursors();
    }

    fn clamp_cursors(&mut self) {
        let shown = self.store.filtered().len();
        if self.product_cursor >= shown {
            self.product_cursor = shown.saturating_sub(1);
        }
        let lines = self.store.cart.len();
        if self.cart_cursor >= lines {
            self.cart_cursor = lines.saturating_sub(1);
        }
    }

    /// The product under the cursor in the filtered view, if any
    pub fn product_under_cursor(&self) -> Option<Product> {
        self.store.filtered().get(self.product_cursor).map(|p| (*p).clone())
    }

    /// Move the focused panel's cursor
    pub fn move_cursor(&mut self, delta: i64) {
        match self.focus {
            Focus::Products => {
                let len = self.store.filtered().len();
                self.product_cursor = step(self.product_cursor, delta, len);
            }
            Focus::Cart => {
                let len = self.store.cart.len();
                self.cart_cursor = step(self.cart_cursor, delta, len);
            }
        }
    }

    /// Cycle the size selector of the product under the cursor
    pub fn cycle_size(&mut self, delta: i64) {
        let Some(product) = self.product_under_cursor() else {
            return;
        };
        let options = product.size_options();
        let current = self.size_index(&product);
        let len = options.len();
        let next = (current as i64 + delta).rem_euclid(len as i64) as usize;
        self.size_cursor.insert(product.id, next);
    }

    /// Current size selector position for a product, clamped to its options
    pub fn size_index(&self, product: &Product) -> usize {
        let len = product.size_options().len();
        self.size_cursor
            .get(&product.id)
            .copied()
            .unwrap_or(0)
            .min(len.saturating_sub(1))
    }

    pub fn show_toast(&mut self, kind: ToastKind, message: impl Into<String>) {
        self.toast = Some(Toast::new(kind, message));
    }

    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }
    }

    /// Advance the loading-indicator animation (called on every tick)
    pub fn tick_animation(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
    }

    /// Animated dots for the loading indicator
    pub fn loading_dots(&self) -> &'static str {
        const DOTS: [&str; 4] = ["", ".", "..", "..."];
        DOTS[self.animation_frame % DOTS.len()]
    }

    /// Uptime formatted for the status bar
    pub fn uptime(&self) -> String {
        let secs = self.start_time.elapsed().as_secs();
        if secs >= 3600 {
            format!("{}h{:02}m", secs / 3600, (secs % 3600) / 60)
        } else if secs >= 60 {
            format!("{}m{:02}s", secs / 60, secs % 60)
        } else {
            format!("{}s", secs)
        }
    }
}

fn step(current: usize, delta: i64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let moved = current as i64 + delta;
    moved.clamp(0, len as i64 - 1) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(&Config::default(), LogBuffer::new())
    }

    fn product(id: u64, title: &str) -> Product {
        Product {
            id,
            title: title.to_string(),
            price: 10.0,
            description: None,
            image: None,
            sizes: None,
        }
    }

    #[test]
    fn test_cursor_clamped_after_filter_shrinks() {
        let mut app = app();
        app.dispatch(Action::CatalogLoaded(vec![
            product(1, "Tee"),
            product(2, "Hoodie"),
            product(3, "Cap"),
        ]));
        app.product_cursor = 2;

        app.dispatch(Action::QueryChanged("tee".to_string()));
        assert_eq!(app.store.filtered().len(), 1);
        assert_eq!(app.product_cursor, 0);
    }

    #[test]
    fn test_cart_cursor_clamped_after_removal() {
        let mut app = app();
        app.dispatch(Action::AddToCart(product(1, "Tee")));
        app.dispatch(Action::AddToCart(product(2, "Hoodie")));
        app.cart_cursor = 1;

        app.dispatch(Action::RemoveFromCart(1));
        assert_eq!(app.cart_cursor, 0);
    }

    #[test]
    fn test_move_cursor_stays_in_range() {
        let mut app = app();
        app.dispatch(Action::CatalogLoaded(vec![product(1, "Tee"), product(2, "Cap")]));

        app.move_cursor(-3);
        assert_eq!(app.product_cursor, 0);
        app.move_cursor(10);
        assert_eq!(app.product_cursor, 1);
    }

    #[test]
    fn test_cycle_size_wraps_over_defaults() {
        let mut app = app();
        app.dispatch(Action::CatalogLoaded(vec![product(1, "Tee")]));

        let p = app.product_under_cursor().unwrap();
        assert_eq!(app.size_index(&p), 0); // "S"

        app.cycle_size(1);
        assert_eq!(app.size_index(&p), 1); // "M"

        app.cycle_size(-2);
        assert_eq!(app.size_index(&p), 2); // wraps to "L"
    }

    #[test]
    fn test_focus_toggle() {
        assert_eq!(Focus::Products.toggle(), Focus::Cart);
        assert_eq!(Focus::Cart.toggle(), Focus::Products);
    }
}

// Views module - screen-level rendering logic
//
// Each view is a full-screen experience within the TUI:
// - Shop: product grid + cart (the main storefront)
// - Logs: captured tracing output
// - Help: keybindings reference
//
// This module builds the shell layout (header / content / status bar) and
// dispatches the content slot to the current view.

mod help;
mod logs;
mod shop;

use crate::tui::app::{App, View};
use crate::tui::components;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    // Theme background across the whole frame
    let bg = Block::default().style(Style::default().bg(app.theme.background));
    f.render_widget(bg, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // header
            Constraint::Min(10),   // content
            Constraint::Length(2), // status bar
        ])
        .split(f.area());

    components::header::render(f, chunks[0], app);

    match app.view {
        View::Shop => shop::render(f, chunks[1], app),
        View::Logs => logs::render(f, chunks[1], app),
        View::Help => help::render(f, chunks[1], app),
    }

    components::status_bar::render(f, chunks[2], app);

    // Toast notification on top of everything
    if let Some(ref toast) = app.toast {
        toast.render(f, f.area(), &app.theme);
    }
    app.clear_expired_toast();
}

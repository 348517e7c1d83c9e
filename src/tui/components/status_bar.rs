// Status bar component
//
// Bottom line: uptime, catalog counts, cart summary, backend URL, and the
// current load-cycle state (ready / loading / error).

use super::formatters::format_price;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let store = &app.store;

    let (state_text, state_color) = if store.loading {
        ("LOADING", theme.highlight)
    } else if store.error.is_some() {
        ("ERROR", theme.error)
    } else {
        ("ready", theme.success)
    };

    let text = Line::from(vec![
        Span::styled(
            format!(
                " {} │ {} │ {}/{} products │ cart {} ({}) │ {} │ ",
                app.uptime(),
                app.view.name(),
                store.filtered().len(),
                store.catalog.len(),
                store.cart.len(),
                format_price(store.cart_total()),
                app.backend_url,
            ),
            Style::default().fg(theme.status_bar),
        ),
        Span::styled(state_text, Style::default().fg(state_color)),
    ]);

    let status = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(theme.border)),
    );
    f.render_widget(status, area);
}

// Shop view - product grid beside the cart
//
// Loading and error states replace the grid; the cart stays visible and
// usable in both (a failed load never touches cart contents).

use crate::tui::app::App;
use crate::tui::components;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(36)])
        .split(area);

    if app.store.loading {
        let text = format!("Loading products{}", app.loading_dots());
        f.render_widget(
            Paragraph::new(text).style(Style::default().fg(app.theme.highlight)),
            pad(chunks[0]),
        );
    } else if let Some(ref error) = app.store.error {
        f.render_widget(
            Paragraph::new(error.as_str()).style(Style::default().fg(app.theme.error)),
            pad(chunks[0]),
        );
    } else {
        components::product_grid::render(f, chunks[0], app);
    }

    components::cart_panel::render(f, chunks[1], app);
}

fn pad(area: Rect) -> Rect {
    Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    }
}

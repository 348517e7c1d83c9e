// Header component
//
// Branding on the left, search box on the right. The search box forwards
// every raw keystroke into the store's query - no debounce, no validation.

use crate::tui::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(theme.border));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(40)])
        .split(inner);

    let brand = Line::from(vec![
        Span::styled(
            " MK ",
            Style::default()
                .fg(theme.background)
                .bg(theme.highlight)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            "MK Clothing",
            Style::default().fg(theme.title).add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(brand), chunks[0]);

    let search = if app.search_active {
        Line::from(vec![
            Span::styled("Search: ", Style::default().fg(theme.muted)),
            Span::styled(app.store.query.as_str(), Style::default().fg(theme.foreground)),
            Span::styled("▏", Style::default().fg(theme.highlight)),
        ])
    } else if app.store.query.is_empty() {
        Line::from(Span::styled(
            "Press / to search products...",
            Style::default().fg(theme.muted),
        ))
    } else {
        Line::from(vec![
            Span::styled("Filter: ", Style::default().fg(theme.muted)),
            Span::styled(app.store.query.as_str(), Style::default().fg(theme.highlight)),
        ])
    };
    f.render_widget(Paragraph::new(search), chunks[1]);
}

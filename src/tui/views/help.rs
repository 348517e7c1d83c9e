// Help view - keybindings reference

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const BINDINGS: &[(&str, &str)] = &[
    ("/", "Search products (type to filter, Enter/Esc to leave)"),
    ("Tab", "Switch focus between products and cart"),
    ("j/k, ↑/↓", "Move selection"),
    ("[ ]  ←/→", "Cycle the size selector on a card"),
    ("a, Enter", "Add selected product to the cart"),
    ("x, Del", "Remove selected cart line"),
    ("c", "Checkout (submits the order)"),
    ("d", "Seed demo data on the backend"),
    ("r", "Reload the catalog"),
    ("b", "Backend health check"),
    ("l", "Toggle logs view"),
    ("?", "This help"),
    ("Esc", "Back to the shop"),
    ("q", "Quit"),
];

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title(" Help ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines: Vec<Line> = BINDINGS
        .iter()
        .map(|(key, description)| {
            Line::from(vec![
                Span::styled(
                    format!(" {:>10}  ", key),
                    Style::default().fg(theme.highlight).add_modifier(Modifier::BOLD),
                ),
                Span::styled(*description, Style::default().fg(theme.foreground)),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines), inner);
}

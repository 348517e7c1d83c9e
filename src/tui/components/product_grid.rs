// Product grid component
//
// Renders the filtered catalog as cards, one product per card: title,
// price, description, and a size selector. The grid reflows between one
// and three columns with terminal width, and scrolls by whole rows to keep
// the cursor visible.

use super::formatters::{format_price, truncate_to_width};
use crate::catalog::Product;
use crate::tui::app::{App, Focus};
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Card height including its border
const CARD_HEIGHT: u16 = 7;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let filtered = app.store.filtered();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if app.focus == Focus::Products {
            theme.highlight
        } else {
            theme.border
        }))
        .title(format!(" New Arrivals ({}) ", filtered.len()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.height < CARD_HEIGHT || inner.width < 10 {
        return;
    }

    if filtered.is_empty() {
        let message = if app.store.query.is_empty() {
            "No products yet. Press 'd' to seed demo data."
        } else {
            "No products match the current search."
        };
        f.render_widget(
            Paragraph::new(message).style(Style::default().fg(theme.muted)),
            inner,
        );
        return;
    }

    let columns = Breakpoint::from_width(inner.width).grid_columns() as usize;
    let visible_rows = (inner.height / CARD_HEIGHT) as usize;
    let total_rows = filtered.len().div_ceil(columns);

    // Scroll by whole rows so the cursor's row stays on screen
    let cursor_row = app.product_cursor / columns;
    let first_row = if cursor_row >= visible_rows {
        (cursor_row + 1 - visible_rows).min(total_rows.saturating_sub(visible_rows))
    } else {
        0
    };

    let card_width = inner.width / columns as u16;
    for (slot, index) in (first_row * columns..filtered.len())
        .take(visible_rows * columns)
        .enumerate()
    {
        let row = (slot / columns) as u16;
        let col = (slot % columns) as u16;
        let card_area = Rect::new(
            inner.x + col * card_width,
            inner.y + row * CARD_HEIGHT,
            card_width,
            CARD_HEIGHT,
        );
        let selected = index == app.product_cursor && app.focus == Focus::Products;
        render_card(f, card_area, app, filtered[index], selected);
    }
}

fn render_card(f: &mut Frame, area: Rect, app: &App, product: &Product, selected: bool) {
    let theme = &app.theme;
    let border = if selected { theme.highlight } else { theme.border };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let text_width = inner.width.saturating_sub(1) as usize;
    let sizes = product.size_options();
    let size_idx = app.size_index(product);

    let mut lines = vec![
        Line::from(Span::styled(
            truncate_to_width(&product.title, text_width),
            Style::default().fg(theme.title).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format_price(product.price),
            Style::default().fg(theme.price).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            truncate_to_width(product.description.as_deref().unwrap_or(""), text_width),
            Style::default().fg(theme.muted),
        )),
        Line::from(vec![
            Span::styled("Size: ", Style::default().fg(theme.muted)),
            Span::styled("‹ ", Style::default().fg(theme.border)),
            Span::styled(
                sizes[size_idx].as_str(),
                Style::default().fg(theme.foreground).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ›", Style::default().fg(theme.border)),
        ]),
    ];

    if selected {
        lines.push(Line::from(Span::styled(
            "[a] add to cart",
            Style::default().fg(theme.highlight),
        )));
    }

    f.render_widget(Paragraph::new(lines), inner);
}

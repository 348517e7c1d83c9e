// Cart panel component
//
// Line items with a running total and checkout hint. The total is computed
// from the store on every frame - never cached across mutations. Checkout
// is presented as disabled while the cart is empty.

use super::formatters::{format_price, truncate_to_width};
use crate::tui::app::{App, Focus};
use unicode_width::UnicodeWidthStr;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let focused = app.focus == Focus::Cart;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused { theme.highlight } else { theme.border }))
        .title(format!(" Your Cart ({}) ", app.store.cart.len()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.height < 3 {
        return;
    }

    let mut lines: Vec<Line> = Vec::new();

    if app.store.cart.is_empty() {
        lines.push(Line::from(Span::styled(
            "No items yet",
            Style::default().fg(theme.muted),
        )));
    } else {
        // Reserve three rows for total + hint at the bottom
        let list_height = inner.height.saturating_sub(3) as usize;
        let first = if app.cart_cursor >= list_height {
            app.cart_cursor + 1 - list_height
        } else {
            0
        };

        let price_width = 9;
        let title_width = (inner.width as usize).saturating_sub(price_width + 3);
        for (idx, line) in app.store.cart.iter().enumerate().skip(first).take(list_height) {
            let selected = focused && idx == app.cart_cursor;
            let style = if selected {
                Style::default().fg(theme.selection_fg).bg(theme.selection)
            } else {
                Style::default().fg(theme.foreground)
            };
            let title = pad_to_width(&line.title, title_width);
            lines.push(Line::from(vec![
                Span::styled(format!(" {}", title), style),
                Span::styled(
                    format!("{:>width$} ", format_price(line.price), width = price_width),
                    style.fg(if selected { theme.selection_fg } else { theme.price }),
                ),
            ]));
        }
    }

    f.render_widget(Paragraph::new(lines), inner);

    // Total and checkout hint pinned to the bottom
    let footer_area = Rect::new(
        inner.x,
        inner.y + inner.height.saturating_sub(2),
        inner.width,
        2,
    );
    let total_line = Line::from(vec![
        Span::styled(" Total ", Style::default().fg(theme.muted)),
        Span::styled(
            format_price(app.store.cart_total()),
            Style::default().fg(theme.price).add_modifier(Modifier::BOLD),
        ),
    ]);
    let hint_line = if app.store.checkout_pending {
        Line::from(Span::styled(
            " submitting order...",
            Style::default().fg(theme.highlight),
        ))
    } else if app.store.cart.is_empty() {
        Line::from(Span::styled(
            " [c] checkout (empty)",
            Style::default().fg(theme.muted),
        ))
    } else {
        Line::from(vec![
            Span::styled(" [c] checkout", Style::default().fg(theme.highlight)),
            Span::styled("  [x] remove", Style::default().fg(theme.muted)),
        ])
    };
    f.render_widget(Paragraph::new(vec![total_line, hint_line]), footer_area);
}

/// Truncate then pad to exactly `width` display columns, so the price column
/// stays aligned for titles of any script
fn pad_to_width(text: &str, width: usize) -> String {
    let truncated = truncate_to_width(text, width);
    let padding = width.saturating_sub(truncated.width());
    format!("{}{}", truncated, " ".repeat(padding))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_to_width_pads_ascii_to_exact_columns() {
        assert_eq!(pad_to_width("Tee", 6), "Tee   ");
    }

    #[test]
    fn test_pad_to_width_uses_display_columns_for_wide_chars() {
        // Two CJK characters occupy four columns, so only two spaces remain
        let padded = pad_to_width("商品", 6);
        assert_eq!(padded, "商品  ");
        assert_eq!(padded.width(), 6);
    }

    #[test]
    fn test_pad_to_width_truncates_long_titles() {
        let padded = pad_to_width("A rather long product title", 10);
        assert_eq!(padded.width(), 10);
    }
}

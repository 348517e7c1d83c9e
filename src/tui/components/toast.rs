//! Toast notification component
//!
//! A non-blocking overlay that auto-dismisses after a short duration.
//! Checkout and seed outcomes are acknowledged through these; the cart is
//! never blocked waiting on one.

use crate::tui::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

/// Visual flavor of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

/// A toast notification that auto-dismisses
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    created_at: Instant,
    duration: Duration,
}

impl Toast {
    /// Create a new toast with the default 2.5-second duration
    pub fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind,
            created_at: Instant::now(),
            duration: Duration::from_millis(2500),
        }
    }

    /// Check if the toast has expired and should be removed
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }

    /// Box width for the message: display columns plus borders and padding,
    /// capped to the available area
    fn box_width(&self, available: u16) -> u16 {
        (self.message.width() as u16 + 4).min(available.saturating_sub(4))
    }

    /// Render the toast in the bottom-right corner, on top of other content
    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let width = self.box_width(area.width);
        let height = 3; // 1 line of text + borders

        // Bottom-right corner, offset from the edge
        let x = area.right().saturating_sub(width + 2);
        let y = area.bottom().saturating_sub(height + 2);
        let toast_area = Rect::new(x, y, width, height);

        let accent = match self.kind {
            ToastKind::Info => theme.highlight,
            ToastKind::Success => theme.success,
            ToastKind::Error => theme.error,
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent))
            .style(Style::default().bg(theme.background));

        let text = Paragraph::new(self.message.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.foreground))
            .block(block);

        // Clear first so the toast sits on top of whatever is underneath
        f.render_widget(Clear, toast_area);
        f.render_widget(text, toast_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_width_counts_display_columns_not_bytes() {
        // "✓" is 3 bytes but 1 column; byte-counting would oversize the box
        let toast = Toast::new(ToastKind::Success, "✓ done");
        assert_eq!(toast.box_width(80), 6 + 4);

        // CJK characters are 2 columns each
        let toast = Toast::new(ToastKind::Info, "注文完了");
        assert_eq!(toast.box_width(80), 8 + 4);
    }

    #[test]
    fn test_box_width_capped_to_available_area() {
        let toast = Toast::new(ToastKind::Error, "a very long message that will not fit");
        assert_eq!(toast.box_width(20), 16);
    }
}

// Logs panel component
//
// Renders the tail of the captured tracing output, colored by level.
// The buffer is bounded, so this never grows unbounded either.

use crate::logging::LogLevel;
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

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title(" System Logs ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let entries = app.log_buffer.snapshot();
    let visible = inner.height as usize;
    let skip = entries.len().saturating_sub(visible);

    let lines: Vec<Line> = entries
        .iter()
        .skip(skip)
        .map(|entry| {
            let level_color = match entry.level {
                LogLevel::Error => theme.error,
                LogLevel::Warn => theme.highlight,
                LogLevel::Info => theme.success,
                LogLevel::Debug | LogLevel::Trace => theme.muted,
            };
            Line::from(vec![
                Span::styled(
                    entry.timestamp.format("%H:%M:%S ").to_string(),
                    Style::default().fg(theme.muted),
                ),
                Span::styled(
                    format!("{:5} ", entry.level.as_str()),
                    Style::default().fg(level_color),
                ),
                Span::styled(entry.message.as_str(), Style::default().fg(theme.foreground)),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines), inner);
}

// Logs view - the logs panel expanded to the full content area

use crate::tui::app::App;
use crate::tui::components;
use ratatui::{layout::Rect, Frame};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    components::logs_panel::render(f, area, app);
}

//! Status bar component

use crate::ui::core::Focus;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Shortcut hint for the focused area
    #[must_use]
    pub fn shortcuts(focus: Focus) -> &'static str {
        match focus {
            Focus::Input => "Enter: add • Tab: list • Ctrl+C: quit",
            Focus::List => "Space: toggle • d: delete • 1-3: sort • c/i: filter • Tab: input • ?: help • q: quit",
        }
    }

    /// Render the last message, or the shortcuts when there is none
    pub fn render(f: &mut Frame, area: Rect, message: Option<&str>, focus: Focus) {
        let (text, color) = match message {
            Some(message) => (message, Color::Yellow),
            None => (Self::shortcuts(focus), Color::Gray),
        };

        let status_bar = Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(color));

        f.render_widget(status_bar, area);
    }
}

//! Vertical scrollbar shared by the item list and the dialogs.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

#[derive(Debug, Default)]
pub struct ScrollbarHelper {
    state: ScrollbarState,
}

impl ScrollbarHelper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_state(&mut self, total_items: usize, position: usize) {
        self.state = self.state.content_length(total_items).position(position);
    }

    /// Split a bordered `rect` into the content area and, when `total_items`
    /// do not fit inside the borders, a one-column scrollbar track.
    pub fn calculate_areas(rect: Rect, total_items: usize) -> (Rect, Option<Rect>) {
        let inner_height = rect.height.saturating_sub(2) as usize;
        if total_items <= inner_height {
            return (rect, None);
        }

        let content = Rect {
            width: rect.width.saturating_sub(1),
            ..rect
        };
        let track = Rect {
            x: rect.x + rect.width.saturating_sub(1),
            y: rect.y + 1,
            width: 1,
            height: rect.height.saturating_sub(2),
        };
        (content, Some(track))
    }

    pub fn render(&mut self, f: &mut Frame, area: Option<Rect>) {
        let Some(area) = area else {
            return;
        };
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .track_symbol(Some("│"))
            .thumb_symbol("█")
            .style(Style::default().fg(Color::DarkGray));
        f.render_stateful_widget(scrollbar, area, &mut self.state);
    }
}

use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Margin, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Clear, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Creates a styled main dialog block
pub fn create_dialog_block(title: &str, theme_color: Color) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_style(Style::default().fg(theme_color).add_modifier(Modifier::BOLD))
        .style(Style::default().fg(theme_color))
}

/// Clears and returns the centered area a modal dialog is drawn into
pub fn modal_area(f: &mut Frame, area: Rect) -> Rect {
    let (width, height) = LayoutManager::dialog_dimensions(area.width, area.height);
    let dialog_area = LayoutManager::centered_rect(width, height, area);
    f.render_widget(Clear, dialog_area);
    dialog_area
}

/// Draws a scrollbar on the right border when the content overflows
pub fn render_scrollbar(f: &mut Frame, area: Rect, overflowing: bool, state: &mut ScrollbarState) {
    if !overflowing {
        return;
    }
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(None)
        .end_symbol(None)
        .style(Style::default().fg(Color::DarkGray));
    f.render_stateful_widget(
        scrollbar,
        area.inner(Margin {
            vertical: 1,
            horizontal: 0,
        }),
        state,
    );
}

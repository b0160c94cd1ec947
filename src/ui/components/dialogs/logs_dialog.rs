//! In-app view of the log buffer.

use super::common::{create_dialog_block, modal_area, render_scrollbar};
use super::scroll_behavior::DialogScroll;
use crate::constants::DIALOG_TITLE_LOGS;
use crate::logger::{log_file_path, Logger};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Margin, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

/// Color a formatted log line by its level column
fn line_style(line: &str) -> Style {
    if line.contains(" ERROR ") {
        Style::default().fg(Color::Red)
    } else if line.contains(" WARN ") {
        Style::default().fg(Color::Yellow)
    } else if line.contains(" DEBUG ") || line.contains(" TRACE ") {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White)
    }
}

pub fn render_logs_dialog(f: &mut Frame, area: Rect, logger: &Logger, scroll: &mut DialogScroll) {
    let dialog_area = modal_area(f, area);
    f.render_widget(create_dialog_block(DIALOG_TITLE_LOGS, Color::Cyan), dialog_area);

    let inner = dialog_area.inner(Margin {
        vertical: 1,
        horizontal: 1,
    });
    let [header_area, body_area] = Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);

    let destination = match log_file_path() {
        Some(path) => format!("Also writing to {}", path.display()),
        None => "File logging disabled".to_string(),
    };
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(destination, Style::default().fg(Color::DarkGray))))
            .alignment(Alignment::Center),
        header_area,
    );

    let logs = logger.get_logs();
    if logs.is_empty() {
        f.render_widget(
            Paragraph::new("No logs yet")
                .style(Style::default().fg(Color::Gray))
                .alignment(Alignment::Center),
            body_area,
        );
        return;
    }

    let visible = body_area.height as usize;
    let offset = scroll.clamp(logs.len(), visible);
    let items: Vec<ListItem> = logs
        .iter()
        .skip(offset)
        .take(visible)
        .map(|line| ListItem::new(Span::styled(line.clone(), line_style(line))))
        .collect();

    f.render_widget(List::new(items), body_area);
    render_scrollbar(f, dialog_area, logs.len() > visible, &mut scroll.scrollbar_state);
}

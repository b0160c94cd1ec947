use crate::config::DisplayConfig;
use crate::icons::IconService;
use crate::store::TodoItem;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::ListItem,
};

/// One rendered line of the item list
#[derive(Debug, Clone)]
pub struct TodoRow<'a> {
    pub item: &'a TodoItem,
    pub icons: &'a IconService,
}

impl<'a> TodoRow<'a> {
    pub fn new(item: &'a TodoItem, icons: &'a IconService) -> Self {
        Self { item, icons }
    }

    /// The check mark is only drawn for completed items; pending ones get
    /// blank padding of the same width so texts stay aligned.
    fn status_span(&self) -> Span<'static> {
        let completed = self.icons.item_completed();
        if self.item.is_complete {
            Span::styled(format!("{} ", completed), Style::default().fg(Color::LightGreen))
        } else {
            let pending = self.icons.item_pending();
            let padded = if pending.trim().is_empty() {
                " ".repeat(completed.chars().count())
            } else {
                pending.to_string()
            };
            Span::styled(format!("{} ", padded), Style::default().fg(Color::DarkGray))
        }
    }

    pub fn render(&self, selected: bool, display_config: &DisplayConfig) -> ListItem<'static> {
        let mut content_style = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
        if self.item.is_complete && display_config.dim_completed {
            content_style = content_style.add_modifier(Modifier::DIM | Modifier::CROSSED_OUT);
        }

        let mut spans = vec![self.status_span(), Span::styled(self.item.text.clone(), content_style)];

        if selected {
            spans.push(Span::styled(
                format!("  {} d", self.icons.remove()),
                Style::default().fg(Color::LightRed),
            ));
        }

        ListItem::new(Line::from(spans))
    }
}

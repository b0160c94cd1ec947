//! Sort and filter buttons below the list.

use crate::constants::{FOOTER_FILTER_LABEL, FOOTER_SORT_LABEL};
use crate::icons::IconService;
use crate::store::{FilterKind, SortMode};
use crate::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub struct FooterComponent {
    pub sort_mode: SortMode,
    pub active_filters: Vec<FilterKind>,
    pub completed: usize,
    pub total: usize,
    pub show_counts: bool,
    pub icons: IconService,
}

impl FooterComponent {
    pub fn new(show_counts: bool) -> Self {
        Self {
            sort_mode: SortMode::None,
            active_filters: Vec::new(),
            completed: 0,
            total: 0,
            show_counts,
            icons: IconService::default(),
        }
    }

    pub fn update_data(
        &mut self,
        sort_mode: SortMode,
        active_filters: Vec<FilterKind>,
        completed: usize,
        total: usize,
        icons: &IconService,
    ) {
        self.sort_mode = sort_mode;
        self.active_filters = active_filters;
        self.completed = completed;
        self.total = total;
        self.icons = icons.clone();
    }

    pub fn sort_color(mode: SortMode) -> Color {
        match mode {
            SortMode::None => Color::Gray,
            SortMode::CompleteFirst => Color::LightGreen,
            SortMode::CompleteLast => Color::LightRed,
            SortMode::Alphabetical => Color::LightBlue,
        }
    }

    pub fn filter_color(kind: FilterKind) -> Color {
        match kind {
            FilterKind::Complete => Color::LightBlue,
            FilterKind::Incomplete => Color::LightRed,
        }
    }

    /// Active buttons are drawn in their color, inactive ones faded
    fn button(key: char, icon: &str, color: Color, active: bool) -> Vec<Span<'static>> {
        let style = if active {
            Style::default().fg(color).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        vec![
            Span::styled(format!(" {}", key), Style::default().fg(Color::DarkGray)),
            Span::styled(icon.to_string(), style),
        ]
    }

    fn sort_line(&self) -> Line<'static> {
        let mut spans = vec![Span::styled(FOOTER_SORT_LABEL, Style::default().fg(Color::Gray))];
        for (index, mode) in SortMode::SELECTABLE.iter().enumerate() {
            let key = char::from_digit(index as u32 + 1, 10).unwrap_or('?');
            spans.extend(Self::button(
                key,
                self.icons.sort(*mode),
                Self::sort_color(*mode),
                self.sort_mode == *mode,
            ));
        }
        Line::from(spans)
    }

    fn filter_line(&self) -> Line<'static> {
        let mut spans = Vec::new();
        if self.show_counts {
            spans.push(Span::styled(
                format!("{}/{} done  ", self.completed, self.total),
                Style::default().fg(Color::DarkGray),
            ));
        }
        spans.push(Span::styled(FOOTER_FILTER_LABEL, Style::default().fg(Color::Gray)));
        for kind in FilterKind::ALL {
            let key = match kind {
                FilterKind::Complete => 'c',
                FilterKind::Incomplete => 'i',
            };
            spans.extend(Self::button(
                key,
                self.icons.filter(kind),
                Self::filter_color(kind),
                self.active_filters.contains(&kind),
            ));
        }
        Line::from(spans).right_aligned()
    }
}

impl Component for FooterComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('1') => Action::ToggleSort(SortMode::CompleteFirst),
            KeyCode::Char('2') => Action::ToggleSort(SortMode::CompleteLast),
            KeyCode::Char('3') => Action::ToggleSort(SortMode::Alphabetical),
            KeyCode::Char('c') => Action::ToggleFilter(FilterKind::Complete),
            KeyCode::Char('i') => Action::ToggleFilter(FilterKind::Incomplete),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let [left, right] = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(rect);
        f.render_widget(Paragraph::new(self.sort_line()), left);
        f.render_widget(Paragraph::new(self.filter_line()), right);
    }
}

use crate::config::DisplayConfig;
use crate::constants::{EMPTY_FILTERED_TEXT, EMPTY_LIST_TEXT};
use crate::icons::IconService;
use crate::store::{TodoId, TodoItem};
use crate::ui::components::scrollbar_helper::ScrollbarHelper;
use crate::ui::components::todo_item_component::TodoRow;
use crate::ui::core::{Action, Component, Focus};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// The visible items, as returned by the store's view
pub struct TodoListComponent {
    pub items: Vec<TodoItem>,
    pub selected_index: usize,
    pub list_state: ListState,
    pub filters_active: bool,
    pub focused: bool,
    pub icons: IconService,
    pub display_config: DisplayConfig,
    scrollbar: ScrollbarHelper,
}

impl Default for TodoListComponent {
    fn default() -> Self {
        Self::new(DisplayConfig::default())
    }
}

impl TodoListComponent {
    pub fn new(display_config: DisplayConfig) -> Self {
        Self {
            items: Vec::new(),
            selected_index: 0,
            list_state: ListState::default(),
            filters_active: false,
            focused: false,
            icons: IconService::default(),
            display_config,
            scrollbar: ScrollbarHelper::new(),
        }
    }

    /// Replace the displayed items, keeping the selection on the same item when it is still visible
    pub fn update_data(&mut self, items: Vec<TodoItem>, filters_active: bool, icons: &IconService) {
        let selected_id = self.selected_id();
        self.items = items;
        self.filters_active = filters_active;
        self.icons = icons.clone();

        if let Some(index) = selected_id.and_then(|id| self.items.iter().position(|item| item.id == id)) {
            self.selected_index = index;
        }
        self.update_list_state();
    }

    pub fn selected_item(&self) -> Option<&TodoItem> {
        self.items.get(self.selected_index)
    }

    pub fn selected_id(&self) -> Option<TodoId> {
        self.selected_item().map(|item| item.id)
    }

    fn update_list_state(&mut self) {
        if self.items.is_empty() {
            self.selected_index = 0;
            self.list_state.select(None);
        } else {
            if self.selected_index >= self.items.len() {
                self.selected_index = self.items.len() - 1;
            }
            self.list_state.select(Some(self.selected_index));
        }
    }

    fn empty_message(&self) -> &'static str {
        if self.filters_active {
            EMPTY_FILTERED_TEXT
        } else {
            EMPTY_LIST_TEXT
        }
    }
}

impl Component for TodoListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                if self.selected_index == 0 {
                    Action::SetFocus(Focus::Input)
                } else {
                    Action::PreviousItem
                }
            }
            KeyCode::Down | KeyCode::Char('j') => Action::NextItem,
            KeyCode::Home | KeyCode::Char('g') => Action::FirstItem,
            KeyCode::End => Action::LastItem,
            KeyCode::Enter | KeyCode::Char(' ') => match self.selected_id() {
                Some(id) => Action::ToggleItem(id),
                None => Action::None,
            },
            KeyCode::Char('d') | KeyCode::Delete => match self.selected_id() {
                Some(id) => Action::RemoveItem(id),
                None => Action::None,
            },
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::NextItem => {
                if !self.items.is_empty() {
                    self.selected_index = (self.selected_index + 1) % self.items.len();
                    self.update_list_state();
                }
                Action::None
            }
            Action::PreviousItem => {
                if !self.items.is_empty() {
                    self.selected_index = if self.selected_index == 0 {
                        self.items.len() - 1
                    } else {
                        self.selected_index - 1
                    };
                    self.update_list_state();
                }
                Action::None
            }
            Action::FirstItem => {
                self.selected_index = 0;
                self.update_list_state();
                Action::None
            }
            Action::LastItem => {
                self.selected_index = self.items.len().saturating_sub(1);
                self.update_list_state();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let block = Block::default().borders(Borders::TOP | Borders::BOTTOM).border_style(
            Style::default().fg(if self.focused { Color::Gray } else { Color::DarkGray }),
        );

        if self.items.is_empty() {
            let empty = Paragraph::new(self.empty_message())
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(empty, rect);
            return;
        }

        let (list_area, scrollbar_area) = ScrollbarHelper::calculate_areas(rect, self.items.len());
        self.scrollbar.update_state(self.items.len(), self.selected_index);

        let rows: Vec<ListItem> = self
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                TodoRow::new(item, &self.icons).render(self.focused && index == self.selected_index, &self.display_config)
            })
            .collect();

        let highlight = if self.focused {
            Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let list = List::new(rows).block(block).highlight_style(highlight);

        f.render_stateful_widget(list, list_area, &mut self.list_state);
        self.scrollbar.render(f, scrollbar_area);
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}

use crate::config::Config;
use crate::constants::{
    STATUS_EMPTY_INPUT, STATUS_ITEM_ADDED, STATUS_ITEM_COMPLETED, STATUS_ITEM_REMOVED, STATUS_ITEM_REOPENED,
};
use crate::icons::IconService;
use crate::logger::Logger;
use crate::store::{Clock, SystemClock, TodoListStore};
use crate::ui::components::{DialogComponent, FooterComponent, InputComponent, StatusBar, TodoListComponent};
use crate::ui::core::{Action, Component, DialogType, EventType, Focus};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::{debug, info};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Application state separate from UI concerns
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub focus: Focus,
    pub status_message: Option<String>,
}

impl AppState {
    /// Clear any transient messages
    pub fn clear_messages(&mut self) {
        self.status_message = None;
    }
}

/// Owns the todo store and every component, and applies actions to the store
/// one at a time.
pub struct AppComponent<C: Clock = SystemClock> {
    // Component composition
    input: InputComponent,
    todo_list: TodoListComponent,
    footer: FooterComponent,
    dialog: DialogComponent,

    store: TodoListStore<C>,
    state: AppState,
    icons: IconService,
    title: String,
    should_quit: bool,
}

impl AppComponent<SystemClock> {
    pub fn new(config: &Config, logger: Logger) -> Self {
        Self::with_store(config, logger, TodoListStore::new())
    }
}

impl<C: Clock> AppComponent<C> {
    pub fn with_store(config: &Config, logger: Logger, store: TodoListStore<C>) -> Self {
        let icons = IconService::new(config.ui.icon_theme);
        let mut app = Self {
            input: InputComponent::new(config.ui.placeholder.clone(), icons.clone()),
            todo_list: TodoListComponent::new(config.display.clone()),
            footer: FooterComponent::new(config.display.show_counts),
            dialog: DialogComponent::new(logger),
            store,
            state: AppState::default(),
            icons,
            title: config.ui.title.clone(),
            should_quit: false,
        };
        app.set_focus(Focus::Input);
        app.sync_component_data();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn store(&self) -> &TodoListStore<C> {
        &self.store
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn is_dialog_visible(&self) -> bool {
        self.dialog.is_visible()
    }

    /// Push the store's current view into every component
    fn sync_component_data(&mut self) {
        let visible = self.store.view().into_iter().cloned().collect();
        self.todo_list
            .update_data(visible, !self.store.filters().is_empty(), &self.icons);
        self.input.update_data(self.store.input(), &self.icons);
        self.footer.update_data(
            self.store.sort_mode(),
            self.store.filters().iter().collect(),
            self.store.completed_count(),
            self.store.len(),
            &self.icons,
        );
    }

    fn set_focus(&mut self, focus: Focus) {
        self.state.focus = focus;
        match focus {
            Focus::Input => {
                self.todo_list.on_blur();
                self.input.on_focus();
            }
            Focus::List => {
                self.input.on_blur();
                self.todo_list.on_focus();
            }
        }
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                debug!("Global key: {:?} - quitting application", key.code);
                Action::Quit
            }
            KeyCode::Tab => Action::CycleFocus,
            KeyCode::Char('?') | KeyCode::Char('h') => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('G') => Action::ShowDialog(DialogType::Logs),
            KeyCode::Char('t') => Action::CycleIconTheme,
            _ => Action::None,
        }
    }

    /// Route a key to the dialog, the focused component, or the global shortcuts
    fn route_key(&mut self, key: KeyEvent) -> Action {
        if self.dialog.is_visible() {
            return self.dialog.handle_key_events(key);
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        match self.state.focus {
            Focus::Input => self.input.handle_key_events(key),
            Focus::List => {
                let list_action = self.todo_list.handle_key_events(key);
                if !matches!(list_action, Action::None) {
                    return list_action;
                }
                let footer_action = self.footer.handle_key_events(key);
                if !matches!(footer_action, Action::None) {
                    return footer_action;
                }
                self.handle_global_key(key)
            }
        }
    }

    /// Handle app-level actions that change the store or the app itself
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::InputChar(c) => self.store.push_input(c),
            Action::InputBackspace => {
                self.store.pop_input();
            }
            Action::SubmitInput => match self.store.submit_input() {
                Some(id) => {
                    info!("Item {} added", id);
                    self.state.status_message = Some(STATUS_ITEM_ADDED.to_string());
                }
                None => {
                    debug!("Ignoring empty input");
                    self.state.status_message = Some(STATUS_EMPTY_INPUT.to_string());
                }
            },
            Action::ToggleItem(id) => {
                if let Some(complete) = self.store.toggle(id) {
                    info!("Item {} marked {}", id, if complete { "complete" } else { "incomplete" });
                    let message = if complete {
                        STATUS_ITEM_COMPLETED
                    } else {
                        STATUS_ITEM_REOPENED
                    };
                    self.state.status_message = Some(message.to_string());
                }
            }
            Action::RemoveItem(id) => {
                if self.store.remove(id) {
                    info!("Item {} removed", id);
                    self.state.status_message = Some(STATUS_ITEM_REMOVED.to_string());
                }
            }
            Action::ToggleSort(mode) => {
                let active = self.store.set_sort(mode);
                info!("Sort mode is now {}", active.label());
                self.state.status_message = Some(format!("Sort: {}", active.label()));
            }
            Action::ToggleFilter(kind) => {
                let active = self.store.set_filter(kind);
                info!("Filter {} {}", kind.label(), if active { "on" } else { "off" });
                self.state.status_message =
                    Some(format!("Filter {}: {}", kind.label(), if active { "on" } else { "off" }));
            }
            Action::SetFocus(focus) => self.set_focus(focus),
            Action::CycleFocus => self.set_focus(self.state.focus.next()),
            Action::CycleIconTheme => {
                self.icons.cycle_icon_theme();
                debug!("Icon theme: {:?}", self.icons.theme());
            }
            Action::Quit => {
                info!("Quitting");
                self.should_quit = true;
            }
            other => return other,
        }
        Action::None
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) -> anyhow::Result<()> {
        let action = match event_type {
            EventType::Key(key) => {
                // A message lasts until the next key press, then the shortcut hints return
                self.state.clear_messages();
                self.route_key(key)
            }
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };
        self.dispatch(action);
        Ok(())
    }

    /// Run one action through the components, then the store
    pub fn dispatch(&mut self, action: Action) {
        let action = Component::update(self, action);
        let _unhandled = self.handle_app_action(action);
        self.sync_component_data();
    }

    fn render_header(&self, f: &mut Frame, rect: Rect) {
        let header = Paragraph::new(self.title.clone())
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
            .block(Block::default().borders(Borders::NONE));
        f.render_widget(
            header,
            Rect {
                y: rect.y + rect.height / 2,
                height: 1,
                ..rect
            },
        );
    }
}

impl<C: Clock> Component for AppComponent<C> {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.route_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        let action = self.dialog.update(action);
        self.todo_list.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let areas = LayoutManager::main_layout(rect);

        self.render_header(f, areas.header);
        self.input.render(f, areas.input);
        self.todo_list.render(f, areas.list);
        self.footer.render(f, areas.footer);
        StatusBar::render(f, areas.status, self.state.status_message.as_deref(), self.state.focus);

        // Render dialog on top if visible
        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }
}

//! Modal dialog component.
//!
//! Hosts the help and log dialogs. While a dialog is visible it receives
//! every key press, so list and input shortcuts are suspended until it is
//! closed.

use crate::logger::Logger;
use crate::ui::components::dialogs::{render_help_dialog, render_logs_dialog, DialogScroll};
use crate::ui::core::{Action, Component, DialogType};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub scroll: DialogScroll,
    logger: Logger,
}

impl DialogComponent {
    pub fn new(logger: Logger) -> Self {
        Self {
            dialog_type: None,
            scroll: DialogScroll::default(),
            logger,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        match (self.dialog_type, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q')) => Action::HideDialog,
            (Some(DialogType::Help), KeyCode::Char('?')) => Action::HideDialog,
            (Some(DialogType::Logs), KeyCode::Char('G')) => Action::HideDialog,
            (_, KeyCode::Up | KeyCode::Char('k')) => Action::DialogScrollUp,
            (_, KeyCode::Down | KeyCode::Char('j')) => Action::DialogScrollDown,
            (_, KeyCode::Home | KeyCode::Char('g')) => Action::DialogScrollToTop,
            (_, KeyCode::End) => Action::DialogScrollToBottom,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.dialog_type = Some(dialog_type);
                self.scroll.reset();
                Action::None
            }
            Action::HideDialog => {
                self.dialog_type = None;
                Action::None
            }
            Action::DialogScrollUp => {
                self.scroll.up();
                Action::None
            }
            Action::DialogScrollDown => {
                self.scroll.down();
                Action::None
            }
            Action::DialogScrollToTop => {
                self.scroll.to_top();
                Action::None
            }
            Action::DialogScrollToBottom => {
                self.scroll.to_bottom();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        match self.dialog_type {
            Some(DialogType::Help) => render_help_dialog(f, rect, &mut self.scroll),
            Some(DialogType::Logs) => render_logs_dialog(f, rect, &self.logger, &mut self.scroll),
            None => {}
        }
    }
}

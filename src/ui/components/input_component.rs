use crate::icons::IconService;
use crate::ui::core::{Action, Component, Focus};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// The "new item" line at the top of the screen.
///
/// It only mirrors the store's pending input; every edit goes out as an
/// [`Action`] so the store stays the single owner of the text.
pub struct InputComponent {
    pub text: String,
    pub placeholder: String,
    pub focused: bool,
    pub icons: IconService,
}

impl InputComponent {
    pub fn new(placeholder: String, icons: IconService) -> Self {
        Self {
            text: String::new(),
            placeholder,
            focused: true,
            icons,
        }
    }

    pub fn update_data(&mut self, text: &str, icons: &IconService) {
        self.text.clear();
        self.text.push_str(text);
        self.icons = icons.clone();
    }
}

impl Component for InputComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter => Action::SubmitInput,
            KeyCode::Backspace => Action::InputBackspace,
            KeyCode::Tab | KeyCode::Down => Action::SetFocus(Focus::List),
            KeyCode::Esc => Action::SetFocus(Focus::List),
            KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                Action::InputChar(c)
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Gray)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let mut spans = Vec::new();
        if self.text.is_empty() && !self.focused {
            spans.push(Span::styled(
                self.placeholder.clone(),
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            ));
        } else {
            spans.push(Span::styled(
                self.text.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ));
            if self.focused {
                spans.push(Span::styled("█", Style::default().fg(Color::Gray)));
            }
            if self.text.is_empty() {
                spans.push(Span::styled(
                    format!(" {}", self.placeholder),
                    Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
                ));
            }
        }

        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Thick)
            .border_style(border_style)
            .title_bottom(
                Line::from(Span::styled(
                    format!(" {} Enter ", self.icons.add()),
                    Style::default().fg(Color::LightBlue),
                ))
                .right_aligned(),
            );

        f.render_widget(Paragraph::new(Line::from(spans)).block(block), rect);
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}

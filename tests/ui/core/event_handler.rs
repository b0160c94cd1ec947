use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use std::time::Duration;
use todolist::ui::core::event_handler::{EventHandler, EventType, DEFAULT_TICK_RATE};

fn key_with_kind(kind: KeyEventKind) -> Event {
    Event::Key(KeyEvent {
        code: KeyCode::Char('x'),
        modifiers: KeyModifiers::NONE,
        kind,
        state: KeyEventState::NONE,
    })
}

#[test]
fn test_default_tick_rate() {
    assert_eq!(EventHandler::new().tick_rate(), DEFAULT_TICK_RATE);
    assert_eq!(
        EventHandler::with_tick_rate(Duration::from_millis(250)).tick_rate(),
        Duration::from_millis(250)
    );
}

#[test]
fn test_only_key_presses_are_forwarded() {
    assert!(matches!(
        EventHandler::classify(key_with_kind(KeyEventKind::Press)),
        EventType::Key(key) if key.code == KeyCode::Char('x')
    ));
    assert!(matches!(
        EventHandler::classify(key_with_kind(KeyEventKind::Release)),
        EventType::Other
    ));
    assert!(matches!(
        EventHandler::classify(key_with_kind(KeyEventKind::Repeat)),
        EventType::Other
    ));
}

#[test]
fn test_resize_and_focus_events() {
    assert!(matches!(
        EventHandler::classify(Event::Resize(120, 40)),
        EventType::Resize(120, 40)
    ));
    assert!(matches!(EventHandler::classify(Event::FocusGained), EventType::Other));
}

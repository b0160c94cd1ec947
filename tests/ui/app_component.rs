use chrono::{TimeZone, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use todolist::config::Config;
use todolist::logger::Logger;
use todolist::store::{FilterKind, FixedClock, SortMode, TodoListStore};
use todolist::ui::app_component::{AppComponent, AppState};
use todolist::ui::core::{EventType, Focus};

fn app() -> AppComponent<FixedClock> {
    let instant = Utc.with_ymd_and_hms(2024, 2, 2, 10, 0, 0).unwrap();
    AppComponent::with_store(
        &Config::default(),
        Logger::new(),
        TodoListStore::with_clock(FixedClock::new(instant)),
    )
}

fn press(app: &mut AppComponent<FixedClock>, code: KeyCode) {
    let modifiers = match code {
        KeyCode::Char(c) if c.is_ascii_uppercase() => KeyModifiers::SHIFT,
        _ => KeyModifiers::NONE,
    };
    app.handle_event(EventType::Key(KeyEvent::new(code, modifiers))).unwrap();
}

fn type_text(app: &mut AppComponent<FixedClock>, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
}

fn add(app: &mut AppComponent<FixedClock>, text: &str) {
    type_text(app, text);
    press(app, KeyCode::Enter);
}

fn visible(app: &AppComponent<FixedClock>) -> Vec<String> {
    app.store().view().iter().map(|item| item.text.clone()).collect()
}

#[test]
fn test_app_state_default() {
    let state = AppState::default();
    assert_eq!(state.focus, Focus::Input);
    assert!(state.status_message.is_none());
}

#[test]
fn test_typing_and_enter_adds_item() {
    let mut app = app();
    type_text(&mut app, "buy milk");
    assert_eq!(app.store().input(), "buy milk");

    press(&mut app, KeyCode::Enter);

    assert_eq!(visible(&app), vec!["buy milk"]);
    assert_eq!(app.store().input(), "");
    assert_eq!(app.state().status_message.as_deref(), Some("Item added"));
}

#[test]
fn test_enter_on_empty_input_adds_nothing() {
    let mut app = app();
    press(&mut app, KeyCode::Enter);
    assert!(app.store().is_empty());
    assert_eq!(app.state().status_message.as_deref(), Some("Type something first"));
}

#[test]
fn test_backspace_edits_input() {
    let mut app = app();
    type_text(&mut app, "cats");
    press(&mut app, KeyCode::Backspace);
    assert_eq!(app.store().input(), "cat");
}

#[test]
fn test_letters_in_input_are_not_shortcuts() {
    let mut app = app();
    type_text(&mut app, "q?G");
    assert!(!app.should_quit());
    assert!(!app.is_dialog_visible());
    assert_eq!(app.store().input(), "q?G");
}

#[test]
fn test_toggle_and_remove_from_list() {
    let mut app = app();
    add(&mut app, "first");
    add(&mut app, "second");

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.state().focus, Focus::List);

    press(&mut app, KeyCode::Char(' '));
    assert!(app.store().items()[0].is_complete);

    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char('d'));
    assert_eq!(visible(&app), vec!["first"]);
    assert_eq!(app.state().status_message.as_deref(), Some("Item removed"));
}

#[test]
fn test_sort_and_filter_keys() {
    let mut app = app();
    add(&mut app, "b");
    add(&mut app, "a");
    press(&mut app, KeyCode::Tab);

    press(&mut app, KeyCode::Char('3'));
    assert_eq!(app.store().sort_mode(), SortMode::Alphabetical);
    assert_eq!(visible(&app), vec!["a", "b"]);

    press(&mut app, KeyCode::Char('3'));
    assert_eq!(app.store().sort_mode(), SortMode::None);
    assert_eq!(visible(&app), vec!["b", "a"]);

    press(&mut app, KeyCode::Char('c'));
    assert!(app.store().is_filter_active(FilterKind::Complete));
    assert!(visible(&app).is_empty());
}

#[test]
fn test_selection_follows_toggled_item_when_sorted() {
    let mut app = app();
    add(&mut app, "one");
    add(&mut app, "two");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char('1'));

    // "two" is selected, completing it moves it to the top
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Enter);
    assert_eq!(visible(&app), vec!["two", "one"]);

    // Toggling again acts on the same item
    press(&mut app, KeyCode::Enter);
    assert!(app.store().items().iter().all(|item| !item.is_complete));
}

#[test]
fn test_up_from_first_row_returns_to_input() {
    let mut app = app();
    add(&mut app, "only");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Up);
    assert_eq!(app.state().focus, Focus::Input);
}

#[test]
fn test_help_dialog_captures_keys() {
    let mut app = app();
    add(&mut app, "keep me");
    press(&mut app, KeyCode::Tab);

    press(&mut app, KeyCode::Char('?'));
    assert!(app.is_dialog_visible());

    // 'd' must not reach the list while the dialog is open
    press(&mut app, KeyCode::Char('d'));
    assert_eq!(app.store().len(), 1);

    press(&mut app, KeyCode::Esc);
    assert!(!app.is_dialog_visible());
    assert!(!app.should_quit());
}

#[test]
fn test_logs_dialog_toggle() {
    let mut app = app();
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char('G'));
    assert!(app.is_dialog_visible());
    press(&mut app, KeyCode::Char('G'));
    assert!(!app.is_dialog_visible());
}

#[test]
fn test_quit_keys() {
    let mut app = app();
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());

    let mut app = self::app();
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    app.handle_event(EventType::Key(ctrl_c)).unwrap();
    assert!(app.should_quit());
}

#[test]
fn test_ticks_do_not_change_state() {
    let mut app = app();
    add(&mut app, "steady");
    app.handle_event(EventType::Tick).unwrap();
    app.handle_event(EventType::Resize(100, 40)).unwrap();
    assert_eq!(visible(&app), vec!["steady"]);
    assert_eq!(app.state().focus, Focus::Input);
}

#[test]
fn test_status_message_clears_on_next_key() {
    let mut app = app();
    add(&mut app, "call mom");
    assert_eq!(app.state().status_message.as_deref(), Some("Item added"));

    press(&mut app, KeyCode::Tab);
    assert!(app.state().status_message.is_none());

    press(&mut app, KeyCode::Char(' '));
    assert_eq!(app.state().status_message.as_deref(), Some("Item completed"));
}

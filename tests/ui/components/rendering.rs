use chrono::{TimeZone, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
use todolist::config::Config;
use todolist::logger::Logger;
use todolist::store::{FixedClock, TodoListStore};
use todolist::ui::app_component::AppComponent;
use todolist::ui::core::{Component, EventType};

fn draw(app: &mut AppComponent<FixedClock>, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            app.render(f, area);
        })
        .unwrap();
    buffer_text(terminal.backend().buffer())
}

fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut text = String::new();
    for y in 0..area.height {
        for x in 0..area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

fn app_with(config: &Config) -> AppComponent<FixedClock> {
    let instant = Utc.with_ymd_and_hms(2024, 5, 5, 5, 5, 5).unwrap();
    AppComponent::with_store(config, Logger::new(), TodoListStore::with_clock(FixedClock::new(instant)))
}

fn press(app: &mut AppComponent<FixedClock>, code: KeyCode) {
    app.handle_event(EventType::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
}

#[test]
fn test_empty_screen_shows_title_and_placeholder() {
    let mut app = app_with(&Config::default());
    let screen = draw(&mut app, 80, 20);

    assert!(screen.contains("TODOs list"));
    assert!(screen.contains("What needs to be done?"));
    assert!(screen.contains("Nothing to do"));
    assert!(screen.contains("Sort:"));
    assert!(screen.contains("Filter:"));
}

#[test]
fn test_items_render_with_check_marks() {
    let mut app = app_with(&Config::default());
    for ch in "water plants".chars() {
        press(&mut app, KeyCode::Char(ch));
    }
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char(' '));

    let screen = draw(&mut app, 80, 20);
    assert!(screen.contains("[X] water plants"));
    assert!(screen.contains("1/1 done"));
}

#[test]
fn test_filtered_empty_message() {
    let mut app = app_with(&Config::default());
    for ch in "pending".chars() {
        press(&mut app, KeyCode::Char(ch));
    }
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char('c'));

    let screen = draw(&mut app, 80, 20);
    assert!(screen.contains("No items match the active filters"));
}

#[test]
fn test_configured_title_and_hidden_counts() {
    let mut config = Config::default();
    config.ui.title = "Weekend".to_string();
    config.display.show_counts = false;
    let mut app = app_with(&config);

    let screen = draw(&mut app, 80, 20);
    assert!(screen.contains("Weekend"));
    assert!(!screen.contains("done  Filter"));
}

#[test]
fn test_help_dialog_renders_over_list() {
    let mut app = app_with(&Config::default());
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char('?'));

    let screen = draw(&mut app, 100, 40);
    assert!(screen.contains("Help"));
    assert!(screen.contains("ADDING ITEMS"));
}

#[test]
fn test_logs_dialog_shows_buffer() {
    let logger = Logger::new();
    logger.push("[10:00:00.000] INFO  todolist: hello from the buffer".to_string());
    let instant = Utc.with_ymd_and_hms(2024, 5, 5, 5, 5, 5).unwrap();
    let mut app = AppComponent::with_store(
        &Config::default(),
        logger,
        TodoListStore::with_clock(FixedClock::new(instant)),
    );
    press(&mut app, KeyCode::Tab);
    app.handle_event(EventType::Key(KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT)))
        .unwrap();

    let screen = draw(&mut app, 100, 40);
    assert!(screen.contains("hello from the buffer"));
}

#[test]
fn test_shortcut_hints_return_after_message() {
    let mut app = app_with(&Config::default());
    for ch in "tea".chars() {
        press(&mut app, KeyCode::Char(ch));
    }
    press(&mut app, KeyCode::Enter);
    assert!(draw(&mut app, 120, 20).contains("Item added"));

    press(&mut app, KeyCode::Tab);
    let screen = draw(&mut app, 120, 20);
    assert!(!screen.contains("Item added"));
    assert!(screen.contains("Tab: input"));
}

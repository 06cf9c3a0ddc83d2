//! Keyboard and mouse event handling tests
//!
//! Feeds crossterm events through `ui::input::handle_event` and checks the
//! resulting app and IDE state.

use chrono::{TimeZone, Utc};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use henu::ide::highlight::Highlighter;
use henu::ide::terminal::HistoryEntry;
use henu::ide::BottomTab;
use henu::ui::app::{FocusPane, Route};
use henu::ui::config::Config;
use henu::ui::input::handle_event;
use henu::ui::App;
use std::time::{Duration, Instant};

/// Helper to create a key event
fn key_event(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::empty()))
}

fn ctrl(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

fn scroll(kind: MouseEventKind, modifiers: KeyModifiers) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column: 10,
        row: 10,
        modifiers,
    })
}

/// Helper to create a test app
fn create_test_app(route: Route, now: Instant) -> App {
    App::new(Config::default(), route, Highlighter::new().unwrap(), now)
}

/// Send a sequence of events at `now` with a fixed wall clock
fn send(app: &mut App, events: &[Event], now: Instant) {
    let wall_clock = Utc.with_ymd_and_hms(2025, 1, 15, 9, 30, 0).unwrap();
    for event in events {
        handle_event(app, event, now, wall_clock);
    }
}

fn type_text(app: &mut App, text: &str, now: Instant) {
    let events: Vec<Event> = text.chars().map(|c| key_event(KeyCode::Char(c))).collect();
    send(app, &events, now);
}

/// Open the terminal via the chord and let the transition finish
fn open_terminal(app: &mut App, now: Instant) -> Instant {
    send(app, &[ctrl('`')], now);
    let done = now + Duration::from_millis(450);
    app.tick(done);
    done
}

#[test]
fn test_quit_with_q_key() {
    let now = Instant::now();
    let mut app = create_test_app(Route::Landing, now);
    assert!(!app.should_quit);

    send(&mut app, &[key_event(KeyCode::Char('q'))], now);
    assert!(app.should_quit);
}

#[test]
fn test_digit_keys_navigate() {
    let now = Instant::now();
    let mut app = create_test_app(Route::Landing, now);

    send(&mut app, &[key_event(KeyCode::Char('3'))], now);
    assert_eq!(app.route, Route::Blog);

    send(&mut app, &[key_event(KeyCode::Char('5'))], now);
    assert_eq!(app.route, Route::Ide);
    assert!(app.ide().is_some());

    send(&mut app, &[key_event(KeyCode::Char('2'))], now);
    assert_eq!(app.route, Route::Workflow);
    assert!(app.ide().is_none());
}

#[test]
fn test_enter_on_landing_launches_ide() {
    let now = Instant::now();
    let mut app = create_test_app(Route::Landing, now);

    send(&mut app, &[key_event(KeyCode::Enter)], now);
    assert_eq!(app.route, Route::Ide);
}

#[test]
fn test_page_scrolling() {
    let now = Instant::now();
    let mut app = create_test_app(Route::Blog, now);

    send(
        &mut app,
        &[
            key_event(KeyCode::Char('j')),
            key_event(KeyCode::Down),
            key_event(KeyCode::Char('k')),
        ],
        now,
    );
    assert_eq!(app.page_scroll, 1);

    send(&mut app, &[scroll(MouseEventKind::ScrollDown, KeyModifiers::empty())], now);
    assert_eq!(app.page_scroll, 2);
}

#[test]
fn test_ctrl_backtick_and_ctrl_space_open_terminal() {
    for chord in [ctrl('`'), ctrl(' ')] {
        let now = Instant::now();
        let mut app = create_test_app(Route::Ide, now);

        send(&mut app, &[chord], now);
        assert!(app.ide().unwrap().is_transitioning());

        app.tick(now + Duration::from_millis(450));
        assert!(app.ide().unwrap().panels().terminal_visible);
        assert_eq!(app.focus, FocusPane::BottomPanel);
    }
}

#[test]
fn test_ctrl_scroll_opens_terminal_once() {
    let now = Instant::now();
    let mut app = create_test_app(Route::Ide, now);
    let revision = app.ide().unwrap().revision();

    let events: Vec<Event> = (0..5)
        .map(|_| scroll(MouseEventKind::ScrollDown, KeyModifiers::CONTROL))
        .collect();
    send(&mut app, &events, now);

    let ide = app.ide().unwrap();
    assert!(ide.is_transitioning());
    assert_eq!(ide.revision(), revision + 1);
    // The burst is swallowed rather than scrolling the editor
    assert_eq!(app.editor_scroll, 0);
}

#[test]
fn test_plain_scroll_moves_editor() {
    let now = Instant::now();
    let mut app = create_test_app(Route::Ide, now);

    send(
        &mut app,
        &[
            scroll(MouseEventKind::ScrollDown, KeyModifiers::empty()),
            scroll(MouseEventKind::ScrollDown, KeyModifiers::empty()),
        ],
        now,
    );
    assert_eq!(app.editor_scroll, 2);
    assert!(!app.ide().unwrap().is_transitioning());
}

#[test]
fn test_terminal_typing_and_enter() {
    let now = Instant::now();
    let mut app = create_test_app(Route::Ide, now);
    let now = open_terminal(&mut app, now);

    // 'q' and digits are text here, not bindings
    type_text(&mut app, "echo q5", now);
    send(&mut app, &[key_event(KeyCode::Enter)], now);

    assert!(!app.should_quit);
    assert_eq!(app.route, Route::Ide);
    let history = app.ide().unwrap().terminal().history();
    assert_eq!(history.last(), Some(&HistoryEntry::output("q5")));
}

#[test]
fn test_ctrl_letters_do_not_type() {
    let now = Instant::now();
    let mut app = create_test_app(Route::Ide, now);
    let now = open_terminal(&mut app, now);

    type_text(&mut app, "ls", now);
    send(&mut app, &[ctrl('a'), ctrl('e'), ctrl('l')], now);
    assert_eq!(app.ide().unwrap().terminal().input(), "ls");

    app.focus = FocusPane::Assistant;
    send(&mut app, &[ctrl('a'), key_event(KeyCode::Char('h'))], now);
    assert_eq!(app.ide().unwrap().assistant().input(), "h");
}

#[test]
fn test_terminal_backspace() {
    let now = Instant::now();
    let mut app = create_test_app(Route::Ide, now);
    let now = open_terminal(&mut app, now);

    type_text(&mut app, "lsx", now);
    send(&mut app, &[key_event(KeyCode::Backspace)], now);
    assert_eq!(app.ide().unwrap().terminal().input(), "ls");
}

#[test]
fn test_escape_closes_terminal() {
    let now = Instant::now();
    let mut app = create_test_app(Route::Ide, now);
    let now = open_terminal(&mut app, now);

    send(&mut app, &[key_event(KeyCode::Esc)], now);
    assert!(!app.ide().unwrap().panels().terminal_visible);
    assert_eq!(app.focus, FocusPane::Explorer);
}

#[test]
fn test_arrow_keys_switch_bottom_tabs() {
    let now = Instant::now();
    let mut app = create_test_app(Route::Ide, now);
    let now = open_terminal(&mut app, now);

    send(&mut app, &[key_event(KeyCode::Right)], now);
    assert_eq!(
        app.ide().unwrap().panels().active_bottom_tab,
        BottomTab::Console
    );
    assert!(!app.is_text_entry());

    // Read-only tab: plain keys are bindings again
    send(&mut app, &[key_event(KeyCode::Left), key_event(KeyCode::Left)], now);
    assert_eq!(
        app.ide().unwrap().panels().active_bottom_tab,
        BottomTab::Problems
    );
}

#[test]
fn test_chord_again_closes_terminal() {
    let now = Instant::now();
    let mut app = create_test_app(Route::Ide, now);
    let now = open_terminal(&mut app, now);

    send(&mut app, &[ctrl('`')], now + Duration::from_secs(1));
    app.tick(now + Duration::from_secs(1));
    assert!(!app.ide().unwrap().panels().terminal_visible);
    assert_eq!(app.focus, FocusPane::Explorer);
}

#[test]
fn test_tab_cycles_focus() {
    let now = Instant::now();
    let mut app = create_test_app(Route::Ide, now);
    assert_eq!(app.focus, FocusPane::Explorer);

    send(&mut app, &[key_event(KeyCode::Tab)], now);
    assert_eq!(app.focus, FocusPane::Editor);
    send(&mut app, &[key_event(KeyCode::Tab)], now);
    assert_eq!(app.focus, FocusPane::Assistant);
}

#[test]
fn test_assistant_chat() {
    let now = Instant::now();
    let mut app = create_test_app(Route::Ide, now);
    app.focus = FocusPane::Assistant;

    type_text(&mut app, "how do I test?", now);
    send(&mut app, &[key_event(KeyCode::Enter)], now);
    assert!(app.ide().unwrap().assistant().is_typing());

    app.tick(now + Duration::from_millis(1_000));
    let assistant = app.ide().unwrap().assistant();
    assert!(!assistant.is_typing());
    assert_eq!(assistant.messages().len(), 3);
}

#[test]
fn test_hide_assistant_moves_focus() {
    let now = Instant::now();
    let mut app = create_test_app(Route::Ide, now);

    send(&mut app, &[key_event(KeyCode::Char('a'))], now);
    assert!(!app.ide().unwrap().panels().assistant_visible);

    send(&mut app, &[key_event(KeyCode::Tab), key_event(KeyCode::Tab)], now);
    assert_eq!(app.focus, FocusPane::Explorer);
}

#[test]
fn test_o_opens_folder() {
    let now = Instant::now();
    let mut app = create_test_app(Route::Ide, now);

    send(&mut app, &[key_event(KeyCode::Char('o'))], now);
    app.tick(now + Duration::from_millis(450));
    assert!(app.ide().unwrap().panels().folder_opened);
}

#[test]
fn test_ctrl_c_quits_from_text_field() {
    let now = Instant::now();
    let mut app = create_test_app(Route::Ide, now);
    app.focus = FocusPane::Assistant;

    send(&mut app, &[ctrl('c')], now);
    assert!(app.should_quit);
}

#[test]
fn test_key_release_is_ignored() {
    let now = Instant::now();
    let mut app = create_test_app(Route::Landing, now);

    let release = Event::Key(KeyEvent::new_with_kind(
        KeyCode::Char('q'),
        KeyModifiers::empty(),
        KeyEventKind::Release,
    ));
    send(&mut app, &[release], now);
    assert!(!app.should_quit);
}

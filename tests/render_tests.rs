//! Rendering tests
//!
//! Draws the app into ratatui's `TestBackend` and inspects the buffer.

use henu::ide::animation::FILE_EXTENSIONS;
use henu::ide::highlight::Highlighter;
use henu::ide::{FileRef, Language};
use henu::ui::app::Route;
use henu::ui::config::{AnimationConfig, Config, TransitionStyle};
use henu::ui::{render, App};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::time::{Duration, Instant};

fn create_test_app(route: Route, style: TransitionStyle, now: Instant) -> App {
    let config = Config {
        animation: AnimationConfig {
            style,
            ..AnimationConfig::default()
        },
        ..Config::default()
    };
    App::new(config, route, Highlighter::new().unwrap(), now)
}

/// Render one frame and return the screen as text, one line per row.
fn draw(app: &App, width: u16, height: u16, now: Instant) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| render(f, app, now)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[test]
fn test_landing_page() {
    let now = Instant::now();
    let app = create_test_app(Route::Landing, TransitionStyle::Logo, now);
    let screen = draw(&app, 120, 30, now);

    assert!(screen.contains("A premium IDE experience"));
    assert!(screen.contains("1 HENU PS"));
    assert!(screen.contains("5 IDE"));
    assert!(screen.contains("[Enter] Launch IDE"));
}

#[test]
fn test_landing_tags_settle_on_ground_line() {
    let now = Instant::now();
    let app = create_test_app(Route::Landing, TransitionStyle::Logo, now);
    let settled = now + app.landing().unwrap().settle_after();
    let screen = draw(&app, 160, 40, settled + Duration::from_millis(100));

    // Page borders start with a corner; only the ground line starts bare
    assert!(screen.lines().any(|line| line.starts_with("────")));
    let visible = FILE_EXTENSIONS
        .iter()
        .filter(|ext| screen.contains(*ext))
        .count();
    assert!(visible >= 12, "only {} tags visible", visible);
    // Copy stays readable under the stage
    assert!(screen.contains("A premium IDE experience"));
}

#[test]
fn test_other_pages_have_no_tag_rain() {
    let now = Instant::now();
    let app = create_test_app(Route::Blog, TransitionStyle::Logo, now);
    assert!(app.landing().is_none());
    let screen = draw(&app, 160, 40, now + Duration::from_secs(5));
    assert!(!screen.contains(".ipynb"));
}

#[test]
fn test_every_static_page_renders_its_title() {
    let now = Instant::now();
    for route in [Route::Workflow, Route::Blog, Route::Resources] {
        let app = create_test_app(route, TransitionStyle::Logo, now);
        let screen = draw(&app, 120, 40, now);
        let title = route.page().unwrap().title;
        assert!(screen.contains(title), "{} missing", title);
    }
}

#[test]
fn test_ide_initial_screen() {
    let now = Instant::now();
    let app = create_test_app(Route::Ide, TransitionStyle::Logo, now);
    let screen = draw(&app, 140, 40, now);

    assert!(screen.contains("Explorer"));
    assert!(screen.contains("No folder opened"));
    assert!(screen.contains("[ Open Folder ]"));
    assert!(screen.contains("File"));
    assert!(screen.contains("AI Assistant"));
    assert!(screen.contains("JavaScript Sample"));
    // Terminal is hidden until opened
    assert!(!screen.contains("Problems"));
}

#[test]
fn test_logo_overlay_during_transition() {
    let now = Instant::now();
    let mut app = create_test_app(Route::Ide, TransitionStyle::Logo, now);
    if let Some(ide) = app.ide.as_mut() {
        ide.open_terminal_with_animation(now);
    }

    let screen = draw(&app, 140, 40, now + Duration::from_millis(200));
    assert!(screen.contains("Opening terminal..."));
}

#[test]
fn test_ripple_overlay_during_transition() {
    let now = Instant::now();
    let mut app = create_test_app(Route::Ide, TransitionStyle::Ripple, now);
    if let Some(ide) = app.ide.as_mut() {
        ide.open_folder_with_animation(now);
    }

    let screen = draw(&app, 140, 40, now + Duration::from_millis(300));
    // The editor title carries one separator dot; rings add many more
    assert!(screen.matches('·').count() > 10);
    assert!(!screen.contains("Opening folder..."));
}

#[test]
fn test_terminal_panel_after_transition() {
    let now = Instant::now();
    let mut app = create_test_app(Route::Ide, TransitionStyle::Logo, now);
    if let Some(ide) = app.ide.as_mut() {
        ide.open_terminal_with_animation(now);
    }
    let done = now + Duration::from_millis(450);
    app.tick(done);

    let screen = draw(&app, 140, 40, done);
    assert!(screen.contains("Terminal"));
    assert!(screen.contains("Console"));
    assert!(screen.contains("Problems"));
    assert!(screen.contains("HENU PS Terminal v1.0.0"));
    assert!(screen.contains("$ "));
    assert!(!screen.contains("Opening terminal..."));
}

#[test]
fn test_selected_file_preview() {
    let now = Instant::now();
    let mut app = create_test_app(Route::Ide, TransitionStyle::Logo, now);
    if let Some(ide) = app.ide.as_mut() {
        ide.select_file(FileRef::new("server.py", Language::Python));
    }

    let screen = draw(&app, 140, 40, now);
    assert!(screen.contains("server.py"));
    assert!(screen.contains("Python Sample"));
    assert!(screen.contains("calculate_fibonacci"));
}

#[test]
fn test_opened_folder_lists_tree() {
    let now = Instant::now();
    let mut app = create_test_app(Route::Ide, TransitionStyle::Logo, now);
    app.activate_selected(now);
    let done = now + Duration::from_millis(450);
    app.tick(done);

    let screen = draw(&app, 140, 40, done);
    assert!(screen.contains("my-project"));
    assert!(screen.contains("backend"));
    assert!(screen.contains("package.json"));
    assert!(!screen.contains("No folder opened"));
}

#[test]
fn test_logo_halo_while_assistant_thinks() {
    let now = Instant::now();
    let peak = now + Duration::from_millis(1200);
    let mut app = create_test_app(Route::Ide, TransitionStyle::Logo, now);
    app.tick(peak);

    let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();
    terminal.draw(|f| render(f, &app, peak)).unwrap();
    // Top bar sits under the nav row; (1, 1) is the logo's "H"
    assert_eq!(terminal.backend().buffer()[(1, 1)].symbol(), "H");
    assert_eq!(terminal.backend().buffer()[(1, 1)].bg, app.theme.surface);

    if let Some(ide) = app.ide.as_mut() {
        ide.assistant_push_char('?');
        ide.send_to_assistant(now + Duration::from_millis(500));
    }
    app.tick(peak);
    terminal.draw(|f| render(f, &app, peak)).unwrap();
    assert_ne!(terminal.backend().buffer()[(1, 1)].bg, app.theme.surface);
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let now = Instant::now();
    let mut app = create_test_app(Route::Ide, TransitionStyle::Ripple, now);
    if let Some(ide) = app.ide.as_mut() {
        ide.open_terminal_with_animation(now);
    }
    draw(&app, 12, 4, now + Duration::from_millis(100));

    let mut app = create_test_app(Route::Ide, TransitionStyle::Logo, now);
    if let Some(ide) = app.ide.as_mut() {
        ide.open_terminal_with_animation(now);
    }
    draw(&app, 12, 4, now + Duration::from_millis(100));
}

//! # Input Mapping
//!
//! Translates crossterm events into app actions and IDE [`InputEvent`]s.
//!
//! ## Global keys
//!
//! - `Ctrl+C` / `Ctrl+Q` - Quit from anywhere
//! - `q` - Quit (outside text fields)
//! - `1`..`5` - Jump to a page (outside text fields)
//! - `t` - Cycle theme (outside text fields)
//!
//! ## IDE screen
//!
//! - `Ctrl+`` ` - Open the terminal. Most terminals report this chord as
//!   `Ctrl+Space`, which is accepted too.
//! - `Ctrl+Scroll` - Open the terminal
//! - `Tab` - Cycle focus between visible panes
//! - `o` - Open the project folder
//! - `a` - Show/hide the assistant
//! - `Esc` - Close the terminal (bottom panel) or leave a text field
//!
//! Explorer: `j`/`k` move, `Enter`/`l` open, `h` collapse.
//! Editor: `j`/`k` scroll. Bottom panel: `Left`/`Right` switch tabs, typing
//! goes to the terminal. Assistant: typing, `Enter` sends.

use crate::ide::gesture::TERMINAL_CHORD_KEY;
use crate::ide::InputEvent;
use crate::ui::app::{App, FocusPane, Route};
use chrono::{DateTime, Utc};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use std::time::Instant;

/// Apply one terminal event to the app.
pub fn handle_event(app: &mut App, event: &Event, now: Instant, wall_clock: DateTime<Utc>) {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => {
            handle_key(app, key, now, wall_clock);
        }
        Event::Mouse(mouse) => handle_mouse(app, mouse, now),
        _ => {}
    }
}

/// Whether a key press is the open-terminal chord.
pub fn is_terminal_chord(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(c) if c == TERMINAL_CHORD_KEY || c == ' ')
}

fn handle_key(app: &mut App, key: &KeyEvent, now: Instant, wall_clock: DateTime<Utc>) {
    let has_ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if has_ctrl && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q')) {
        app.should_quit = true;
        return;
    }

    if app.route == Route::Ide {
        handle_ide_key(app, key, now, wall_clock);
    } else {
        handle_page_key(app, key, now);
    }
}

fn handle_page_key(app: &mut App, key: &KeyEvent, now: Instant) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.should_quit = true;
        }
        KeyCode::Char('t') => {
            app.cycle_theme();
        }
        KeyCode::Char(c) if Route::from_digit(c).is_some() => {
            if let Some(route) = Route::from_digit(c) {
                app.navigate(route, now);
            }
        }
        KeyCode::Enter if app.route == Route::Landing => {
            app.navigate(Route::Ide, now);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.scroll_page_down();
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.scroll_page_up();
        }
        _ => {}
    }
}

fn handle_ide_key(app: &mut App, key: &KeyEvent, now: Instant, wall_clock: DateTime<Utc>) {
    let Some(ide) = app.ide.as_mut() else {
        return;
    };
    ide.note_activity(now);

    if is_terminal_chord(key) {
        ide.handle_input(
            &InputEvent::Chord {
                key: TERMINAL_CHORD_KEY,
                ctrl: true,
            },
            now,
        );
        return;
    }

    if key.code == KeyCode::Tab {
        app.toggle_focus();
        return;
    }

    if app.is_text_entry() {
        handle_text_key(app, key, now, wall_clock);
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.should_quit = true;
        }
        KeyCode::Char('t') => {
            app.cycle_theme();
        }
        KeyCode::Char(c) if Route::from_digit(c).is_some() => {
            if let Some(route) = Route::from_digit(c) {
                app.navigate(route, now);
            }
        }
        KeyCode::Char('o') => {
            if let Some(ide) = app.ide.as_mut() {
                ide.open_folder_with_animation(now);
            }
        }
        KeyCode::Char('a') => {
            if let Some(ide) = app.ide.as_mut() {
                ide.toggle_assistant();
            }
            app.sync_focus();
        }
        _ => handle_pane_key(app, key, now),
    }
}

fn handle_pane_key(app: &mut App, key: &KeyEvent, now: Instant) {
    match app.focus {
        FocusPane::Explorer => match key.code {
            KeyCode::Down | KeyCode::Char('j') => app.next(),
            KeyCode::Up | KeyCode::Char('k') => app.previous(),
            KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => app.activate_selected(now),
            KeyCode::Left | KeyCode::Char('h') => app.collapse_selected(),
            _ => {}
        },
        FocusPane::Editor => match key.code {
            KeyCode::Down | KeyCode::Char('j') => app.scroll_editor_down(),
            KeyCode::Up | KeyCode::Char('k') => app.scroll_editor_up(),
            _ => {}
        },
        // Console and Problems tabs are read-only
        FocusPane::BottomPanel => handle_bottom_panel_key(app, key, now),
        FocusPane::Assistant => {}
    }
}

fn handle_bottom_panel_key(app: &mut App, key: &KeyEvent, now: Instant) {
    let Some(ide) = app.ide.as_mut() else {
        return;
    };
    let tab = ide.panels().active_bottom_tab;
    match key.code {
        KeyCode::Right => {
            ide.set_bottom_tab(tab.next());
        }
        KeyCode::Left => {
            ide.set_bottom_tab(tab.previous());
        }
        KeyCode::Esc => {
            ide.handle_input(&InputEvent::CloseControl, now);
            app.sync_focus();
        }
        _ => {}
    }
}

fn handle_text_key(app: &mut App, key: &KeyEvent, now: Instant, wall_clock: DateTime<Utc>) {
    // Unbound ctrl chords never type their bare letter
    let has_ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match app.focus {
        FocusPane::BottomPanel => match key.code {
            KeyCode::Esc => {
                if let Some(ide) = app.ide.as_mut() {
                    ide.handle_input(&InputEvent::CloseControl, now);
                }
                app.sync_focus();
            }
            KeyCode::Left | KeyCode::Right => handle_bottom_panel_key(app, key, now),
            _ => {
                if let Some(ide) = app.ide.as_mut() {
                    match key.code {
                        KeyCode::Enter => {
                            ide.submit_terminal(wall_clock);
                        }
                        KeyCode::Backspace => {
                            ide.terminal_pop_char();
                        }
                        KeyCode::Char(c) if !has_ctrl => {
                            ide.terminal_push_char(c);
                        }
                        _ => {}
                    }
                }
            }
        },
        FocusPane::Assistant => match key.code {
            KeyCode::Esc => {
                app.focus = FocusPane::Explorer;
            }
            _ => {
                if let Some(ide) = app.ide.as_mut() {
                    match key.code {
                        KeyCode::Enter => {
                            ide.send_to_assistant(now);
                        }
                        KeyCode::Backspace => {
                            ide.assistant_pop_char();
                        }
                        KeyCode::Char(c) if !has_ctrl => {
                            ide.assistant_push_char(c);
                        }
                        _ => {}
                    }
                }
            }
        },
        _ => {}
    }
}

fn handle_mouse(app: &mut App, mouse: &MouseEvent, now: Instant) {
    let delta = match mouse.kind {
        MouseEventKind::ScrollDown => 1.0,
        MouseEventKind::ScrollUp => -1.0,
        _ => return,
    };
    let modifier = mouse.modifiers.contains(KeyModifiers::CONTROL);

    if app.ide.is_none() {
        if delta > 0.0 {
            app.scroll_page_down();
        } else {
            app.scroll_page_up();
        }
        return;
    }

    let suppressed = app.ide.as_mut().is_some_and(|ide| {
        ide.handle_input(&InputEvent::Wheel { delta, modifier }, now)
            .suppress_default
    });
    if suppressed {
        return;
    }
    if delta > 0.0 {
        app.scroll_editor_down();
    } else {
        app.scroll_editor_up();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_chord_variants() {
        let backtick = KeyEvent::new(KeyCode::Char('`'), KeyModifiers::CONTROL);
        let space = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::CONTROL);
        let plain = KeyEvent::new(KeyCode::Char('`'), KeyModifiers::empty());

        assert!(is_terminal_chord(&backtick));
        assert!(is_terminal_chord(&space));
        assert!(!is_terminal_chord(&plain));
    }
}

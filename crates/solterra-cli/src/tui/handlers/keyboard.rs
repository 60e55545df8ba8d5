//! Keyboard event handling

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, View};

/// Lines a single arrow key press scrolls
const KEY_SCROLL_STEP: f32 = 2.0;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('l') => app.toggle_language(),
        KeyCode::Char('r') => app.retry_failed(),
        KeyCode::Char('1') => app.navigate(View::Home),
        KeyCode::Char('2') => app.navigate(View::Blogs),
        KeyCode::Char('3') => app.navigate(View::Gallery),
        KeyCode::Esc | KeyCode::Backspace => {
            if app.view == View::BlogDetail {
                app.navigate(View::Blogs);
            }
        }
        KeyCode::Enter => {
            if app.view == View::Blogs {
                app.open_selected_blog();
            }
        }
        KeyCode::Up => scroll(app, -KEY_SCROLL_STEP),
        KeyCode::Down => scroll(app, KEY_SCROLL_STEP),
        KeyCode::PageUp => scroll(app, -(app.body_area.height as f32)),
        KeyCode::PageDown => scroll(app, app.body_area.height as f32),
        _ => {}
    }
}

fn scroll(app: &mut App, delta: f32) {
    match app.view {
        View::Home => app.wheel(delta),
        View::Blogs => {
            if delta < 0.0 {
                app.blog_cursor = app.blog_cursor.saturating_sub(1);
            } else {
                let len = app.blogs.value().map(Vec::len).unwrap_or(0);
                app.blog_cursor = (app.blog_cursor + 1).min(len.saturating_sub(1));
            }
        }
        View::BlogDetail | View::Gallery => app.view_scroll.scroll_by(delta),
    }
}

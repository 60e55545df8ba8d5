//! Mouse event handling
//!
//! Wheel events on the home view route through the takeover choreography;
//! left-button drags stand in for touch gestures.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::tui::app::{App, View};

/// Lines a single wheel tick scrolls
const WHEEL_SCROLL_STEP: f32 = 3.0;

pub fn handle_mouse(app: &mut App, event: MouseEvent) {
    let (x, y) = (event.column as f32, event.row as f32);

    match event.kind {
        MouseEventKind::ScrollDown => wheel(app, WHEEL_SCROLL_STEP),
        MouseEventKind::ScrollUp => wheel(app, -WHEEL_SCROLL_STEP),
        MouseEventKind::Down(MouseButton::Left) => {
            if app.view == View::Home {
                app.touch_start(x, y);
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            if app.view == View::Home {
                app.touch_move(x, y);
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            if app.view == View::Home {
                app.touch_end();
            }
        }
        _ => {}
    }
}

fn wheel(app: &mut App, delta: f32) {
    match app.view {
        View::Home => app.wheel(delta),
        _ => app.view_scroll.scroll_by(delta),
    }
}

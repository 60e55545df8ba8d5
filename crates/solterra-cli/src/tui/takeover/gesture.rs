//! Gesture interpreter
//!
//! Normalizes wheel and drag input into advance/retreat intents while the
//! takeover is active. At most one intent is produced per discrete gesture;
//! input arriving while a transition is in flight is dropped, never queued.

use std::time::Instant;

use solterra_core::constants::choreography;

use super::geometry::{max_gallery_offset, PageGeometry};
use super::state::{Intent, Panel, ScrollMode, TakeoverState};

#[derive(Debug, Default)]
pub struct GestureInterpreter {
    /// Coordinates recorded at touch-start
    touch_origin: Option<(f32, f32)>,
    /// Last observed touch position, for incremental drag deltas
    last_touch: Option<(f32, f32)>,
    /// An intent was already produced for the current gesture
    gesture_consumed: bool,
}

impl GestureInterpreter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify a wheel tick. Returns the intent to forward, or None when
    /// the tick carries no direction or a transition is in flight.
    ///
    /// Callers only route wheel events here while the takeover is active;
    /// vertical-mode events stay with native page scroll.
    pub fn on_wheel(&self, state: &TakeoverState, delta_y: f32, now: Instant) -> Option<Intent> {
        if state.is_locked(now) {
            return None;
        }
        if state.mode != ScrollMode::Horizontal {
            return None;
        }
        if delta_y > 0.0 {
            Some(Intent::Advance)
        } else if delta_y < 0.0 {
            Some(Intent::Retreat)
        } else {
            None
        }
    }

    /// Record the start of a drag gesture
    pub fn on_touch_start(&mut self, x: f32, y: f32) {
        self.touch_origin = Some((x, y));
        self.last_touch = Some((x, y));
        self.gesture_consumed = false;
    }

    /// Process a drag move. On the gallery panel the horizontal delta is
    /// applied directly to the gallery offset; on the intro panel an upward
    /// drag past the threshold advances. Returns at most one intent for the
    /// whole gesture.
    pub fn on_touch_move(
        &mut self,
        state: &mut TakeoverState,
        geometry: &impl PageGeometry,
        x: f32,
        y: f32,
        now: Instant,
    ) -> Option<Intent> {
        let origin = self.touch_origin?;
        let last = self.last_touch.replace((x, y)).unwrap_or(origin);

        if state.is_locked(now) || self.gesture_consumed {
            return None;
        }
        if state.mode != ScrollMode::Horizontal {
            return None;
        }

        match state.panel {
            Panel::Intro => {
                if origin.1 - y > choreography::INTRO_DRAG_THRESHOLD {
                    self.gesture_consumed = true;
                    return Some(Intent::Advance);
                }
            }
            Panel::Gallery => {
                let max = max_gallery_offset(geometry);
                // Dragging left (x decreasing) scrolls the track forward
                let delta_x = last.0 - x;
                state.gallery_offset = (state.gallery_offset + delta_x).clamp(0.0, max);

                let at_right_bound = state.gallery_offset >= max;
                if at_right_bound && origin.0 - x > choreography::GALLERY_EXIT_DRAG_THRESHOLD {
                    self.gesture_consumed = true;
                    return Some(Intent::Advance);
                }
            }
        }
        None
    }

    /// End the current drag gesture
    pub fn on_touch_end(&mut self) {
        self.touch_origin = None;
        self.last_touch = None;
        self.gesture_consumed = false;
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::tui::takeover::geometry::synthetic::SyntheticPage;

    use super::*;

    fn horizontal_state(panel: Panel) -> TakeoverState {
        let mut state = TakeoverState::new();
        state.mode = ScrollMode::Horizontal;
        state.panel = panel;
        state
    }

    #[test]
    fn test_wheel_direction_classification() {
        let gestures = GestureInterpreter::new();
        let state = horizontal_state(Panel::Gallery);
        let now = Instant::now();

        assert_eq!(gestures.on_wheel(&state, 3.0, now), Some(Intent::Advance));
        assert_eq!(gestures.on_wheel(&state, -3.0, now), Some(Intent::Retreat));
        assert_eq!(gestures.on_wheel(&state, 0.0, now), None);
    }

    #[test]
    fn test_wheel_dropped_while_locked() {
        let gestures = GestureInterpreter::new();
        let mut state = horizontal_state(Panel::Gallery);
        let now = Instant::now();
        state.acquire_lock(now, Duration::from_millis(450));

        assert_eq!(gestures.on_wheel(&state, 3.0, now), None);
    }

    #[test]
    fn test_intro_drag_advances_past_threshold() {
        let mut gestures = GestureInterpreter::new();
        let mut state = horizontal_state(Panel::Intro);
        let page = SyntheticPage::new(1000.0, 2500.0);
        let now = Instant::now();

        gestures.on_touch_start(500.0, 400.0);
        // Small wobble below the threshold produces nothing
        assert_eq!(
            gestures.on_touch_move(&mut state, &page, 500.0, 397.0, now),
            None
        );
        // Crossing the threshold advances, once
        assert_eq!(
            gestures.on_touch_move(&mut state, &page, 500.0, 390.0, now),
            Some(Intent::Advance)
        );
        assert_eq!(
            gestures.on_touch_move(&mut state, &page, 500.0, 380.0, now),
            None
        );
    }

    #[test]
    fn test_gallery_drag_scrolls_and_clamps() {
        let mut gestures = GestureInterpreter::new();
        let mut state = horizontal_state(Panel::Gallery);
        let page = SyntheticPage::new(1000.0, 2500.0);
        let now = Instant::now();

        gestures.on_touch_start(800.0, 400.0);
        gestures.on_touch_move(&mut state, &page, 700.0, 400.0, now);
        assert_eq!(state.gallery_offset, 100.0);

        // Dragging right never goes below zero
        gestures.on_touch_move(&mut state, &page, 1000.0, 400.0, now);
        assert_eq!(state.gallery_offset, 0.0);
    }

    #[test]
    fn test_drag_past_right_bound_signals_exit() {
        let mut gestures = GestureInterpreter::new();
        let mut state = horizontal_state(Panel::Gallery);
        let page = SyntheticPage::new(1000.0, 2500.0);
        let now = Instant::now();
        state.gallery_offset = 1495.0;

        gestures.on_touch_start(800.0, 400.0);
        // Reaches the bound (offset clamps to 1500) and keeps pulling left
        let intent = gestures.on_touch_move(&mut state, &page, 780.0, 400.0, now);
        assert_eq!(state.gallery_offset, 1500.0);
        assert_eq!(intent, Some(Intent::Advance));
    }

    #[test]
    fn test_drag_ignored_while_locked() {
        let mut gestures = GestureInterpreter::new();
        let mut state = horizontal_state(Panel::Gallery);
        let page = SyntheticPage::new(1000.0, 2500.0);
        let now = Instant::now();
        state.gallery_offset = 200.0;
        state.acquire_lock(now, Duration::from_millis(450));

        gestures.on_touch_start(800.0, 400.0);
        assert_eq!(
            gestures.on_touch_move(&mut state, &page, 700.0, 400.0, now),
            None
        );
        assert_eq!(state.gallery_offset, 200.0);
    }
}

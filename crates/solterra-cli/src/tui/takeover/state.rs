//! Takeover state container
//!
//! Pure view-lifetime state for the scroll choreography: which scroll mode
//! is active, which panel is showing, how far the gallery track has
//! scrolled, and the transition lock deadline. Mutation discipline: the
//! sequencer owns panel/mode changes, the boundary detector owns entry and
//! exit, and the gesture interpreter may drag the gallery offset directly.

use std::time::{Duration, Instant};

/// Whether vertical input drives the document or the takeover panels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollMode {
    #[default]
    Vertical,
    Horizontal,
}

/// Full-viewport panel shown during takeover
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    Intro,
    Gallery,
}

impl Panel {
    pub fn index(&self) -> usize {
        match self {
            Panel::Intro => 0,
            Panel::Gallery => 1,
        }
    }
}

/// Directional intent produced by the gesture interpreter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Advance,
    Retreat,
}

/// View-lifetime state for the scroll takeover
#[derive(Debug)]
pub struct TakeoverState {
    pub mode: ScrollMode,
    pub panel: Panel,
    /// Offset into the gallery track, clamped to [0, track - viewport]
    pub gallery_offset: f32,
    /// True until the first downward entry resets the gallery
    first_entry: bool,
    /// Deadline of the in-flight transition, if any
    lock_until: Option<Instant>,
    /// While set, native document scrolling stays suppressed
    scroll_resume_at: Option<Instant>,
}

impl TakeoverState {
    pub fn new() -> Self {
        Self {
            mode: ScrollMode::Vertical,
            panel: Panel::Intro,
            gallery_offset: 0.0,
            first_entry: true,
            lock_until: None,
            scroll_resume_at: None,
        }
    }

    /// True while an animated transition is in flight. Intents arriving now
    /// are dropped, never queued.
    pub fn is_locked(&self, now: Instant) -> bool {
        self.lock_until.is_some_and(|deadline| now < deadline)
    }

    /// Hold the transition lock until `now + duration`. The matching
    /// release is the deadline itself; no code path can leave it held.
    pub(super) fn acquire_lock(&mut self, now: Instant, duration: Duration) {
        self.lock_until = Some(now + duration);
    }

    pub(super) fn release_expired_lock(&mut self, now: Instant) {
        if self.lock_until.is_some_and(|deadline| now >= deadline) {
            self.lock_until = None;
        }
    }

    /// Native scrolling is suppressed while a programmatic snap settles
    pub fn is_scroll_suppressed(&self, now: Instant) -> bool {
        self.scroll_resume_at.is_some_and(|deadline| now < deadline)
    }

    pub(super) fn suppress_scroll_until(&mut self, deadline: Instant) {
        self.scroll_resume_at = Some(deadline);
    }

    /// Clears an expired suppression window; returns true when scrolling
    /// may resume this tick
    pub(super) fn take_scroll_resume(&mut self, now: Instant) -> bool {
        if self.scroll_resume_at.is_some_and(|deadline| now >= deadline) {
            self.scroll_resume_at = None;
            return true;
        }
        false
    }

    pub fn first_entry(&self) -> bool {
        self.first_entry
    }

    pub(super) fn set_first_entry(&mut self, value: bool) {
        self.first_entry = value;
    }

    /// Horizontal translate applied to the panel row, in hundredths of a
    /// viewport width (panel index x 100)
    pub fn panel_offset_vw(&self) -> f32 {
        self.panel.index() as f32 * 100.0
    }
}

impl Default for TakeoverState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = TakeoverState::new();
        assert_eq!(state.mode, ScrollMode::Vertical);
        assert_eq!(state.panel, Panel::Intro);
        assert_eq!(state.gallery_offset, 0.0);
        assert!(state.first_entry());
        assert!(!state.is_locked(Instant::now()));
    }

    #[test]
    fn test_lock_expires_at_deadline() {
        let mut state = TakeoverState::new();
        let now = Instant::now();
        state.acquire_lock(now, Duration::from_millis(450));

        assert!(state.is_locked(now));
        assert!(state.is_locked(now + Duration::from_millis(449)));
        assert!(!state.is_locked(now + Duration::from_millis(450)));
    }

    #[test]
    fn test_panel_offset_follows_index() {
        let mut state = TakeoverState::new();
        assert_eq!(state.panel_offset_vw(), 0.0);
        state.panel = Panel::Gallery;
        assert_eq!(state.panel_offset_vw(), 100.0);
    }

    #[test]
    fn test_scroll_resume_fires_once() {
        let mut state = TakeoverState::new();
        let now = Instant::now();
        state.suppress_scroll_until(now + Duration::from_millis(500));

        assert!(state.is_scroll_suppressed(now));
        assert!(!state.take_scroll_resume(now));

        let later = now + Duration::from_millis(501);
        assert!(state.take_scroll_resume(later));
        assert!(!state.take_scroll_resume(later));
    }
}

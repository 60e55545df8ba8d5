//! Mode boundary detector
//!
//! Watches native page scroll against the takeover section's bounding box
//! and flips the scroll mode on entry and exit. Checks are rate-limited to
//! one per frame interval and skipped entirely while a transition is in
//! flight or scrolling is suppressed, so the detector never reacts to the
//! sequencer's own programmatic snaps.

use std::time::Instant;

use tracing::debug;

use solterra_core::constants::choreography;

use super::geometry::{PageGeometry, ScrollSurface};
use super::state::{Panel, ScrollMode, TakeoverState};

#[derive(Debug, Default)]
pub struct BoundaryDetector {
    last_check: Option<Instant>,
    /// Scroll position at the previous check, for direction
    last_scroll_y: Option<f32>,
}

impl BoundaryDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// React to a native scroll position change
    pub fn on_scroll<P>(&mut self, state: &mut TakeoverState, page: &mut P, now: Instant)
    where
        P: PageGeometry + ScrollSurface,
    {
        if let Some(last) = self.last_check {
            if now.duration_since(last) < choreography::FRAME_INTERVAL {
                return;
            }
        }
        self.last_check = Some(now);

        let y = page.scroll_y();
        let ascending = self.last_scroll_y.replace(y).is_some_and(|last| y < last);

        if state.is_locked(now) || state.is_scroll_suppressed(now) {
            return;
        }

        match state.mode {
            ScrollMode::Vertical => {
                if page.section_bounds().straddles_top() {
                    self.enter(state, page);
                } else if ascending && self.within_reentry_margin(page) {
                    // Fast upward scrolls can skip the straddling frame
                    // entirely; the margin catches them. Only scrolling back
                    // up qualifies, so the exit anchor just past the section
                    // never re-captures a user continuing downward. Offset
                    // and first-entry flag are left untouched.
                    state.mode = ScrollMode::Horizontal;
                    state.panel = Panel::Gallery;
                    page.scroll_to(page.section_top());
                    debug!("Re-entered takeover via margin");
                }
            }
            ScrollMode::Horizontal => {
                if !page.section_bounds().straddles_top() {
                    state.mode = ScrollMode::Vertical;
                    state.panel = Panel::Intro;
                    state.set_first_entry(true);
                    debug!("Exited takeover, section left viewport");
                }
            }
        }
    }

    fn enter<P>(&self, state: &mut TakeoverState, page: &mut P)
    where
        P: PageGeometry + ScrollSurface,
    {
        state.mode = ScrollMode::Horizontal;
        // Entry lands on the gallery panel, not the intro. Deliberate; the
        // intro is only reached by retreating.
        state.panel = Panel::Gallery;
        if state.first_entry() {
            state.gallery_offset = 0.0;
            state.set_first_entry(false);
        }
        // Snap to the section top so the panels never partially overlap
        // neighbouring content
        page.scroll_to(page.section_top());
        debug!(offset = state.gallery_offset, "Entered takeover");
    }

    fn within_reentry_margin(&self, page: &impl PageGeometry) -> bool {
        let y = page.scroll_y();
        y >= page.section_top() - choreography::REENTRY_MARGIN
            && y <= page.following_section_top() + choreography::REENTRY_MARGIN
    }
}

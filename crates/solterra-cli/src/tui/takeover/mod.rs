//! Homepage scroll takeover choreography
//!
//! The home page hijacks vertical scroll input while its showcase section
//! fills the viewport, turning it into horizontal panel navigation. Four
//! collaborators share one state container:
//!
//! - [`BoundaryDetector`] watches native page scroll and flips the mode on
//!   entry/exit.
//! - [`GestureInterpreter`] normalizes wheel and drag input into
//!   advance/retreat intents while the takeover is active.
//! - [`TransitionSequencer`] serializes intents into non-overlapping
//!   transitions, at most one in flight.
//! - [`TakeoverState`] holds the mode, active panel, and gallery offset.
//!
//! Geometry is abstracted behind [`PageGeometry`]/[`ScrollSurface`] so the
//! decision logic is testable without a rendering surface.

mod boundary;
mod clock;
mod geometry;
mod gesture;
mod sequencer;
mod state;

pub use boundary::BoundaryDetector;
pub use clock::{Clock, SystemClock};
pub use geometry::{max_gallery_offset, PageGeometry, ScrollSurface, SectionBounds};
pub use gesture::GestureInterpreter;
pub use sequencer::{is_exhausted, TransitionSequencer};
pub use state::{Intent, Panel, ScrollMode, TakeoverState};

use std::time::Instant;

/// Groups the takeover collaborators the way the app consumes them
#[derive(Debug, Default)]
pub struct TakeoverController {
    pub state: TakeoverState,
    pub gestures: GestureInterpreter,
    pub sequencer: TransitionSequencer,
    pub boundary: BoundaryDetector,
}

impl TakeoverController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a wheel tick. Returns true when the event was intercepted and
    /// the caller must not apply native page scroll.
    pub fn on_wheel<P>(&mut self, delta_y: f32, page: &mut P, now: Instant) -> bool
    where
        P: PageGeometry + ScrollSurface,
    {
        if self.state.mode != ScrollMode::Horizontal {
            return false;
        }
        if let Some(intent) = self.gestures.on_wheel(&self.state, delta_y, now) {
            self.sequencer.handle(&mut self.state, intent, page, now);
        }
        true
    }

    /// Feed a native page scroll change
    pub fn on_page_scroll<P>(&mut self, page: &mut P, now: Instant)
    where
        P: PageGeometry + ScrollSurface,
    {
        self.boundary.on_scroll(&mut self.state, page, now);
    }

    pub fn on_touch_start(&mut self, x: f32, y: f32) {
        self.gestures.on_touch_start(x, y);
    }

    /// Feed a drag move. Returns true when the event was intercepted.
    pub fn on_touch_move<P>(&mut self, x: f32, y: f32, page: &mut P, now: Instant) -> bool
    where
        P: PageGeometry + ScrollSurface,
    {
        if self.state.mode != ScrollMode::Horizontal {
            return false;
        }
        if let Some(intent) = self
            .gestures
            .on_touch_move(&mut self.state, &*page, x, y, now)
        {
            self.sequencer.handle(&mut self.state, intent, page, now);
        }
        true
    }

    pub fn on_touch_end(&mut self) {
        self.gestures.on_touch_end();
    }

    /// Release expired locks and restore suppressed scrolling. Runs every
    /// loop iteration.
    pub fn tick(&mut self, surface: &mut impl ScrollSurface, now: Instant) {
        self.sequencer.tick(&mut self.state, surface, now);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use solterra_core::constants::choreography;

    use super::geometry::synthetic::SyntheticPage;
    use super::*;

    /// Walk the whole takeover: enter from vertical scroll, advance the
    /// gallery in clamped steps, exhaust it, exit below the section.
    #[test]
    fn test_full_takeover_walkthrough() {
        let mut controller = TakeoverController::new();
        // Track 3200 wide against a 1000 viewport: steps of 900, 900, then
        // a clamped 400 to land exactly on the 2200 bound.
        let mut page = SyntheticPage::new(1000.0, 3200.0);
        let mut now = Instant::now();

        // Scroll down until the section straddles the viewport top
        page.scroll_y = page.section_top + 10.0;
        controller.on_page_scroll(&mut page, now);

        assert_eq!(controller.state.mode, ScrollMode::Horizontal);
        assert_eq!(controller.state.panel, Panel::Gallery);
        assert_eq!(controller.state.gallery_offset, 0.0);
        // Snapped to the section top, no partial overlap
        assert_eq!(page.scroll_y, page.section_top);

        let expected = [900.0, 1800.0, 2200.0];
        for offset in expected {
            now += choreography::SETTLE + Duration::from_millis(10);
            controller.tick(&mut page, now);
            assert!(controller.on_wheel(3.0, &mut page, now));
            assert_eq!(controller.state.gallery_offset, offset);
        }
        assert!(is_exhausted(&controller.state, &page));

        // One more advance exits below the section
        now += choreography::SETTLE + Duration::from_millis(10);
        controller.tick(&mut page, now);
        assert!(controller.on_wheel(3.0, &mut page, now));

        assert_eq!(controller.state.mode, ScrollMode::Vertical);
        assert_eq!(controller.state.panel, Panel::Intro);
        assert!(controller.state.first_entry());
        assert_eq!(
            page.scroll_y,
            page.section_end + choreography::EXIT_OVERSHOOT
        );
        assert!(!page.scroll_enabled);

        // Scroll permission returns after the suppression window
        now += choreography::EXIT_SUPPRESS + Duration::from_millis(10);
        controller.tick(&mut page, now);
        assert!(page.scroll_enabled);
    }

    /// After the exhaustion exit drops the page just past the section end,
    /// continuing to scroll down must keep native scrolling; the re-entry
    /// margin only applies when coming back up.
    #[test]
    fn test_scrolling_down_after_exit_stays_vertical() {
        let mut controller = TakeoverController::new();
        let mut page = SyntheticPage::new(1000.0, 2500.0);
        let mut now = Instant::now();

        page.scroll_y = page.section_top;
        controller.on_page_scroll(&mut page, now);
        assert_eq!(controller.state.mode, ScrollMode::Horizontal);

        // Exhaust the gallery and advance once more to exit
        controller.state.gallery_offset = 1500.0;
        now += choreography::SETTLE + Duration::from_millis(10);
        controller.tick(&mut page, now);
        assert!(controller.on_wheel(3.0, &mut page, now));
        assert_eq!(controller.state.mode, ScrollMode::Vertical);
        let anchor = page.section_end + choreography::EXIT_OVERSHOOT;
        assert_eq!(page.scroll_y, anchor);

        now += choreography::EXIT_SUPPRESS + Duration::from_millis(10);
        controller.tick(&mut page, now);
        assert!(page.scroll_enabled);

        // Keep scrolling down through the margin band below the section
        for _ in 0..4 {
            now += choreography::FRAME_INTERVAL;
            page.scroll_y += 10.0;
            controller.on_page_scroll(&mut page, now);
            assert_eq!(controller.state.mode, ScrollMode::Vertical);
        }
        assert_eq!(page.scroll_y, anchor + 40.0);
    }

    #[test]
    fn test_wheel_not_intercepted_while_vertical() {
        let mut controller = TakeoverController::new();
        let mut page = SyntheticPage::new(1000.0, 3200.0);
        let now = Instant::now();

        assert!(!controller.on_wheel(3.0, &mut page, now));
        assert_eq!(controller.state.mode, ScrollMode::Vertical);
    }
}

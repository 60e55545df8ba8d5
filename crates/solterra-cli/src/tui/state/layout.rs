//! Home Layout - computed geometry of the home page
//!
//! Recomputed each frame from the terminal size and loaded content, then
//! lent to the takeover choreography through [`HomeSurface`]. One terminal
//! cell maps to one layout unit.

use ratatui::layout::Rect;

use crate::tui::takeover::{PageGeometry, ScrollSurface, SectionBounds};

use super::PageScroll;

/// Width of one gallery card relative to the viewport
const GALLERY_CARD_FRACTION: f32 = 0.8;

/// Vertical extents of the home page sections, in layout units from the
/// document top
#[derive(Debug, Clone, Copy)]
pub struct HomeLayout {
    pub viewport_width: f32,
    pub viewport_height: f32,
    /// Top of the takeover showcase section
    pub section_top: f32,
    /// End of the takeover showcase section
    pub section_end: f32,
    /// Top of the tours section that follows the showcase
    pub following_top: f32,
    /// Total width of the gallery track inside the showcase
    pub track_width: f32,
    /// Full document height, for scroll bounds
    pub total_height: f32,
}

impl HomeLayout {
    /// Lay the home page out for the given terminal area. The hero fills
    /// one viewport, the showcase the next, and the remaining sections
    /// scale with their content counts.
    pub fn compute(area: Rect, gallery_len: usize, tours_len: usize, blogs_len: usize) -> Self {
        let viewport_width = area.width as f32;
        let viewport_height = (area.height as f32).max(1.0);

        let hero_height = viewport_height;
        let section_top = hero_height;
        let section_end = section_top + viewport_height;
        let following_top = section_end;

        // Each card row is a third of a viewport tall, with section headers
        let tours_height = viewport_height * 0.4 + tours_len as f32 * (viewport_height / 3.0);
        let blogs_height = viewport_height * 0.4 + blogs_len as f32 * (viewport_height / 3.0);
        let footer_height = 6.0;
        let total_height = following_top + tours_height + blogs_height + footer_height;

        let track_width =
            (gallery_len as f32 * viewport_width * GALLERY_CARD_FRACTION).max(viewport_width);

        Self {
            viewport_width,
            viewport_height,
            section_top,
            section_end,
            following_top,
            track_width,
            total_height,
        }
    }
}

/// Borrowed view of the home page as the choreography sees it: immutable
/// geometry plus the mutable scroll state
pub struct HomeSurface<'a> {
    pub layout: &'a HomeLayout,
    pub scroll: &'a mut PageScroll,
}

impl PageGeometry for HomeSurface<'_> {
    fn section_bounds(&self) -> SectionBounds {
        SectionBounds {
            top: self.layout.section_top - self.scroll.offset,
            bottom: self.layout.section_end - self.scroll.offset,
        }
    }

    fn section_top(&self) -> f32 {
        self.layout.section_top
    }

    fn section_end(&self) -> f32 {
        self.layout.section_end
    }

    fn following_section_top(&self) -> f32 {
        self.layout.following_top
    }

    fn scroll_y(&self) -> f32 {
        self.scroll.offset
    }

    fn viewport_width(&self) -> f32 {
        self.layout.viewport_width
    }

    fn track_width(&self) -> f32 {
        self.layout.track_width
    }
}

impl ScrollSurface for HomeSurface<'_> {
    fn scroll_to(&mut self, y: f32) {
        self.scroll.snap_to(y);
    }

    fn set_scroll_enabled(&mut self, enabled: bool) {
        self.scroll.enabled = enabled;
    }
}

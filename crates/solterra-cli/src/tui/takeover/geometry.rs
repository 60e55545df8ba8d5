//! Geometry abstraction for the takeover choreography
//!
//! Decouples the decision logic from the rendering surface so it can be
//! unit-tested with synthetic geometry. All distances are layout units;
//! the TUI maps one terminal cell to one unit.

/// Takeover section bounding box relative to the viewport top
#[derive(Debug, Clone, Copy)]
pub struct SectionBounds {
    pub top: f32,
    pub bottom: f32,
}

impl SectionBounds {
    /// Section straddles the viewport top edge
    pub fn straddles_top(&self) -> bool {
        self.top <= 0.0 && self.bottom > 0.0
    }
}

/// Read-only page geometry as seen by the choreography
pub trait PageGeometry {
    /// Takeover section box relative to the viewport
    fn section_bounds(&self) -> SectionBounds;
    /// Absolute document offset of the takeover section top
    fn section_top(&self) -> f32;
    /// Absolute document offset of the takeover section end
    fn section_end(&self) -> f32;
    /// Absolute document offset of the section that follows the takeover
    fn following_section_top(&self) -> f32;
    /// Current document scroll position
    fn scroll_y(&self) -> f32;
    /// Viewport width
    fn viewport_width(&self) -> f32;
    /// Total width of the inner gallery track
    fn track_width(&self) -> f32;
}

/// Mutable scroll surface the choreography drives
pub trait ScrollSurface {
    /// Snap the document scroll position. Programmatic snaps apply even
    /// while native scrolling is suppressed.
    fn scroll_to(&mut self, y: f32);
    /// Enable or suppress native document scrolling
    fn set_scroll_enabled(&mut self, enabled: bool);
}

/// Upper bound of the gallery offset; zero when the track fits the
/// viewport (or the geometry is degenerate)
pub fn max_gallery_offset(geometry: &impl PageGeometry) -> f32 {
    (geometry.track_width() - geometry.viewport_width()).max(0.0)
}

#[cfg(test)]
pub mod synthetic {
    //! Synthetic page for choreography tests

    use super::{PageGeometry, ScrollSurface, SectionBounds};

    /// In-memory page: a hero above the takeover section, a tours section
    /// below it, and a gallery track of configurable width.
    #[derive(Debug, Clone)]
    pub struct SyntheticPage {
        pub section_top: f32,
        pub section_end: f32,
        pub following_top: f32,
        pub scroll_y: f32,
        pub viewport_width: f32,
        pub track_width: f32,
        pub scroll_enabled: bool,
    }

    impl SyntheticPage {
        pub fn new(viewport_width: f32, track_width: f32) -> Self {
            Self {
                section_top: 600.0,
                section_end: 1200.0,
                following_top: 1200.0,
                scroll_y: 0.0,
                viewport_width,
                track_width,
                scroll_enabled: true,
            }
        }
    }

    impl PageGeometry for SyntheticPage {
        fn section_bounds(&self) -> SectionBounds {
            SectionBounds {
                top: self.section_top - self.scroll_y,
                bottom: self.section_end - self.scroll_y,
            }
        }

        fn section_top(&self) -> f32 {
            self.section_top
        }

        fn section_end(&self) -> f32 {
            self.section_end
        }

        fn following_section_top(&self) -> f32 {
            self.following_top
        }

        fn scroll_y(&self) -> f32 {
            self.scroll_y
        }

        fn viewport_width(&self) -> f32 {
            self.viewport_width
        }

        fn track_width(&self) -> f32 {
            self.track_width
        }
    }

    impl ScrollSurface for SyntheticPage {
        fn scroll_to(&mut self, y: f32) {
            self.scroll_y = y;
        }

        fn set_scroll_enabled(&mut self, enabled: bool) {
            self.scroll_enabled = enabled;
        }
    }
}

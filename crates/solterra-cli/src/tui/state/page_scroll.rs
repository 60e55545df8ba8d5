//! Page Scroll - vertical scroll position of the current view
//!
//! Owns the document-level scroll offset and the enabled flag the takeover
//! choreography toggles while it snaps the page programmatically.

/// Vertical scroll state for a page-style view
#[derive(Debug, Clone)]
pub struct PageScroll {
    /// Current scroll offset in layout units (0 = top)
    pub offset: f32,
    /// Maximum scroll offset for bounds checking
    pub max_offset: f32,
    /// While false, user-driven scrolling is ignored; programmatic snaps
    /// still apply
    pub enabled: bool,
}

impl PageScroll {
    pub fn new() -> Self {
        Self {
            offset: 0.0,
            max_offset: 0.0,
            enabled: true,
        }
    }

    /// Scroll by a user-driven delta, respecting the enabled flag
    pub fn scroll_by(&mut self, delta: f32) {
        if !self.enabled {
            return;
        }
        self.offset = (self.offset + delta).clamp(0.0, self.max_offset);
    }

    /// Snap to an absolute position. Programmatic; applies even while
    /// user scrolling is suppressed.
    pub fn snap_to(&mut self, offset: f32) {
        self.offset = offset.clamp(0.0, self.max_offset);
    }

    /// Update the maximum offset from the current content height and
    /// viewport height, keeping the offset in bounds
    pub fn update_max_offset(&mut self, content_height: f32, viewport_height: f32) {
        self.max_offset = (content_height - viewport_height).max(0.0);
        self.offset = self.offset.min(self.max_offset);
    }
}

impl Default for PageScroll {
    fn default() -> Self {
        Self::new()
    }
}

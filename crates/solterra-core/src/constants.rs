//! Application constants and configuration defaults
//!
//! Centralized location for magic numbers and default values

use std::time::Duration;

/// HTTP client configuration
pub mod http {
    use super::*;

    /// Connection timeout for HTTP requests
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Overall request timeout - content payloads are small
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
}

/// UI configuration
pub mod ui {
    use super::*;

    /// Config directory name
    pub const CONFIG_DIR_NAME: &str = ".solterra";

    /// Brand title shown in the nav bar when no config overrides it
    pub const DEFAULT_BRAND_TITLE: &str = "Solterra Expeditions";

    /// Main loop tick cadence (~60fps)
    pub const TICK_INTERVAL: Duration = Duration::from_millis(16);
}

/// Scroll takeover choreography timings and thresholds
///
/// The magnitudes match the original choreography: settle windows in
/// milliseconds, distances in layout units.
pub mod choreography {
    use super::*;

    /// Settle window for an animated gallery step
    pub const SETTLE: Duration = Duration::from_millis(450);

    /// Document scroll stays suppressed this long while exiting takeover
    pub const EXIT_SUPPRESS: Duration = Duration::from_millis(500);

    /// Fraction of the viewport width advanced per wheel step
    pub const STEP_FRACTION: f32 = 0.9;

    /// Sub-unit tolerance when deciding the gallery track is exhausted
    pub const EXHAUSTION_TOLERANCE: f32 = 2.0;

    /// Margin around the takeover section for re-entry while vertical
    pub const REENTRY_MARGIN: f32 = 50.0;

    /// Upward drag distance that advances out of the intro panel
    pub const INTRO_DRAG_THRESHOLD: f32 = 5.0;

    /// Leftward drag past the right bound that exits the gallery
    pub const GALLERY_EXIT_DRAG_THRESHOLD: f32 = 8.0;

    /// Snap lands this far past the section end on exit, so the entry
    /// condition does not immediately re-trigger
    pub const EXIT_OVERSHOOT: f32 = 1.0;

    /// Minimum interval between boundary-detector checks
    pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);
}

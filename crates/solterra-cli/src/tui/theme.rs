//! Solterra palette
//!
//! Single fixed theme. Warm sand and sunset tones over a dark ground, with
//! teal for interactive accents.

use ratatui::style::Color;

/// Colors used across the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub dim: Color,
    /// Headings and the brand mark
    pub heading: Color,
    /// Interactive accents: nav highlight, links, key hints
    pub accent: Color,
    /// Featured badges and the hero tagline
    pub highlight: Color,
    pub error: Color,
    /// Panel background inside the takeover showcase
    pub panel_bg: Color,
    pub nav_bg: Color,
}

impl Theme {
    pub fn solterra() -> Self {
        Self {
            bg: Color::Rgb(24, 22, 20),
            fg: Color::Rgb(232, 224, 210),
            dim: Color::Rgb(130, 122, 110),
            heading: Color::Rgb(244, 180, 96),
            accent: Color::Rgb(92, 190, 178),
            highlight: Color::Rgb(235, 130, 88),
            error: Color::Rgb(224, 108, 100),
            panel_bg: Color::Rgb(34, 31, 28),
            nav_bg: Color::Rgb(30, 27, 24),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::solterra()
    }
}

//! Terminal UI
//!
//! View rendering, input handling, and the homepage scroll-takeover
//! choreography.

pub mod app;
mod components;
mod fetch;
mod handlers;
pub mod state;
pub mod takeover;
mod theme;
mod views;

pub use app::App;

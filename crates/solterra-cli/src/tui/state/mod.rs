//! App State Components
//!
//! Centralized state management for the TUI.
//! Groups related state into logical modules.

mod layout;
mod page_scroll;
mod sections;

pub use layout::{HomeLayout, HomeSurface};
pub use page_scroll::PageScroll;
pub use sections::SectionData;

//! Solterra Core - Shared library for the Solterra terminal experience
//!
//! This crate provides the non-visual functionality for the Solterra TUI:
//! - Content API client (tours, blogs, gallery) with cancellable fetches
//! - Translation service with EN/ES dictionary lookup
//! - Preference and profile storage
//! - Site configuration

pub mod auth;
pub mod config;
pub mod constants;
pub mod content;
pub mod i18n;
pub mod paths;
pub mod storage;

// Re-exports for convenience
pub use auth::{AuthContext, User};
pub use config::SiteConfig;
pub use content::{Blog, ContentClient, ContentError, GalleryItem, Tour};
pub use i18n::{Language, Translator};
pub use storage::Preferences;

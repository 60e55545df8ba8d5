//! Content API access
//!
//! The external REST API is treated as a black box: this module only knows
//! the four endpoints, their response envelopes, and how to abort a fetch
//! mid-flight.

mod client;
mod error;
mod models;

pub use client::ContentClient;
pub use error::ContentError;
pub use models::{featured, Blog, Featured, GalleryItem, Tour};

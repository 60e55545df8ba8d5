//! Local storage
//!
//! Simple key-value persistence for user preferences. No database: the only
//! durable state is a small JSON file in the config directory.

mod preferences;

pub use preferences::Preferences;

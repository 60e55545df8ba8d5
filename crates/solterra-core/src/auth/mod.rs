//! Authentication context
//!
//! Authentication itself is delegated to an external provider. This module
//! only reads the resulting profile file so the UI can decide whether to
//! show the dashboard entry.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::paths;

/// Profile stored by the external auth provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Current user context, read once at startup
#[derive(Debug, Clone, Default)]
pub struct AuthContext {
    user: Option<User>,
}

impl AuthContext {
    /// Read the stored profile; anonymous when missing or unreadable
    pub fn load() -> Self {
        Self::load_from(&paths::profile_path())
    }

    pub fn load_from(path: &Path) -> Self {
        let user = fs::read_to_string(path)
            .ok()
            .and_then(|contents| serde_json::from_str(&contents).ok());
        Self { user }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }
}

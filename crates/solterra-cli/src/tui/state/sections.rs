//! Section Data - per-section fetch lifecycle
//!
//! Each content section of a view (tours, blogs, gallery) loads
//! independently; one failing never takes down the rest of the page.

use solterra_core::ContentError;

/// Lifecycle of one content section's data
#[derive(Debug, Clone, Default)]
pub enum SectionData<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Failed {
        message: String,
        retryable: bool,
    },
}

impl<T> SectionData<T> {
    pub fn begin_loading(&mut self) {
        *self = SectionData::Loading;
    }

    /// Fold a fetch result into the section. Cancelled fetches are dropped
    /// without touching the current state; navigation away must never show
    /// an error or clobber data that is already on screen.
    pub fn apply(&mut self, result: Result<T, ContentError>) {
        match result {
            Ok(value) => *self = SectionData::Loaded(value),
            Err(err) if err.is_cancelled() => {}
            Err(err) => {
                *self = SectionData::Failed {
                    retryable: err.is_retryable(),
                    message: err.to_string(),
                }
            }
        }
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            SectionData::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SectionData::Loading)
    }

    pub fn error(&self) -> Option<(&str, bool)> {
        match self {
            SectionData::Failed { message, retryable } => Some((message.as_str(), *retryable)),
            _ => None,
        }
    }
}

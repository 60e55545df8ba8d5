//! Translation service
//!
//! Simple key-value dictionary lookup. Keys are the English UI labels;
//! untranslated keys fall back to the key itself so missing entries never
//! break rendering.

mod dictionary;

use serde::{Deserialize, Serialize};

use dictionary::SPANISH;

/// Supported UI languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
}

impl Language {
    /// Two-letter code used in API query parameters and storage
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
        }
    }

    /// Parse a two-letter code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Language::En),
            "es" => Some(Language::Es),
            _ => None,
        }
    }

    /// The other supported language
    pub fn toggled(&self) -> Self {
        match self {
            Language::En => Language::Es,
            Language::Es => Language::En,
        }
    }
}

/// Dictionary-backed translator for UI labels
#[derive(Debug, Clone)]
pub struct Translator {
    language: Language,
}

impl Translator {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Translate a UI key, falling back to the key verbatim when no entry
    /// exists for the active language
    pub fn translate<'a>(&self, key: &'a str) -> &'a str {
        match self.language {
            Language::En => key,
            Language::Es => SPANISH.get(key).copied().unwrap_or(key),
        }
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(Language::En)
    }
}

//! Fixed syllable-to-syllable remapping.
//!
//! The built-in table lives in `default_pronunciation.toml`. A replacement
//! can be installed with [`PronunciationMap::init_custom`] before the first
//! [`PronunciationMap::global`] call.

mod config;

pub use config::{parse_pronunciation_toml, PronunciationConfigError};

use std::collections::HashMap;
use std::sync::OnceLock;

pub(crate) const DEFAULT_TOML: &str = include_str!("default_pronunciation.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Returns the embedded default pronunciation TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PronunciationMap {
    mappings: HashMap<String, String>,
}

impl PronunciationMap {
    pub fn from_toml(toml_str: &str) -> Result<Self, PronunciationConfigError> {
        Ok(Self {
            mappings: parse_pronunciation_toml(toml_str)?,
        })
    }

    /// Map that leaves every syllable unchanged.
    pub fn identity() -> Self {
        Self::default()
    }

    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), PronunciationConfigError> {
        parse_pronunciation_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| PronunciationConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static PronunciationMap {
        static INSTANCE: OnceLock<PronunciationMap> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            Self::from_toml(toml_str).expect("pronunciation TOML must be valid")
        })
    }

    /// The replacement for `syllable`, or `syllable` itself when unmapped.
    pub fn remap<'a>(&'a self, syllable: &'a str) -> &'a str {
        self.mappings
            .get(syllable)
            .map(|s| s.as_str())
            .unwrap_or(syllable)
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}

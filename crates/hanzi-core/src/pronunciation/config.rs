use std::collections::HashMap;

use serde::Deserialize;

#[derive(Deserialize)]
struct PronunciationConfig {
    mappings: HashMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum PronunciationConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[mappings] table is empty")]
    Empty,
    #[error("key must be lowercase ASCII: {0}")]
    InvalidKey(String),
    #[error("empty value for key: {0}")]
    EmptyValue(String),
    #[error("pronunciation map already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text into a `HashMap<syllable, replacement>`.
pub fn parse_pronunciation_toml(
    toml_str: &str,
) -> Result<HashMap<String, String>, PronunciationConfigError> {
    let config: PronunciationConfig =
        toml::from_str(toml_str).map_err(|e| PronunciationConfigError::Parse(e.to_string()))?;

    if config.mappings.is_empty() {
        return Err(PronunciationConfigError::Empty);
    }

    for (key, value) in &config.mappings {
        if key.is_empty() || !key.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(PronunciationConfigError::InvalidKey(key.clone()));
        }
        if value.is_empty() {
            return Err(PronunciationConfigError::EmptyValue(key.clone()));
        }
    }

    Ok(config.mappings)
}

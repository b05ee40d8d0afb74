use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Deserialize)]
struct SyllableConfig {
    syllables: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum SyllableConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[syllables] table is empty")]
    Empty,
    #[error("key must be a single character: {0}")]
    InvalidKey(String),
    #[error("syllable must be non-empty lowercase ASCII: {key} = {value:?}")]
    InvalidValue { key: String, value: String },
}

/// Parse TOML text into a `BTreeMap<char, syllable>`.
pub fn parse_syllable_toml(toml_str: &str) -> Result<BTreeMap<char, String>, SyllableConfigError> {
    let config: SyllableConfig =
        toml::from_str(toml_str).map_err(|e| SyllableConfigError::Parse(e.to_string()))?;

    if config.syllables.is_empty() {
        return Err(SyllableConfigError::Empty);
    }

    let mut map = BTreeMap::new();
    for (key, value) in config.syllables {
        let mut chars = key.chars();
        let c = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => return Err(SyllableConfigError::InvalidKey(key)),
        };
        if value.is_empty() || !value.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(SyllableConfigError::InvalidValue { key, value });
        }
        map.insert(c, value);
    }
    Ok(map)
}

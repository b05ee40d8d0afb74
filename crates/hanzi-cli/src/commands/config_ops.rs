use std::fs;
use std::path::Path;

use hanzi_core::pronunciation::{self, PronunciationMap};
use hanzi_core::settings::{self, Settings};

use crate::CliError;

pub fn load_settings(file: &Path) -> Result<Settings, CliError> {
    let content = fs::read_to_string(file).map_err(CliError::io(file))?;
    Ok(settings::parse_settings_toml(&content)?)
}

pub fn load_pronunciation(file: &Path) -> Result<PronunciationMap, CliError> {
    let content = fs::read_to_string(file).map_err(CliError::io(file))?;
    Ok(PronunciationMap::from_toml(&content)?)
}

/// Install a custom settings file as the global settings.
pub fn install_settings(file: &Path) -> Result<(), CliError> {
    let content = fs::read_to_string(file).map_err(CliError::io(file))?;
    settings::init_custom(content)?;
    Ok(())
}

pub fn pronunciation_export() {
    print!("{}", pronunciation::default_toml());
}

pub fn pronunciation_validate(file: &Path) {
    let map = die!(load_pronunciation(file), "Error: {}");
    println!("OK: {} mappings", map.len());
}

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &Path) {
    let s = die!(load_settings(file), "Error: {}");
    println!(
        "OK: conversion.mode={}, diagnostics.percentage_precision={}",
        s.conversion.mode, s.diagnostics.percentage_precision
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use hanzi_core::ConversionMode;

    #[test]
    fn test_exported_defaults_validate() {
        let dir = tempfile::tempdir().unwrap();
        let map_path = dir.path().join("pronunciation.toml");
        fs::write(&map_path, pronunciation::default_toml()).unwrap();
        assert_eq!(load_pronunciation(&map_path).unwrap().len(), 18);

        let settings_path = dir.path().join("settings.toml");
        fs::write(&settings_path, settings::default_toml()).unwrap();
        let s = load_settings(&settings_path).unwrap();
        assert_eq!(s.conversion.mode, ConversionMode::SpacedPronunciation);
    }

    #[test]
    fn test_invalid_settings_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "[conversion]\nmode = \"whisper\"\n").unwrap();
        let err = load_settings(&path).unwrap_err();
        assert!(matches!(err, CliError::Settings(_)));
    }

    #[test]
    fn test_invalid_pronunciation_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.toml");
        fs::write(&path, "[mappings]\n").unwrap();
        let err = load_pronunciation(&path).unwrap_err();
        assert!(matches!(err, CliError::Pronunciation(_)));
    }

    #[test]
    fn test_install_settings_rejects_invalid_before_init() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "not valid toml {{{").unwrap();
        assert!(matches!(
            install_settings(&path).unwrap_err(),
            CliError::Settings(_)
        ));
    }
}

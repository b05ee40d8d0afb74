pub mod commands;
mod trace_init;

pub use trace_init::init_tracing;

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid syllable table: {0}")]
    Syllable(#[from] hanzi_core::syllable::SyllableConfigError),
    #[error("invalid pronunciation map: {0}")]
    Pronunciation(#[from] hanzi_core::pronunciation::PronunciationConfigError),
    #[error("invalid settings: {0}")]
    Settings(#[from] hanzi_core::settings::SettingsError),
}

impl CliError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| CliError::Io { path, source }
    }
}

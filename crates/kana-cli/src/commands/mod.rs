use std::io;

use kana_core::romaji::RomajiConfigError;
use kana_core::settings::SettingsError;

pub mod config_ops;
pub mod convert_ops;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("No text to convert")]
    NoText,
    #[error("Error reading {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("Error reading stdin: {0}")]
    Stdin(#[source] io::Error),
    #[error("Error writing output: {0}")]
    Write(#[source] io::Error),
    #[error("{path}: {source}")]
    Romaji {
        path: String,
        #[source]
        source: RomajiConfigError,
    },
    #[error("{path}: {source}")]
    Settings {
        path: String,
        #[source]
        source: SettingsError,
    },
}

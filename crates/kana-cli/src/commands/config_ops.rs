use std::fs;
use std::io::Write;

use kana_core::romaji::{EntryKind, PhoneticTable};
use kana_core::settings;

use super::CliError;

fn read_file(path: &str) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::ReadFile {
        path: path.to_string(),
        source,
    })
}

/// Install custom tables before any conversion touches the globals.
pub fn load_custom(romaji: Option<&str>, settings_file: Option<&str>) -> Result<(), CliError> {
    if let Some(path) = romaji {
        let content = read_file(path)?;
        PhoneticTable::init_custom(content).map_err(|source| CliError::Romaji {
            path: path.to_string(),
            source,
        })?;
        tracing::debug!(path, "custom romaji table installed");
    }
    if let Some(path) = settings_file {
        let content = read_file(path)?;
        settings::init_custom(content).map_err(|source| CliError::Settings {
            path: path.to_string(),
            source,
        })?;
        tracing::debug!(path, "custom settings installed");
    }
    Ok(())
}

pub fn romaji_export(out: &mut impl Write) -> Result<(), CliError> {
    write!(out, "{}", kana_core::romaji::default_toml()).map_err(CliError::Write)
}

/// Validate a romaji TOML file and return a one-line summary.
pub fn romaji_validate(file: &str) -> Result<String, CliError> {
    let content = read_file(file)?;
    let table = PhoneticTable::from_toml(&content).map_err(|source| CliError::Romaji {
        path: file.to_string(),
        source,
    })?;
    let geminates = table
        .entries()
        .iter()
        .filter(|&&(_, _, kind)| kind == EntryKind::Geminate)
        .count();
    Ok(format!(
        "OK: {} mappings ({} geminate placeholders, longest key {})",
        table.len(),
        geminates,
        table.max_key_len()
    ))
}

pub fn settings_export(out: &mut impl Write) -> Result<(), CliError> {
    write!(out, "{}", settings::default_toml()).map_err(CliError::Write)
}

pub fn settings_validate(file: &str) -> Result<String, CliError> {
    let content = read_file(file)?;
    let s = settings::parse_settings_toml(&content).map_err(|source| CliError::Settings {
        path: file.to_string(),
        source,
    })?;
    Ok(format!(
        "OK: notice.show_conversion_notice={}",
        s.notice.show_conversion_notice
    ))
}

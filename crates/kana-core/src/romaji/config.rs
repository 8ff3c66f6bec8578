use std::collections::BTreeMap;

use serde::Deserialize;

use crate::unicode::is_hiragana;

/// Longest romaji key accepted in a table.
pub const MAX_KEY_LEN: usize = 4;

#[derive(Deserialize)]
struct RomajiConfig {
    mappings: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum RomajiConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[mappings] table is empty")]
    Empty,
    #[error("invalid key {0:?}: expected 1-4 lowercase ASCII letters")]
    InvalidKey(String),
    #[error("empty value for key: {0}")]
    EmptyValue(String),
    #[error("invalid value {value:?} for key {key}: expected hiragana or a geminate placeholder")]
    InvalidValue { key: String, value: String },
    #[error("phonetic table already initialized")]
    AlreadyInitialized,
}

/// How the matcher treats a table value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Every char is in the Hiragana block.
    Kana,
    /// `っ` followed by one literal consonant, e.g. `kk = "っk"`.
    Geminate,
}

/// Classify a table value, or `None` if it belongs to neither category.
pub fn classify_value(value: &str) -> Option<EntryKind> {
    let mut chars = value.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some('っ'), Some(c), None) if c.is_ascii_lowercase() => Some(EntryKind::Geminate),
        (Some(_), _, _) if value.chars().all(is_hiragana) => Some(EntryKind::Kana),
        _ => None,
    }
}

fn is_valid_key(key: &str) -> bool {
    (1..=MAX_KEY_LEN).contains(&key.len()) && key.bytes().all(|b| b.is_ascii_lowercase())
}

/// Parse TOML text into a sorted `BTreeMap<romaji, kana>`.
pub fn parse_romaji_toml(toml_str: &str) -> Result<BTreeMap<String, String>, RomajiConfigError> {
    let config: RomajiConfig =
        toml::from_str(toml_str).map_err(|e| RomajiConfigError::Parse(e.to_string()))?;

    if config.mappings.is_empty() {
        return Err(RomajiConfigError::Empty);
    }

    for (key, value) in &config.mappings {
        if !is_valid_key(key) {
            return Err(RomajiConfigError::InvalidKey(key.clone()));
        }
        if value.is_empty() {
            return Err(RomajiConfigError::EmptyValue(key.clone()));
        }
        if classify_value(value).is_none() {
            return Err(RomajiConfigError::InvalidValue {
                key: key.clone(),
                value: value.clone(),
            });
        }
    }

    Ok(config.mappings)
}

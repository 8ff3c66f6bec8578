use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

use super::config::{classify_value, parse_romaji_toml, EntryKind, RomajiConfigError};
use super::table::DEFAULT_TOML;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Read-only romaji → hiragana mapping.
#[derive(Debug, Clone)]
pub struct PhoneticTable {
    map: HashMap<String, String>,
    max_key_len: usize,
}

impl PhoneticTable {
    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), RomajiConfigError> {
        // Validate eagerly
        parse_romaji_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| RomajiConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static PhoneticTable {
        static INSTANCE: OnceLock<PhoneticTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            let table = PhoneticTable::from_toml(toml_str).expect("romaji TOML must be valid");
            tracing::debug!(entries = table.len(), "phonetic table initialized");
            table
        })
    }

    /// Build a standalone table, bypassing the global singleton.
    pub fn from_toml(toml_str: &str) -> Result<Self, RomajiConfigError> {
        parse_romaji_toml(toml_str).map(Self::from_map)
    }

    fn from_map(map: BTreeMap<String, String>) -> Self {
        let max_key_len = map.keys().map(String::len).max().unwrap_or(0);
        Self {
            map: map.into_iter().collect(),
            max_key_len,
        }
    }

    pub fn get(&self, romaji: &str) -> Option<&str> {
        self.map.get(romaji).map(String::as_str)
    }

    /// Length in chars of the longest key. Keys are ASCII, so bytes == chars.
    pub fn max_key_len(&self) -> usize {
        self.max_key_len
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// All entries sorted by key, tagged with their kind.
    pub fn entries(&self) -> Vec<(&str, &str, EntryKind)> {
        let mut entries: Vec<_> = self
            .map
            .iter()
            .filter_map(|(k, v)| classify_value(v).map(|kind| (k.as_str(), v.as_str(), kind)))
            .collect();
        entries.sort_unstable_by_key(|&(k, _, _)| k);
        entries
    }
}

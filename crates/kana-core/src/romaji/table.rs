/// The default romaji table, embedded at compile time.
pub const DEFAULT_TOML: &str = include_str!("default_romaji.toml");

/// Returns the embedded default romaji TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}

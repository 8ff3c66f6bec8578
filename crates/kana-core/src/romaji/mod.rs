//! Romaji-to-kana transliteration.
//!
//! A single left-to-right pass over the input, matching the longest key of a
//! [`PhoneticTable`] at each position, with dedicated rules for sokuon (っ)
//! and hatsuon (ん).

mod config;
mod convert;
mod phonetic;
mod table;

pub use config::{classify_value, parse_romaji_toml, EntryKind, RomajiConfigError, MAX_KEY_LEN};
pub use convert::{romaji_to_hiragana, romaji_to_katakana, transliterate, Script, Transliterator};
pub use phonetic::PhoneticTable;
pub use table::default_toml;

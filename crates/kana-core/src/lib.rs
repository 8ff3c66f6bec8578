//! Romaji → hiragana → katakana transliteration.
//!
//! ```
//! assert_eq!(kana_core::romaji_to_hiragana("konnichiwa"), "こんにちわ");
//! assert_eq!(kana_core::romaji_to_katakana("sushi"), "スシ");
//! assert_eq!(kana_core::hiragana_to_katakana("あいうえお"), "アイウエオ");
//! ```

pub mod romaji;
pub mod settings;
pub mod unicode;


pub use romaji::{romaji_to_hiragana, romaji_to_katakana, transliterate, Script, Transliterator};
pub use unicode::hiragana_to_katakana;

use std::fmt;

use tracing::{debug, debug_span};

use super::phonetic::PhoneticTable;
use crate::unicode::hiragana_to_katakana;

/// Consonants whose doubling produces a sokuon (っ).
const GEMINATE_CONSONANTS: &[char] = &['k', 's', 't', 'p'];

fn is_vowel(ch: char) -> bool {
    matches!(ch, 'a' | 'i' | 'u' | 'e' | 'o')
}

/// Target script of a romaji conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    Hiragana,
    Katakana,
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Script::Hiragana => "hiragana",
            Script::Katakana => "katakana",
        })
    }
}

/// Converts romaji to kana over a borrowed phonetic table.
#[derive(Debug, Clone, Copy)]
pub struct Transliterator<'t> {
    table: &'t PhoneticTable,
}

impl Transliterator<'static> {
    /// Transliterator over the process-wide table.
    pub fn global() -> Self {
        Self::new(PhoneticTable::global())
    }
}

impl<'t> Transliterator<'t> {
    pub fn new(table: &'t PhoneticTable) -> Self {
        Self { table }
    }

    /// Convert romaji to hiragana.
    ///
    /// The input is lowercased and hyphens are dropped. At each position the
    /// first matching rule wins:
    ///
    /// 1. doubled k/s/t/p emits `っ` and advances one char, so the second
    ///    consonant starts the next syllable;
    /// 2. the longest table key at the cursor (3, 2, then 1 chars for the
    ///    default table);
    /// 3. `n` at the end or before a non-vowel emits `ん`;
    /// 4. anything else is copied through.
    ///
    /// Never fails; unmapped text (digits, punctuation, kana) is preserved.
    pub fn romaji_to_hiragana(&self, text: &str) -> String {
        let chars: Vec<char> = text
            .to_lowercase()
            .chars()
            .filter(|&c| c != '-')
            .collect();
        let _span = debug_span!("romaji_to_hiragana", char_count = chars.len()).entered();

        let mut result = String::with_capacity(chars.len() * 3);
        let mut key = String::with_capacity(self.table.max_key_len());
        let mut i = 0;

        while i < chars.len() {
            let ch = chars[i];
            let next = chars.get(i + 1).copied();

            // Sokuon: consume only the first of the pair
            if next == Some(ch) && GEMINATE_CONSONANTS.contains(&ch) {
                result.push('っ');
                i += 1;
                continue;
            }

            let longest = self.table.max_key_len().min(chars.len() - i);
            let matched = (1..=longest).rev().find_map(|len| {
                key.clear();
                key.extend(&chars[i..i + len]);
                self.table.get(&key).map(|kana| (kana, len))
            });
            if let Some((kana, len)) = matched {
                result.push_str(kana);
                i += len;
                continue;
            }

            // Hatsuon for tables without a bare "n" entry
            if ch == 'n' && !next.is_some_and(is_vowel) {
                result.push('ん');
                i += 1;
                continue;
            }

            result.push(ch);
            i += 1;
        }

        debug!(output_chars = result.chars().count());
        result
    }

    /// Convert romaji to katakana via hiragana.
    pub fn romaji_to_katakana(&self, text: &str) -> String {
        hiragana_to_katakana(&self.romaji_to_hiragana(text))
    }

    pub fn transliterate(&self, text: &str, script: Script) -> String {
        match script {
            Script::Hiragana => self.romaji_to_hiragana(text),
            Script::Katakana => self.romaji_to_katakana(text),
        }
    }
}

/// Convert romaji to hiragana using the global table.
pub fn romaji_to_hiragana(text: &str) -> String {
    Transliterator::global().romaji_to_hiragana(text)
}

/// Convert romaji to katakana using the global table.
pub fn romaji_to_katakana(text: &str) -> String {
    Transliterator::global().romaji_to_katakana(text)
}

pub fn transliterate(text: &str, script: Script) -> String {
    Transliterator::global().transliterate(text, script)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hira(s: &str) -> String {
        romaji_to_hiragana(s)
    }

    #[test]
    fn test_vowel() {
        assert_eq!(hira("a"), "あ");
        assert_eq!(hira("aiueo"), "あいうえお");
    }

    #[test]
    fn test_shi() {
        assert_eq!(hira("shi"), "し");
    }

    #[test]
    fn test_youon_kya() {
        assert_eq!(hira("kya"), "きゃ");
        assert_eq!(hira("ryokou"), "りょこう");
    }

    #[test]
    fn test_sokuon_kekka() {
        assert_eq!(hira("kekka"), "けっか");
    }

    #[test]
    fn test_sokuon_each_consonant() {
        assert_eq!(hira("zasshi"), "ざっし");
        assert_eq!(hira("kitte"), "きって");
        assert_eq!(hira("ippai"), "いっぱい");
    }

    #[test]
    fn test_sokuon_tch_cluster() {
        assert_eq!(hira("kotchi"), "こっちい");
        assert_eq!(hira("cchi"), "っちい");
    }

    #[test]
    fn test_no_sokuon_for_other_doubles() {
        // Only k/s/t/p geminate
        assert_eq!(hira("amma"), "あmま");
        assert_eq!(hira("oo"), "おお");
    }

    #[test]
    fn test_hatsuon_end() {
        assert_eq!(hira("kon"), "こん");
    }

    #[test]
    fn test_konnichiwa() {
        assert_eq!(hira("konnichiwa"), "こんにちわ");
    }

    #[test]
    fn test_hatsuon_before_consonant() {
        assert_eq!(hira("sensei"), "せんせい");
        assert_eq!(hira("kanpai"), "かんぱい");
    }

    #[test]
    fn test_sentence_with_hyphens_and_spaces() {
        assert_eq!(
            hira("watashi-ga keeki-wo taberu"),
            "わたしが けえきを たべる"
        );
        assert_eq!(hira("watashi-ga"), hira("watashiga"));
    }

    #[test]
    fn test_uppercase_folded() {
        assert_eq!(hira("KONNICHIWA"), "こんにちわ");
        assert_eq!(hira("Sushi"), hira("sushi"));
    }

    #[test]
    fn test_passthrough() {
        assert_eq!(hira("xyz123"), "xyz123");
        assert_eq!(hira("ka, ki!"), "か, き!");
        assert_eq!(hira("すし"), "すし");
    }

    #[test]
    fn test_empty() {
        assert_eq!(hira(""), "");
        assert_eq!(hira("---"), "");
        assert_eq!(romaji_to_katakana(""), "");
    }

    #[test]
    fn test_katakana_sushi() {
        assert_eq!(romaji_to_katakana("sushi"), "スシ");
        assert_eq!(romaji_to_katakana("kekka"), "ケッカ");
    }

    #[test]
    fn test_transliterate_dispatch() {
        assert_eq!(transliterate("neko", Script::Hiragana), "ねこ");
        assert_eq!(transliterate("neko", Script::Katakana), "ネコ");
    }

    #[test]
    fn test_lossy_spellings_collide() {
        // Not invertible: several spellings land on the same kana
        assert_eq!(hira("tchi"), hira("cchi"));
        assert_eq!(hira("KA"), hira("ka"));
    }

    #[test]
    fn test_custom_table_without_n() {
        let table = PhoneticTable::from_toml(
            "[mappings]\nka = \"か\"\nna = \"な\"\na = \"あ\"\n",
        )
        .unwrap();
        let t = Transliterator::new(&table);
        assert_eq!(t.romaji_to_hiragana("kan"), "かん");
        assert_eq!(t.romaji_to_hiragana("nka"), "んか");
        assert_eq!(t.romaji_to_hiragana("kana"), "かな");
        // "n" before a vowel with no matching entry is copied through
        assert_eq!(t.romaji_to_hiragana("ni"), "ni");
    }

    #[test]
    fn test_custom_table_four_char_key() {
        let table =
            PhoneticTable::from_toml("[mappings]\nxtsu = \"っ\"\ntsu = \"つ\"\n").unwrap();
        let t = Transliterator::new(&table);
        assert_eq!(t.romaji_to_hiragana("xtsutsu"), "っつ");
    }

    #[test]
    fn test_script_display() {
        assert_eq!(Script::Hiragana.to_string(), "hiragana");
        assert_eq!(Script::Katakana.to_string(), "katakana");
    }
}

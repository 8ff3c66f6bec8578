//! Character-level Unicode classification for Japanese text.

/// Distance from a hiragana code point to its katakana counterpart.
const KATAKANA_OFFSET: u32 = 0x30A0 - 0x3040;

/// Check the full Hiragana block (U+3040..U+309F), unassigned code points included.
pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

/// Check the full Katakana block (U+30A0..U+30FF).
pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

/// Convert a hiragana string to katakana.
/// Non-hiragana characters (ー, ASCII, kanji, etc.) are passed through unchanged.
pub fn hiragana_to_katakana(s: &str) -> String {
    s.chars()
        .map(|c| {
            if is_hiragana(c) {
                char::from_u32(c as u32 + KATAKANA_OFFSET).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hiragana_to_katakana() {
        assert_eq!(hiragana_to_katakana("あいうえお"), "アイウエオ");
        assert_eq!(hiragana_to_katakana("きょうは"), "キョウハ");
        assert_eq!(hiragana_to_katakana("らーめん"), "ラーメン");
        assert_eq!(hiragana_to_katakana("っ"), "ッ");
        assert_eq!(hiragana_to_katakana(""), "");
        assert_eq!(hiragana_to_katakana("abc"), "abc");
        assert_eq!(hiragana_to_katakana("漢字とカナ"), "漢字トカナ");
    }

    #[test]
    fn test_katakana_unchanged() {
        assert_eq!(hiragana_to_katakana("カタカナ"), "カタカナ");
    }

    #[test]
    fn test_block_edges() {
        assert_eq!(hiragana_to_katakana("\u{3040}\u{309F}"), "\u{30A0}\u{30FF}");
        assert_eq!(hiragana_to_katakana("\u{303F}\u{30A0}"), "\u{303F}\u{30A0}");
    }

    #[test]
    fn test_char_classification() {
        assert!(is_hiragana('あ'));
        assert!(is_hiragana('ゟ'));
        assert!(!is_hiragana('ア'));
        assert!(is_katakana('ア'));
        assert!(is_katakana('ー'));
        assert!(!is_katakana('あ'));
        assert!(!is_hiragana('a'));
    }
}

//! Word ↔ key-sequence mapping.
//!
//! Every word is indexed under its numeric keypad encoding regardless of the
//! layout it was typed on; the keypad's letter groups are the canonical key
//! alphabet.

use crate::layout::{KeyId, KeyRole, Layout};
use crate::unicode::to_lower;

const DIGIT_GROUPS: &[(char, &str)] = &[
    ('2', "abcç"),
    ('3', "def"),
    ('4', "gğhıi"),
    ('5', "jkl"),
    ('6', "mnoö"),
    ('7', "pqrsş"),
    ('8', "tuvü"),
    ('9', "wxyz"),
];

/// Keypad digit carrying `c`, after Turkish lowercasing.
pub fn digit_for(c: char) -> Option<char> {
    let c = to_lower(c);
    DIGIT_GROUPS
        .iter()
        .find(|(_, letters)| letters.contains(c))
        .map(|&(d, _)| d)
}

/// Letters carried by a keypad digit; empty for `0`, `1` and non-digits.
pub fn letters_for_digit(digit: char) -> &'static str {
    DIGIT_GROUPS
        .iter()
        .find(|&&(d, _)| d == digit)
        .map_or("", |&(_, letters)| letters)
}

/// Encode a word as its keypad digit sequence. Unmapped characters are dropped.
pub fn encode(word: &str) -> String {
    word.chars().filter_map(digit_for).collect()
}

/// Distinct lowercase letters reachable from `key`, in table order.
///
/// Punctuation and space keys have no letter options.
pub fn key_options(layout: Layout, key: &KeyId) -> Vec<char> {
    if layout.role(key) != Some(KeyRole::Letters) {
        return Vec::new();
    }
    let mut options = Vec::new();
    for c in layout.chars_for(key).chars().filter(|c| c.is_alphabetic()) {
        let lower = to_lower(c);
        if !options.contains(&lower) {
            options.push(lower);
        }
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unicode::ALPHABET;

    #[test]
    fn test_encode_words() {
        assert_eq!(encode("merhaba"), "6374222");
        assert_eq!(encode("ev"), "38");
        assert_eq!(encode("evet"), "3838");
        assert_eq!(encode("şğüçöı"), "748264");
    }

    #[test]
    fn test_encode_folds_case() {
        assert_eq!(encode("Merhaba"), encode("merhaba"));
        assert_eq!(encode("IĞDIR"), encode("ığdır"));
    }

    #[test]
    fn test_encode_drops_unmapped() {
        assert_eq!(encode("ev!"), "38");
        assert_eq!(encode("a b"), "22");
        assert_eq!(encode("123"), "");
        assert_eq!(encode(""), "");
    }

    #[test]
    fn test_every_letter_has_a_digit() {
        for c in ALPHABET.chars() {
            assert!(digit_for(c).is_some(), "{c} has no digit");
        }
    }

    #[test]
    fn test_groups_match_numeric_layout() {
        for &(digit, letters) in DIGIT_GROUPS {
            let key = KeyId::new(digit.to_string());
            let options: String = key_options(Layout::Numeric, &key).into_iter().collect();
            assert_eq!(options, letters);
            assert_eq!(letters_for_digit(digit), letters);
        }
        assert_eq!(letters_for_digit('0'), "");
        assert_eq!(letters_for_digit('1'), "");
    }

    #[test]
    fn test_key_options() {
        assert_eq!(key_options(Layout::Compact, &"ui".into()), vec!['u', 'ı', 'i']);
        assert_eq!(key_options(Layout::Standard, &"i".into()), vec!['i', 'ı']);
        assert_eq!(key_options(Layout::Compact, &".".into()), Vec::<char>::new());
        assert_eq!(key_options(Layout::Numeric, &"0".into()), Vec::<char>::new());
        assert_eq!(key_options(Layout::Compact, &"zz".into()), Vec::<char>::new());
    }
}

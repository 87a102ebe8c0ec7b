//! Character-level helpers for Turkish text.

/// Lowercase letters the engine can store and encode, in alphabetical order.
pub const ALPHABET: &str = "abcçdefgğhıijklmnoöpqrsştuüvwxyz";

/// Check membership in [`ALPHABET`] (lowercase only).
pub fn is_alphabet_letter(c: char) -> bool {
    ALPHABET.contains(c)
}

/// Turkish-aware lowercase of a single character.
///
/// Dotted and dotless i are distinct letters: `I → ı` and `İ → i`. Characters
/// whose lowercase form is not a single scalar are returned unchanged.
pub fn to_lower(c: char) -> char {
    match c {
        'I' => 'ı',
        'İ' => 'i',
        _ => {
            let mut lower = c.to_lowercase();
            match (lower.next(), lower.next()) {
                (Some(l), None) => l,
                _ => c,
            }
        }
    }
}

/// Turkish-aware uppercase of a single character (`i → İ`, `ı → I`).
pub fn to_upper(c: char) -> char {
    match c {
        'i' => 'İ',
        'ı' => 'I',
        _ => {
            let mut upper = c.to_uppercase();
            match (upper.next(), upper.next()) {
                (Some(u), None) => u,
                _ => c,
            }
        }
    }
}

/// Turkish-aware lowercase of a whole string.
pub fn lowercase(s: &str) -> String {
    s.chars().map(to_lower).collect()
}

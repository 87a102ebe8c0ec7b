//! Key press → character resolution.

use crate::layout::{KeyId, Layout};

/// Characters reachable from `key` with the given shift state, in tap order.
///
/// Shift selects uppercase letters plus non-letters; no shift selects
/// lowercase letters plus non-letters. When that subset is empty the full
/// sequence is used instead.
pub fn cycle(layout: Layout, key: &KeyId, shift: bool) -> Vec<char> {
    let chars = layout.chars_for(key);
    let subset: Vec<char> = chars
        .chars()
        .filter(|c| {
            if !c.is_alphabetic() {
                true
            } else if shift {
                c.is_uppercase()
            } else {
                c.is_lowercase()
            }
        })
        .collect();
    if subset.is_empty() {
        chars.chars().collect()
    } else {
        subset
    }
}

/// Resolve the `press_count`-th tap of `key` to a character.
///
/// Returns `None` for keys not on the layout. A press count of 0 is
/// treated as 1.
pub fn resolve(layout: Layout, key: &KeyId, press_count: u32, shift: bool) -> Option<char> {
    let cycle = cycle(layout, key, shift);
    if cycle.is_empty() {
        return None;
    }
    let index = (press_count.max(1) as usize - 1) % cycle.len();
    Some(cycle[index])
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_numeric_cycle() {
        let k = KeyId::from("2");
        assert_eq!(resolve(Layout::Numeric, &k, 1, false), Some('a'));
        assert_eq!(resolve(Layout::Numeric, &k, 4, false), Some('ç'));
        assert_eq!(resolve(Layout::Numeric, &k, 5, false), Some('2'));
        assert_eq!(resolve(Layout::Numeric, &k, 6, false), Some('a'));
        assert_eq!(resolve(Layout::Numeric, &k, 1, true), Some('A'));
        assert_eq!(resolve(Layout::Numeric, &k, 4, true), Some('Ç'));
    }

    #[test]
    fn test_compact_shift() {
        let k = KeyId::from("gh");
        assert_eq!(resolve(Layout::Compact, &k, 2, false), Some('ğ'));
        assert_eq!(resolve(Layout::Compact, &k, 2, true), Some('Ğ'));
        assert_eq!(resolve(Layout::Compact, &k, 4, false), Some('g'));
    }

    #[test]
    fn test_standard_dotted_i() {
        let k = KeyId::from("i");
        assert_eq!(resolve(Layout::Standard, &k, 1, false), Some('i'));
        assert_eq!(resolve(Layout::Standard, &k, 2, false), Some('ı'));
        assert_eq!(resolve(Layout::Standard, &k, 1, true), Some('İ'));
        assert_eq!(resolve(Layout::Standard, &k, 2, true), Some('I'));
    }

    #[test]
    fn test_zero_press_count_is_first_tap() {
        let k = KeyId::from("er");
        assert_eq!(resolve(Layout::Compact, &k, 0, false), Some('e'));
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(resolve(Layout::Numeric, &"x".into(), 1, false), None);
        assert_eq!(resolve(Layout::Standard, &"7".into(), 3, true), None);
    }

    #[test]
    fn test_punctuation_ignores_shift() {
        let k = KeyId::from("1");
        assert_eq!(cycle(Layout::Numeric, &k, false), cycle(Layout::Numeric, &k, true));
        assert_eq!(resolve(Layout::Numeric, &k, 2, true), Some(','));
    }

    #[test]
    fn test_space_key() {
        assert_eq!(resolve(Layout::Numeric, &"0".into(), 1, false), Some(' '));
        assert_eq!(resolve(Layout::Numeric, &"0".into(), 2, false), Some('0'));
    }

    fn arb_key() -> impl Strategy<Value = (Layout, KeyId)> {
        prop::sample::select(Layout::ALL.to_vec()).prop_flat_map(|layout| {
            let keys: Vec<KeyId> = layout.keys().collect();
            prop::sample::select(keys).prop_map(move |k| (layout, k))
        })
    }

    proptest! {
        #[test]
        fn resolve_is_periodic(
            (layout, key) in arb_key(),
            n in 1u32..64,
            shift in any::<bool>(),
        ) {
            let period = cycle(layout, &key, shift).len() as u32;
            prop_assert!(period > 0);
            prop_assert_eq!(
                resolve(layout, &key, n, shift),
                resolve(layout, &key, n + period, shift)
            );
        }

        #[test]
        fn resolve_stays_on_key((layout, key) in arb_key(), n in 1u32..64) {
            let c = resolve(layout, &key, n, false).unwrap();
            prop_assert!(layout.chars_for(&key).contains(c));
        }
    }
}

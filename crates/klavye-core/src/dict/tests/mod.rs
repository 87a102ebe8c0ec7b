mod store;

use super::*;

/// Small dictionary with predictable insertion order.
fn make_dict(words: &[&str]) -> Dictionary {
    let dict = Dictionary::new();
    for w in words {
        dict.insert(w, Origin::Builtin);
    }
    dict
}

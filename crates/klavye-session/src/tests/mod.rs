
use std::sync::Arc;

use klavye_core::dict::{Dictionary, Origin};
use klavye_core::layout::Layout;

use super::{InputSession, KeyEvent, KeyResponse};

pub(super) fn make_test_dict() -> Arc<Dictionary> {
    let dict = Dictionary::new();
    for (word, frequency) in [
        ("merhaba", 5),
        ("gel", 3),
        ("geldi", 2),
        ("gelmek", 1),
        ("ev", 2),
        ("evet", 1),
        ("şu", 1),
        ("su", 1),
        ("ağ", 1),
        ("ah", 1),
        ("kalem", 1),
    ] {
        dict.insert(word, Origin::Builtin);
        for _ in 1..frequency {
            dict.bump_frequency(word);
        }
    }
    Arc::new(dict)
}

pub(super) fn new_session() -> (Arc<Dictionary>, InputSession) {
    let dict = make_test_dict();
    let session = InputSession::new(Arc::clone(&dict));
    (dict, session)
}

/// Press `keys` in order, `step_ms` apart starting at `start_ms`.
pub(super) fn type_keys(
    session: &mut InputSession,
    layout: Layout,
    keys: &[&str],
    start_ms: u64,
    step_ms: u64,
) -> Vec<KeyResponse> {
    keys.iter()
        .enumerate()
        .map(|(i, key)| {
            session.handle_key(KeyEvent::press(layout, key, start_ms + i as u64 * step_ms))
        })
        .collect()
}

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use klavye_core::dict::Dictionary;
use klavye_session::{InputSession, KeyEvent};

use super::types::convert_to_events;
use super::KlavyeKeyResponse;

/// One input field's session, safe to call from any thread.
pub struct KlavyeSession {
    session: Mutex<InputSession>,
}

impl KlavyeSession {
    pub(super) fn new(dict: Arc<Dictionary>) -> Arc<Self> {
        Arc::new(Self {
            session: Mutex::new(InputSession::new(dict)),
        })
    }

    fn lock(&self) -> MutexGuard<'_, InputSession> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn handle_key(&self, event: KeyEvent) -> KlavyeKeyResponse {
        let resp = self.lock().handle_key(event);
        convert_to_events(resp)
    }

    pub fn commit(&self) -> KlavyeKeyResponse {
        self.handle_key(KeyEvent::Commit)
    }

    /// Close the open multi-tap position if its window has passed.
    pub fn expire(&self, now_ms: u64) -> bool {
        self.lock().expire(now_ms)
    }

    pub fn is_composing(&self) -> bool {
        self.lock().is_composing()
    }

    pub fn composed_string(&self) -> String {
        self.lock().composed_string()
    }

    pub fn candidates(&self) -> Vec<String> {
        self.lock().candidates().to_vec()
    }

    pub fn set_multitap_window_ms(&self, window_ms: u64) {
        self.lock().set_multitap_window_ms(window_ms);
    }

    pub fn set_auto_learn(&self, enabled: bool) {
        self.lock().set_auto_learn(enabled);
    }
}

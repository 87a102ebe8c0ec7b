//! Stateful multi-tap session managing composition, candidate selection, and key handling.
//!
//! `InputSession` owns the editing state of one input field and processes each
//! key event, returning responses the host applies to its text field.

pub(crate) mod types;

mod candidate_gen;
mod commit;
mod composing;
mod key_handlers;
mod response;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use klavye_core::candidates::CandidateLimits;
use klavye_core::dict::Dictionary;
use klavye_core::settings::settings;

pub use types::{CandidateAction, KeyEvent, KeyResponse, MarkedText, SideEffects};

use types::{Composition, SessionState};

pub(crate) struct SessionConfig {
    pub(crate) multitap_window_ms: u64,
    pub(crate) max_word_length: usize,
    pub(crate) auto_learn: bool,
    pub(crate) limits: CandidateLimits,
}

impl SessionConfig {
    fn from_settings() -> Self {
        let s = settings();
        Self {
            multitap_window_ms: s.session.multitap_window_ms,
            max_word_length: s.session.max_word_length,
            auto_learn: s.learning.auto_learn,
            limits: CandidateLimits::from_settings(&s.candidates),
        }
    }
}

/// Stateful input session encapsulating all key processing logic.
pub struct InputSession {
    dict: Arc<Dictionary>,
    state: SessionState,
    /// Session-level shift toggled by `KeyEvent::Shift`.
    shift: bool,
    config: SessionConfig,
}

impl InputSession {
    pub fn new(dict: Arc<Dictionary>) -> Self {
        Self {
            dict,
            state: SessionState::Idle,
            shift: false,
            config: SessionConfig::from_settings(),
        }
    }

    pub fn set_multitap_window_ms(&mut self, window_ms: u64) {
        self.config.multitap_window_ms = window_ms;
    }

    pub fn set_auto_learn(&mut self, enabled: bool) {
        self.config.auto_learn = enabled;
    }

    pub fn set_candidate_limits(&mut self, limits: CandidateLimits) {
        self.config.limits = limits;
    }

    pub fn is_composing(&self) -> bool {
        matches!(self.state, SessionState::Composing(_))
    }

    pub fn is_shifted(&self) -> bool {
        self.shift
    }

    /// Mutable reference to the composing state. Panics if Idle.
    fn comp(&mut self) -> &mut Composition {
        match &mut self.state {
            SessionState::Composing(ref mut c) => c,
            SessionState::Idle => unreachable!("comp() called in Idle state"),
        }
    }

    pub fn composed_string(&self) -> String {
        match &self.state {
            SessionState::Composing(c) => c.display(),
            SessionState::Idle => String::new(),
        }
    }

    /// Current candidate list, best first.
    pub fn candidates(&self) -> &[String] {
        match &self.state {
            SessionState::Composing(c) => &c.candidates.surfaces,
            SessionState::Idle => &[],
        }
    }

    pub fn highlighted(&self) -> Option<usize> {
        match &self.state {
            SessionState::Composing(c) => c.candidates.highlighted,
            SessionState::Idle => None,
        }
    }
}

use klavye_core::layout::{KeyId, KeyRole, Layout};
use klavye_core::resolver::resolve;

use super::response::{build_marked_text, build_marked_text_and_candidates};
use super::types::{Composition, KeyResponse, SessionState, Submode, TapState};
use super::InputSession;

/// Whether a press at `at_ms` continues a tap last pressed at `last_ms`.
fn within_window(last_ms: u64, at_ms: u64, window_ms: u64) -> bool {
    at_ms.saturating_sub(last_ms) < window_ms
}

impl InputSession {
    pub(super) fn handle_press(
        &mut self,
        layout: Layout,
        key: KeyId,
        shift: bool,
        at_ms: u64,
    ) -> KeyResponse {
        let Some(role) = layout.role(&key) else {
            return KeyResponse::not_consumed();
        };

        // A composition typed on another layout is committed first.
        let mut resp = KeyResponse::consumed();
        if matches!(&self.state, SessionState::Composing(c) if c.layout != layout) {
            resp = self.commit_current_state();
        }

        let next = match role {
            KeyRole::Letters => self.press_letter(layout, key, shift, at_ms),
            KeyRole::Punctuation => self.press_punctuation(layout, key, at_ms),
            KeyRole::Space => self.commit_with_space(),
        };
        resp.then(next)
    }

    /// Whether a press of `key` continues the open tap of `submode`.
    fn continues_tap(&self, submode: Submode, key: &KeyId, at_ms: u64) -> bool {
        let window = self.config.multitap_window_ms;
        match &self.state {
            SessionState::Composing(c) if c.submode == submode => c
                .tap
                .as_ref()
                .is_some_and(|t| t.key == *key && within_window(t.at_ms, at_ms, window)),
            _ => false,
        }
    }

    /// Advance the open tap and re-resolve its character.
    fn repeat_tap(&mut self, layout: Layout, at_ms: u64) {
        let c = self.comp();
        let ch = c.tap.as_mut().and_then(|tap| {
            tap.presses += 1;
            tap.at_ms = at_ms;
            resolve(layout, &tap.key, tap.presses, tap.shift)
        });
        if let Some(ch) = ch {
            c.replace_last(ch);
        }
    }

    fn press_letter(&mut self, layout: Layout, key: KeyId, shift: bool, at_ms: u64) -> KeyResponse {
        if layout.cycles_letters() && self.continues_tap(Submode::Word, &key, at_ms) {
            self.repeat_tap(layout, at_ms);
            self.update_candidates();
            return build_marked_text_and_candidates(self.comp());
        }

        let shift = shift || self.shift;
        let Some(ch) = resolve(layout, &key, 1, shift) else {
            return KeyResponse::not_consumed();
        };

        // Pending punctuation and full words are committed before a new letter.
        let mut resp = KeyResponse::consumed();
        let max_len = self.config.max_word_length;
        if matches!(&self.state, SessionState::Composing(c)
            if c.submode == Submode::Symbol || c.len() >= max_len)
        {
            resp = self.commit_current_state();
        }
        if !self.is_composing() {
            self.state = SessionState::Composing(Composition::new(layout, Submode::Word));
        }
        if self.shift && layout.shift_is_one_shot() {
            self.shift = false;
        }

        let c = self.comp();
        c.tap = None;
        c.push(key.clone(), ch);
        if layout.cycles_letters() {
            c.tap = Some(TapState {
                key,
                presses: 1,
                at_ms,
                shift,
            });
        }

        self.update_candidates();
        resp.then(build_marked_text_and_candidates(self.comp()))
    }

    fn press_punctuation(&mut self, layout: Layout, key: KeyId, at_ms: u64) -> KeyResponse {
        if self.continues_tap(Submode::Symbol, &key, at_ms) {
            self.repeat_tap(layout, at_ms);
            return build_marked_text(self.comp());
        }

        let Some(ch) = resolve(layout, &key, 1, false) else {
            return KeyResponse::not_consumed();
        };
        let resp = if self.is_composing() {
            self.commit_current_state()
        } else {
            KeyResponse::consumed()
        };

        let mut c = Composition::new(layout, Submode::Symbol);
        c.push(key.clone(), ch);
        c.tap = Some(TapState {
            key,
            presses: 1,
            at_ms,
            shift: false,
        });
        self.state = SessionState::Composing(c);
        resp.then(build_marked_text(self.comp()))
    }

    /// Commit the composition (if any) followed by a space.
    pub(super) fn commit_with_space(&mut self) -> KeyResponse {
        let mut resp = if self.is_composing() {
            self.commit_current_state()
        } else {
            KeyResponse::consumed()
        };
        resp.append_commit(" ");
        resp
    }

    /// Close the open tap if its window has elapsed by `now_ms`.
    ///
    /// The session has no timer of its own; hosts that want a tap to end
    /// without another key press call this. Returns whether a tap was closed.
    pub fn expire(&mut self, now_ms: u64) -> bool {
        let window = self.config.multitap_window_ms;
        let SessionState::Composing(ref mut c) = self.state else {
            return false;
        };
        let expired = c
            .tap
            .as_ref()
            .is_some_and(|t| !within_window(t.at_ms, now_ms, window));
        if expired {
            c.tap = None;
        }
        expired
    }
}

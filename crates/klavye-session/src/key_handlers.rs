use tracing::debug_span;

use super::response::{build_cleared, build_marked_text_and_candidates};
use super::types::{cyclic_index, KeyEvent, KeyResponse};
use super::InputSession;

impl InputSession {
    /// Process a key event. Returns a KeyResponse describing what the host should do.
    pub fn handle_key(&mut self, event: KeyEvent) -> KeyResponse {
        let _span = debug_span!("handle_key", ?event).entered();

        match event {
            KeyEvent::Press {
                layout,
                key,
                shift,
                at_ms,
            } => self.handle_press(layout, key, shift, at_ms),

            KeyEvent::Shift => {
                self.shift = !self.shift;
                KeyResponse::consumed()
            }

            KeyEvent::Space => self.commit_with_space(),

            KeyEvent::Backspace if self.is_composing() => self.handle_backspace(),

            KeyEvent::Enter if self.is_composing() => self.commit_current_state(),

            KeyEvent::Commit if self.is_composing() => self.commit_current_state(),

            KeyEvent::SelectCandidate(index) if self.is_composing() => {
                self.accept_candidate(index)
            }

            KeyEvent::CycleCandidate if self.is_composing() => self.cycle_candidate(),

            KeyEvent::Cancel if self.is_composing() => {
                self.reset_state();
                build_cleared()
            }

            KeyEvent::Blur => {
                self.shift = false;
                if self.is_composing() {
                    self.commit_displayed()
                } else {
                    KeyResponse::not_consumed()
                }
            }

            // Idle: let the host handle the key.
            KeyEvent::Backspace
            | KeyEvent::Enter
            | KeyEvent::Commit
            | KeyEvent::SelectCandidate(_)
            | KeyEvent::CycleCandidate
            | KeyEvent::Cancel => KeyResponse::not_consumed(),
        }
    }

    fn handle_backspace(&mut self) -> KeyResponse {
        let c = self.comp();
        c.pop();
        if c.is_empty() {
            self.reset_state();
            return build_cleared();
        }
        self.update_candidates();
        build_marked_text_and_candidates(self.comp())
    }

    /// Move the highlight to the next candidate. With nothing highlighted the
    /// first candidate is selected.
    fn cycle_candidate(&mut self) -> KeyResponse {
        let c = self.comp();
        if c.candidates.is_empty() {
            return KeyResponse::consumed();
        }
        let count = c.candidates.surfaces.len();
        c.candidates.highlighted = Some(match c.candidates.highlighted {
            None => 0,
            Some(i) => cyclic_index(i, 1, count),
        });
        c.tap = None;
        build_marked_text_and_candidates(self.comp())
    }
}

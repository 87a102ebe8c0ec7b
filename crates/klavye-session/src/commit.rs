use tracing::debug;

use klavye_core::dict::{normalize, Origin};

use super::types::{apply_case, CandidateAction, KeyResponse, SessionState, SideEffects, Submode};
use super::InputSession;

impl InputSession {
    /// Commit the composition: the highlighted candidate if any, otherwise
    /// the literal text. A pending punctuation mark is committed as-is.
    pub(super) fn commit_current_state(&mut self) -> KeyResponse {
        let SessionState::Composing(ref c) = self.state else {
            return KeyResponse::consumed();
        };
        match (c.submode, c.candidates.highlighted) {
            (Submode::Symbol, _) => self.commit_displayed(),
            (Submode::Word, Some(index)) => self.accept_candidate(index),
            (Submode::Word, None) => self.commit_literal(),
        }
    }

    /// Commit the candidate at `index` and record the choice.
    ///
    /// Out-of-range indices leave the composition untouched.
    pub(super) fn accept_candidate(&mut self, index: usize) -> KeyResponse {
        let SessionState::Composing(ref c) = self.state else {
            return KeyResponse::consumed();
        };
        let Some(word) = c.candidates.surfaces.get(index).cloned() else {
            return KeyResponse::consumed();
        };
        let text = apply_case(&word, c.is_capitalized());

        self.dict.bump_frequency(&word);
        if self.config.auto_learn {
            self.dict.insert(&word, Origin::Learned);
        }
        debug!(word = %word, index, "candidate accepted");

        let mut resp = KeyResponse::consumed();
        resp.commit = Some(text);
        resp.candidates = CandidateAction::Hide;
        resp.side_effects = SideEffects {
            committed_word: Some(word),
            save_user_data: true,
        };
        self.reset_state();
        resp
    }

    /// Commit what is displayed without a candidate, learning it as a word
    /// when auto-learning is on.
    fn commit_literal(&mut self) -> KeyResponse {
        let SessionState::Composing(ref c) = self.state else {
            return KeyResponse::consumed();
        };
        let text = c.display();
        let word = normalize(&text);

        let mut resp = KeyResponse::consumed();
        if let Some(ref w) = word {
            if self.config.auto_learn {
                self.dict.insert(w, Origin::Learned);
                self.dict.bump_frequency(w);
                resp.side_effects.save_user_data = true;
                debug!(word = %w, "literal learned");
            }
        }
        resp.commit = Some(text);
        resp.candidates = CandidateAction::Hide;
        resp.side_effects.committed_word = word;
        self.reset_state();
        resp
    }

    /// Commit the displayed text without touching the dictionary.
    pub(super) fn commit_displayed(&mut self) -> KeyResponse {
        let SessionState::Composing(ref c) = self.state else {
            return KeyResponse::consumed();
        };
        let mut resp = KeyResponse::consumed();
        let text = c.display();
        if !text.is_empty() {
            resp.commit = Some(text);
        }
        resp.candidates = CandidateAction::Hide;
        self.reset_state();
        resp
    }

    pub(super) fn reset_state(&mut self) {
        self.state = SessionState::Idle;
    }
}

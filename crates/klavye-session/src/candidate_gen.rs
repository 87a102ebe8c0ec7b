use klavye_core::candidates::{generate_candidates, CandidateQuery, CandidateResponse};
use klavye_core::layout::Layout;

use super::types::{SessionState, Submode};
use super::InputSession;

impl InputSession {
    /// Regenerate candidates for the composed word and reset the highlight.
    ///
    /// The numeric keypad highlights its top candidate; other layouts start
    /// with no highlight so the literal text stays in place.
    pub(super) fn update_candidates(&mut self) {
        let response = match &self.state {
            SessionState::Composing(c) if c.submode == Submode::Word && !c.is_empty() => {
                let sequence = c.sequence();
                let query = CandidateQuery {
                    layout: c.layout,
                    keys: &c.keys,
                    sequence: &sequence,
                    literal: &c.literal,
                };
                generate_candidates(&self.dict, &query, &self.config.limits)
            }
            _ => CandidateResponse::default(),
        };

        let SessionState::Composing(ref mut c) = self.state else {
            return;
        };
        c.candidates.highlighted = match c.layout {
            Layout::Numeric if !response.surfaces.is_empty() => Some(0),
            _ => None,
        };
        c.candidates.surfaces = response.surfaces;
    }
}

use super::types::{CandidateAction, Composition, KeyResponse, MarkedText, Submode};

/// Marked text only; the candidate panel is hidden.
pub(super) fn build_marked_text(c: &Composition) -> KeyResponse {
    let mut resp = KeyResponse::consumed();
    resp.marked = Some(MarkedText { text: c.display() });
    resp.candidates = CandidateAction::Hide;
    resp
}

/// Marked text plus the current candidate list (hidden when empty).
pub(super) fn build_marked_text_and_candidates(c: &Composition) -> KeyResponse {
    let mut resp = build_marked_text(c);
    if c.submode == Submode::Word && !c.candidates.is_empty() {
        resp.candidates = CandidateAction::Show {
            surfaces: c.candidates.surfaces.clone(),
            highlighted: c.candidates.highlighted,
        };
    }
    resp
}

/// Empty marked text and a hidden panel, for a composition that was dropped.
pub(super) fn build_cleared() -> KeyResponse {
    let mut resp = KeyResponse::consumed();
    resp.marked = Some(MarkedText {
        text: String::new(),
    });
    resp.candidates = CandidateAction::Hide;
    resp
}

use tracing::debug_span;

use crate::dict::Dictionary;

use super::CandidateResponse;

/// Words indexed under `sequence`, best first, at most `max_results`.
pub fn generate(dict: &Dictionary, sequence: &str, max_results: usize) -> CandidateResponse {
    let _span = debug_span!("numeric_candidates", sequence, max_results).entered();
    if sequence.is_empty() {
        return CandidateResponse::default();
    }
    let mut surfaces = dict.exact_lookup(sequence);
    surfaces.truncate(max_results);
    CandidateResponse {
        surfaces,
        expansions: 0,
        truncated: false,
    }
}

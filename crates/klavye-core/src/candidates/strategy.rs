use crate::dict::Dictionary;
use crate::layout::Layout;

use super::{CandidateLimits, CandidateQuery, CandidateResponse};

/// Strategy for candidate generation.
///
/// `Numeric` looks up the digit sequence directly. `Expansion` enumerates the
/// letter combinations of the pressed keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateStrategy {
    Numeric,
    Expansion,
}

impl CandidateStrategy {
    pub fn for_layout(layout: Layout) -> Self {
        match layout {
            Layout::Numeric => Self::Numeric,
            Layout::Compact | Layout::Standard => Self::Expansion,
        }
    }

    /// Generate candidates using the selected strategy.
    pub fn generate(
        self,
        dict: &Dictionary,
        query: &CandidateQuery<'_>,
        limits: &CandidateLimits,
    ) -> CandidateResponse {
        match self {
            Self::Numeric => super::numeric::generate(dict, query.sequence, limits.max_results),
            Self::Expansion => {
                super::expansion::generate(dict, query.layout, query.keys, query.literal, limits)
            }
        }
    }
}

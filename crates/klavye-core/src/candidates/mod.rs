//! Candidate generation for the word being composed.
//!
//! The numeric keypad looks words up by their digit sequence. Layouts with
//! several letters per key expand the pressed keys into every letter
//! combination and intersect the result with the dictionary.

use crate::dict::Dictionary;
use crate::layout::{KeyId, Layout};
use crate::settings::{settings, CandidateSettings};

pub mod expansion;
pub mod numeric;
pub mod strategy;


pub use strategy::CandidateStrategy;

/// Caps applied during generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateLimits {
    /// Length of the returned list.
    pub max_results: usize,
    /// Ceiling on generated letter combinations.
    pub max_expansions: usize,
    /// Dictionary words examined per generated string when looking for
    /// longer words it is a prefix of.
    pub prefix_scan_limit: usize,
}

impl CandidateLimits {
    pub fn from_settings(s: &CandidateSettings) -> Self {
        Self {
            max_results: s.max_results,
            max_expansions: s.max_expansions,
            prefix_scan_limit: s.prefix_scan_limit,
        }
    }
}

impl Default for CandidateLimits {
    fn default() -> Self {
        Self::from_settings(&settings().candidates)
    }
}

/// The composed word as seen by the generator.
#[derive(Debug, Clone, Copy)]
pub struct CandidateQuery<'a> {
    pub layout: Layout,
    /// Pressed letter keys, one per position.
    pub keys: &'a [KeyId],
    /// Keypad encoding of the presses (numeric layout).
    pub sequence: &'a str,
    /// Literal text resolved so far.
    pub literal: &'a str,
}

/// Result of candidate generation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateResponse {
    /// Ranked, deduplicated words.
    pub surfaces: Vec<String>,
    /// Letter combinations generated (0 for the numeric keypad).
    pub expansions: usize,
    /// Whether expansion hit `max_expansions`.
    pub truncated: bool,
}

/// Generate ranked candidates for `query` with the layout's strategy.
pub fn generate_candidates(
    dict: &Dictionary,
    query: &CandidateQuery<'_>,
    limits: &CandidateLimits,
) -> CandidateResponse {
    CandidateStrategy::for_layout(query.layout).generate(dict, query, limits)
}

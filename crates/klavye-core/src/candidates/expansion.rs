use std::collections::HashMap;

use tracing::{debug, debug_span};

use crate::dict::{Dictionary, MIN_WORD_LENGTH};
use crate::encoder::key_options;
use crate::layout::{KeyId, Layout};

use super::{CandidateLimits, CandidateResponse};

/// Exact dictionary match of a generated string.
const TIER_EXACT: u8 = 0;
/// Longer word extending a generated string or the literal text.
const TIER_EXTENSION: u8 = 1;

/// Cartesian product of `option_sets`, built breadth-first.
///
/// Stops growing once `max` strings exist; the boolean reports whether
/// anything was cut. Empty option sets are skipped.
pub fn expand(option_sets: &[Vec<char>], max: usize) -> (Vec<String>, bool) {
    let mut current = vec![String::new()];
    let mut truncated = false;
    for options in option_sets.iter().filter(|o| !o.is_empty()) {
        let mut next = Vec::with_capacity((current.len() * options.len()).min(max));
        'outer: for prefix in &current {
            for &c in options {
                if next.len() >= max {
                    truncated = true;
                    break 'outer;
                }
                let mut s = String::with_capacity(prefix.len() + c.len_utf8());
                s.push_str(prefix);
                s.push(c);
                next.push(s);
            }
        }
        current = next;
    }
    if current.len() == 1 && current[0].is_empty() {
        current.clear();
    }
    (current, truncated)
}

/// Candidates for multi-letter keys.
///
/// Exact matches of generated strings rank first. Words a generated string
/// is a proper prefix of, and words extending the literal text, rank second.
/// Within a tier, frequency then insertion order decide.
pub fn generate(
    dict: &Dictionary,
    layout: Layout,
    keys: &[KeyId],
    literal: &str,
    limits: &CandidateLimits,
) -> CandidateResponse {
    let _span = debug_span!("expansion_candidates", %layout, keys = keys.len(), literal).entered();
    if keys.is_empty() && literal.is_empty() {
        return CandidateResponse::default();
    }

    let option_sets: Vec<Vec<char>> = keys.iter().map(|k| key_options(layout, k)).collect();
    let (generated, truncated) = expand(&option_sets, limits.max_expansions);
    if truncated {
        debug!(
            generated = generated.len(),
            max = limits.max_expansions,
            "expansion truncated"
        );
    }

    let view = dict.view();
    let mut tiers: HashMap<String, u8> = HashMap::new();
    let mut offer = |word: String, tier: u8| {
        tiers
            .entry(word)
            .and_modify(|t| *t = (*t).min(tier))
            .or_insert(tier);
    };

    for g in &generated {
        if view.contains(g) {
            offer(g.clone(), TIER_EXACT);
        }
        if g.chars().count() < MIN_WORD_LENGTH {
            continue;
        }
        for w in view.words_with_prefix(g, limits.prefix_scan_limit) {
            if w != *g {
                offer(w, TIER_EXTENSION);
            }
        }
    }
    for w in view.prefix_lookup(literal) {
        offer(w, TIER_EXTENSION);
    }

    let mut ranked: Vec<(u8, String)> = tiers.into_iter().map(|(w, t)| (t, w)).collect();
    ranked.sort_by_cached_key(|(t, w)| (*t, view.rank_key(w)));
    ranked.truncate(limits.max_results);

    CandidateResponse {
        surfaces: ranked.into_iter().map(|(_, w)| w).collect(),
        expansions: generated.len(),
        truncated,
    }
}

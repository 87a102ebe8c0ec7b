//! Word store: built-in vocabulary, learned overlay and usage frequencies.
//!
//! Both stores index words by their keypad encoding (exact lookup) and keep a
//! sorted word set for literal prefix search. One frequency table is shared by
//! both stores. All state sits behind a single `RwLock` so the dictionary can
//! be shared as `Arc<Dictionary>` between sessions and import routines.

mod seed;
mod snapshot;
#[cfg(test)]
mod tests;

pub use seed::SEED_WORDS;
pub use snapshot::UserData;

use std::cmp::Reverse;
use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::io;
use std::ops::Bound;
use std::path::Path;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::Serialize;
use tracing::{debug, warn};

use crate::encoder::encode;
use crate::unicode::{is_alphabet_letter, lowercase};

/// Shortest word the dictionary accepts.
pub const MIN_WORD_LENGTH: usize = 2;

#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid header (too short)")]
    InvalidHeader,

    #[error("invalid magic bytes (expected KLUW)")]
    InvalidMagic,

    #[error("unsupported version: {0}")]
    UnsupportedVersion(u8),

    #[error("serialization error: {0}")]
    Serialize(bincode::Error),

    #[error("deserialization error: {0}")]
    Deserialize(bincode::Error),
}

/// Which store a word goes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Seed list, bulk import and explicit additions. Never cleared.
    Builtin,
    /// Words learned while typing. Cleared by [`Dictionary::reset`].
    Learned,
}

/// Outcome of a bulk import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    pub inserted: usize,
    pub duplicates: usize,
    pub rejected: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DictStats {
    pub builtin_words: usize,
    pub learned_words: usize,
    pub sequences: usize,
    pub tracked_frequencies: usize,
}

/// Normalize a word for storage: Turkish lowercasing, non-letters stripped.
///
/// Returns `None` when the result is shorter than [`MIN_WORD_LENGTH`] or
/// contains a letter outside the alphabet.
pub fn normalize(word: &str) -> Option<String> {
    let lower = lowercase(word);
    let mut out = String::with_capacity(lower.len());
    for c in lower.chars().filter(|c| c.is_alphabetic()) {
        if !is_alphabet_letter(c) {
            return None;
        }
        out.push(c);
    }
    (out.chars().count() >= MIN_WORD_LENGTH).then_some(out)
}

#[derive(Default)]
struct Store {
    buckets: HashMap<String, Vec<String>>,
    words: BTreeSet<String>,
}

impl Store {
    fn insert(&mut self, sequence: String, word: &str) -> bool {
        if !self.words.insert(word.to_string()) {
            return false;
        }
        self.buckets
            .entry(sequence)
            .or_default()
            .push(word.to_string());
        true
    }

    fn bucket(&self, sequence: &str) -> &[String] {
        self.buckets.get(sequence).map_or(&[], Vec::as_slice)
    }

    fn with_prefix<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a String> + 'a {
        self.words
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .take_while(move |w| w.starts_with(prefix))
    }
}

#[derive(Default)]
struct Inner {
    builtin: Store,
    learned: Store,
    frequencies: HashMap<String, u32>,
    /// Frequencies restored by `reset`.
    baseline: HashMap<String, u32>,
    /// First-insertion rank of every word ever stored, used to break ties.
    order: HashMap<String, u64>,
    next_order: u64,
}

impl Inner {
    fn insert(&mut self, word: &str, origin: Origin) -> bool {
        let sequence = encode(word);
        let added = match origin {
            Origin::Builtin => self.builtin.insert(sequence, word),
            Origin::Learned => self.learned.insert(sequence, word),
        };
        if !self.order.contains_key(word) {
            self.order.insert(word.to_string(), self.next_order);
            self.next_order += 1;
        }
        self.frequencies.entry(word.to_string()).or_insert(1);
        if origin == Origin::Builtin {
            self.baseline.entry(word.to_string()).or_insert(1);
        }
        added
    }

    fn contains(&self, word: &str) -> bool {
        self.builtin.words.contains(word) || self.learned.words.contains(word)
    }
}

/// Read access to a consistent dictionary state.
///
/// Holds the read lock; candidate generation takes one view for a whole
/// expansion instead of locking per probe.
pub struct DictionaryView<'a> {
    inner: RwLockReadGuard<'a, Inner>,
}

impl DictionaryView<'_> {
    pub fn contains(&self, word: &str) -> bool {
        self.inner.contains(word)
    }

    pub fn frequency(&self, word: &str) -> u32 {
        self.inner.frequencies.get(word).copied().unwrap_or(0)
    }

    /// Sort key: frequency descending, then first-insertion order.
    pub fn rank_key(&self, word: &str) -> (Reverse<u32>, u64) {
        (
            Reverse(self.frequency(word)),
            self.inner.order.get(word).copied().unwrap_or(u64::MAX),
        )
    }

    /// Sort `words` by [`Self::rank_key`].
    pub fn rank(&self, words: &mut [String]) {
        words.sort_by_cached_key(|w| self.rank_key(w));
    }

    /// Words of both stores indexed under `sequence`, ranked.
    pub fn exact_lookup(&self, sequence: &str) -> Vec<String> {
        let mut words: Vec<String> = self.inner.builtin.bucket(sequence).to_vec();
        for w in self.inner.learned.bucket(sequence) {
            if !words.contains(w) {
                words.push(w.clone());
            }
        }
        self.rank(&mut words);
        words
    }

    /// Words of both stores starting with `prefix`, ranked.
    ///
    /// Prefixes shorter than [`MIN_WORD_LENGTH`] yield nothing.
    pub fn prefix_lookup(&self, prefix: &str) -> Vec<String> {
        let prefix = lowercase(prefix);
        if prefix.chars().count() < MIN_WORD_LENGTH {
            return Vec::new();
        }
        self.words_with_prefix(&prefix, usize::MAX)
    }

    /// The `limit` best-ranked words of both stores starting with `prefix`.
    pub fn words_with_prefix(&self, prefix: &str, limit: usize) -> Vec<String> {
        let mut words: Vec<String> = self.inner.builtin.with_prefix(prefix).cloned().collect();
        for w in self.inner.learned.with_prefix(prefix) {
            if !self.inner.builtin.words.contains(w) {
                words.push(w.clone());
            }
        }
        self.rank(&mut words);
        words.truncate(limit);
        words
    }
}

pub struct Dictionary {
    inner: RwLock<Inner>,
}

impl Dictionary {
    /// Empty dictionary with no built-in words.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner::default()),
        }
    }

    /// Dictionary populated with the built-in seed list.
    pub fn with_seed() -> Self {
        let dict = Self::new();
        {
            let mut inner = dict.write();
            for &(word, frequency) in SEED_WORDS {
                let Some(word) = normalize(word) else {
                    continue;
                };
                inner.insert(&word, Origin::Builtin);
                inner.frequencies.insert(word.clone(), frequency);
                inner.baseline.insert(word, frequency);
            }
        }
        dict
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Take a read view of the current state.
    pub fn view(&self) -> DictionaryView<'_> {
        DictionaryView {
            inner: self.inner.read().unwrap_or_else(PoisonError::into_inner),
        }
    }

    /// Insert a word into the chosen store.
    ///
    /// The word is normalized first; invalid words are ignored. Initializes
    /// the word's frequency to 1 if it has none. Returns `true` if the word
    /// was newly added to that store.
    pub fn insert(&self, word: &str, origin: Origin) -> bool {
        match normalize(word) {
            Some(word) => self.write().insert(&word, origin),
            None => false,
        }
    }

    /// Increment a word's usage counter, creating it at 1 if absent.
    pub fn bump_frequency(&self, word: &str) {
        let word = normalize(word).unwrap_or_else(|| lowercase(word));
        let mut inner = self.write();
        let count = inner.frequencies.entry(word).or_insert(0);
        *count = count.saturating_add(1);
    }

    pub fn frequency(&self, word: &str) -> u32 {
        self.view().frequency(&lowercase(word))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.view().contains(&lowercase(word))
    }

    pub fn exact_lookup(&self, sequence: &str) -> Vec<String> {
        self.view().exact_lookup(sequence)
    }

    pub fn prefix_lookup(&self, prefix: &str) -> Vec<String> {
        self.view().prefix_lookup(prefix)
    }

    /// Clear the learned overlay and restore baseline frequencies.
    ///
    /// Built-in words keep their seed frequency (1 for imported words).
    pub fn reset(&self) {
        let mut inner = self.write();
        inner.learned = Store::default();
        inner.frequencies = inner.baseline.clone();
        debug!(words = inner.builtin.words.len(), "dictionary reset");
    }

    /// Insert every valid token into the built-in store.
    pub fn import<I, S>(&self, tokens: I) -> ImportReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut report = ImportReport::default();
        for token in tokens {
            let Some(word) = normalize(token.as_ref()) else {
                report.rejected += 1;
                continue;
            };
            if self.write().insert(&word, Origin::Builtin) {
                report.inserted += 1;
            } else {
                report.duplicates += 1;
            }
        }
        debug!(
            inserted = report.inserted,
            duplicates = report.duplicates,
            rejected = report.rejected,
            "import finished"
        );
        report
    }

    /// Learned words in the order they were first learned.
    pub fn learned_words(&self) -> Vec<String> {
        let view = self.view();
        let mut words: Vec<String> = view.inner.learned.words.iter().cloned().collect();
        words.sort_by_key(|w| view.inner.order.get(w).copied().unwrap_or(u64::MAX));
        words
    }

    pub fn stats(&self) -> DictStats {
        let view = self.view();
        let inner = &view.inner;
        let mut sequences: BTreeSet<&str> = inner.builtin.buckets.keys().map(String::as_str).collect();
        sequences.extend(inner.learned.buckets.keys().map(String::as_str));
        DictStats {
            builtin_words: inner.builtin.words.len(),
            learned_words: inner.learned.words.len(),
            sequences: sequences.len(),
            tracked_frequencies: inner.frequencies.len(),
        }
    }

    /// Capture the learned overlay and the frequency table.
    pub fn user_data(&self) -> UserData {
        let learned = self.learned_words();
        let view = self.view();
        let mut frequencies: Vec<(String, u32)> = view
            .inner
            .frequencies
            .iter()
            .map(|(w, &f)| (w.clone(), f))
            .collect();
        frequencies.sort();
        UserData {
            learned,
            frequencies,
        }
    }

    /// Merge user data into this dictionary.
    ///
    /// Learned words are re-inserted into the overlay. Frequencies are only
    /// restored for words present in either store.
    pub fn apply_user_data(&self, data: UserData) {
        let mut inner = self.write();
        let mut skipped = 0usize;
        for word in &data.learned {
            match normalize(word) {
                Some(w) => {
                    inner.insert(&w, Origin::Learned);
                }
                None => skipped += 1,
            }
        }
        for (word, count) in data.frequencies {
            if inner.contains(&word) {
                inner.frequencies.insert(word, count);
            } else {
                skipped += 1;
            }
        }
        if skipped > 0 {
            warn!(skipped, "ignored stale user data records");
        }
    }

    /// Serialize user data to bytes (KLUW format).
    pub fn to_bytes(&self) -> Result<Vec<u8>, DictError> {
        self.user_data().to_bytes()
    }

    /// Atomic write: write to .tmp then rename.
    pub fn save(&self, path: &Path) -> Result<(), DictError> {
        let bytes = self.to_bytes()?;
        let tmp = path.with_extension("tmp");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&tmp, &bytes)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }

    /// Seeded dictionary with the user data at `path` merged in.
    ///
    /// A missing file yields the plain seeded dictionary.
    pub fn open_user_data(path: &Path) -> Result<Self, DictError> {
        let dict = Self::with_seed();
        match fs::read(path) {
            Ok(bytes) => dict.apply_user_data(UserData::from_bytes(&bytes)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no user data, starting fresh");
            }
            Err(e) => return Err(e.into()),
        }
        Ok(dict)
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}

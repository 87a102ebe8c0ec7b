use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use klavye_core::dict::{DictStats, Dictionary, ImportReport};

use super::{EngineError, KlavyeSession};

/// Owns the dictionary shared by every session it creates.
pub struct KlavyeEngine {
    dict: Arc<Dictionary>,
}

impl KlavyeEngine {
    /// Engine over the built-in seed vocabulary, with no learned data.
    pub fn new() -> Arc<Self> {
        Self::with_dictionary(Dictionary::with_seed())
    }

    pub fn with_dictionary(dict: Dictionary) -> Arc<Self> {
        Arc::new(Self {
            dict: Arc::new(dict),
        })
    }

    /// Seed vocabulary plus the user data saved at `path`. A missing file is
    /// not an error.
    pub fn open(path: &Path) -> Result<Arc<Self>, EngineError> {
        let dict = Dictionary::open_user_data(path)?;
        debug!(path = %path.display(), stats = ?dict.stats(), "engine opened");
        Ok(Self::with_dictionary(dict))
    }

    pub fn create_session(&self) -> Arc<KlavyeSession> {
        KlavyeSession::new(Arc::clone(&self.dict))
    }

    /// Add already-cleaned tokens to the built-in vocabulary.
    pub fn import_tokens<I, S>(&self, tokens: I) -> ImportReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.dict.import(tokens)
    }

    /// Forget learned words and restore baseline frequencies.
    pub fn clear_learned_words(&self) {
        self.dict.reset();
    }

    pub fn learned_words(&self) -> Vec<String> {
        self.dict.learned_words()
    }

    pub fn save_user_data(&self, path: &Path) -> Result<(), EngineError> {
        self.dict.save(path)?;
        Ok(())
    }

    /// Words matching a keypad digit sequence, best first.
    pub fn lookup(&self, sequence: &str) -> Vec<String> {
        self.dict.exact_lookup(sequence)
    }

    pub fn stats(&self) -> DictStats {
        self.dict.stats()
    }

    pub fn dictionary(&self) -> &Arc<Dictionary> {
        &self.dict
    }
}

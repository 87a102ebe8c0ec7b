//! Host API: engine, sessions, and a few stateless helpers.

mod engine;
mod session;
mod types;


pub use engine::KlavyeEngine;
pub use session::KlavyeSession;
pub use types::{EngineError, KlavyeEvent, KlavyeKeyResponse};

use std::path::Path;

pub fn engine_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Install a custom settings file. Must run before the first engine is built.
pub fn settings_load_config(path: &Path) -> Result<(), EngineError> {
    let content = std::fs::read_to_string(path).map_err(|source| EngineError::Io {
        path: path.display().to_string(),
        source,
    })?;
    klavye_core::settings::init_custom(content)?;
    Ok(())
}

pub fn settings_default_config() -> String {
    klavye_core::settings::default_toml().to_string()
}

/// Keypad digit sequence for `word`; unmapped characters are dropped.
pub fn encode_word(word: &str) -> String {
    klavye_core::encoder::encode(word)
}

pub fn trace_init(log_dir: &Path) {
    crate::trace_init::init_tracing(log_dir);
}

//! Host-facing facade for the klavye text-entry engine.
//!
//! `KlavyeEngine` owns the shared dictionary; each input field gets its own
//! `KlavyeSession`. Both are safe to share across threads.

pub mod api;
mod trace_init;

pub use api::{
    encode_word, engine_version, settings_default_config, settings_load_config, trace_init,
    EngineError, KlavyeEngine, KlavyeEvent, KlavyeKeyResponse, KlavyeSession,
};
pub use klavye_core::dict::{DictStats, ImportReport};
pub use klavye_core::layout::{KeyId, Layout};
pub use klavye_session::KeyEvent;

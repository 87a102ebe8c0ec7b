use serde::Serialize;

use klavye_core::dict::DictError;
use klavye_core::settings::SettingsError;
use klavye_session::{CandidateAction, KeyResponse};

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("IO error: {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Dict(#[from] DictError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// Event-driven response from handle_key / commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KlavyeKeyResponse {
    pub consumed: bool,
    pub events: Vec<KlavyeEvent>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum KlavyeEvent {
    Commit {
        text: String,
    },
    SetMarkedText {
        text: String,
    },
    ClearMarkedText,
    ShowCandidates {
        surfaces: Vec<String>,
        highlighted: Option<u32>,
    },
    HideCandidates,
    /// A word was committed; carries its lowercase dictionary form.
    WordCommitted {
        word: String,
    },
    /// Learned data changed and should be persisted.
    SaveUserData,
}

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------

pub(super) fn convert_to_events(resp: KeyResponse) -> KlavyeKeyResponse {
    let mut events = Vec::new();

    // 1. Commit
    if let Some(text) = resp.commit {
        events.push(KlavyeEvent::Commit { text });
    }

    // 2. Marked text
    if let Some(m) = resp.marked {
        if m.text.is_empty() {
            events.push(KlavyeEvent::ClearMarkedText);
        } else {
            events.push(KlavyeEvent::SetMarkedText { text: m.text });
        }
    }

    // 3. Candidates
    match resp.candidates {
        CandidateAction::Show {
            surfaces,
            highlighted,
        } => events.push(KlavyeEvent::ShowCandidates {
            surfaces,
            highlighted: highlighted.map(|i| i as u32),
        }),
        CandidateAction::Hide => events.push(KlavyeEvent::HideCandidates),
        CandidateAction::Keep => {}
    }

    // 4. Side effects
    if let Some(word) = resp.side_effects.committed_word {
        events.push(KlavyeEvent::WordCommitted { word });
    }
    if resp.side_effects.save_user_data {
        events.push(KlavyeEvent::SaveUserData);
    }

    KlavyeKeyResponse {
        consumed: resp.consumed,
        events,
    }
}

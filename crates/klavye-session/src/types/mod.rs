mod composition;
pub(crate) use composition::*;

use klavye_core::layout::{KeyId, Layout};

/// Input event delivered by the host.
///
/// Timestamps are milliseconds on any monotonic clock the host chooses; only
/// differences between them matter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyEvent {
    /// A physical key on `layout`. `shift` applies to this press only.
    Press {
        layout: Layout,
        key: KeyId,
        shift: bool,
        at_ms: u64,
    },
    /// Toggle the session shift. One-shot on compact and standard layouts,
    /// latched on the numeric keypad.
    Shift,
    Backspace,
    Space,
    Enter,
    /// Commit the composed word without inserting anything else.
    Commit,
    /// Accept the candidate at this index.
    SelectCandidate(usize),
    /// Move the highlight to the next candidate, wrapping around.
    CycleCandidate,
    /// Discard the composition.
    Cancel,
    /// The input field lost focus.
    Blur,
}

impl KeyEvent {
    pub fn press(layout: Layout, key: &str, at_ms: u64) -> Self {
        Self::Press {
            layout,
            key: KeyId::from(key),
            shift: false,
            at_ms,
        }
    }

    pub fn shifted_press(layout: Layout, key: &str, at_ms: u64) -> Self {
        Self::Press {
            layout,
            key: KeyId::from(key),
            shift: true,
            at_ms,
        }
    }
}

/// Marked (composing) text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkedText {
    pub text: String,
}

/// Candidate panel action — exactly one of three states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateAction {
    /// Leave the panel as-is.
    Keep,
    /// Show or update the candidate panel with these surfaces.
    Show {
        surfaces: Vec<String>,
        highlighted: Option<usize>,
    },
    /// Hide the candidate panel.
    Hide,
}

/// Orthogonal side-effects that accompany a response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SideEffects {
    /// Word (lowercase) the user just committed, if the commit was a word.
    pub committed_word: Option<String>,
    /// Learned words or frequencies changed; the host may persist user data.
    pub save_user_data: bool,
}

/// Response from handle_key, returned to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyResponse {
    pub consumed: bool,
    pub commit: Option<String>,
    pub marked: Option<MarkedText>,
    pub candidates: CandidateAction,
    pub side_effects: SideEffects,
}

impl KeyResponse {
    pub(crate) fn not_consumed() -> Self {
        Self {
            consumed: false,
            commit: None,
            marked: None,
            candidates: CandidateAction::Keep,
            side_effects: SideEffects::default(),
        }
    }

    pub(crate) fn consumed() -> Self {
        Self {
            consumed: true,
            ..Self::not_consumed()
        }
    }

    /// Sequence two responses: commits concatenate, display fields come
    /// from `next` unless it leaves them untouched.
    pub(crate) fn then(mut self, next: KeyResponse) -> KeyResponse {
        self.consumed |= next.consumed;
        if let Some(text) = next.commit {
            self.append_commit(&text);
        }
        if next.marked.is_some() {
            self.marked = next.marked;
        }
        if next.candidates != CandidateAction::Keep {
            self.candidates = next.candidates;
        }
        if next.side_effects.committed_word.is_some() {
            self.side_effects.committed_word = next.side_effects.committed_word;
        }
        self.side_effects.save_user_data |= next.side_effects.save_user_data;
        self
    }

    pub(crate) fn append_commit(&mut self, text: &str) {
        match self.commit {
            Some(ref mut t) => t.push_str(text),
            None => self.commit = Some(text.to_string()),
        }
    }
}

pub(crate) fn cyclic_index(current: usize, delta: i32, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let c = current as i32;
    let n = count as i32;
    ((c + delta + n) % n) as usize
}

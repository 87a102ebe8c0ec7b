use klavye_core::layout::{KeyId, Layout};

/// What the open composition holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Submode {
    /// Letters of a word.
    Word,
    /// A single punctuation character still cycling.
    Symbol,
}

pub(crate) enum SessionState {
    Idle,
    Composing(Composition),
}

/// The open multi-tap position.
#[derive(Debug, Clone)]
pub(crate) struct TapState {
    pub(crate) key: KeyId,
    pub(crate) presses: u32,
    pub(crate) at_ms: u64,
    /// Case chosen on the first tap; repeats keep it.
    pub(crate) shift: bool,
}

pub(crate) struct CandidateState {
    pub(crate) surfaces: Vec<String>,
    pub(crate) highlighted: Option<usize>,
}

impl CandidateState {
    pub(crate) fn new() -> Self {
        Self {
            surfaces: Vec::new(),
            highlighted: None,
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    pub(crate) fn highlighted_surface(&self) -> Option<&str> {
        self.highlighted
            .and_then(|i| self.surfaces.get(i))
            .map(String::as_str)
    }
}

pub(crate) struct Composition {
    pub(crate) layout: Layout,
    pub(crate) submode: Submode,
    /// One key per position.
    pub(crate) keys: Vec<KeyId>,
    /// One resolved character per position.
    pub(crate) literal: String,
    pub(crate) tap: Option<TapState>,
    pub(crate) candidates: CandidateState,
}

impl Composition {
    pub(crate) fn new(layout: Layout, submode: Submode) -> Self {
        Self {
            layout,
            submode,
            keys: Vec::new(),
            literal: String::new(),
            tap: None,
            candidates: CandidateState::new(),
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.literal.is_empty()
    }

    pub(crate) fn len(&self) -> usize {
        self.keys.len()
    }

    /// Keypad digits pressed so far (numeric layout).
    pub(crate) fn sequence(&self) -> String {
        self.keys.iter().map(KeyId::as_str).collect()
    }

    /// Append a position.
    pub(crate) fn push(&mut self, key: KeyId, c: char) {
        self.keys.push(key);
        self.literal.push(c);
    }

    /// Replace the character at the last position.
    pub(crate) fn replace_last(&mut self, c: char) {
        self.literal.pop();
        self.literal.push(c);
    }

    /// Drop the last position, closing any open tap.
    pub(crate) fn pop(&mut self) {
        self.tap = None;
        self.keys.pop();
        self.literal.pop();
    }

    /// Whether the literal text starts with an uppercase letter.
    pub(crate) fn is_capitalized(&self) -> bool {
        self.literal.chars().next().is_some_and(char::is_uppercase)
    }

    /// Text shown as marked text.
    ///
    /// The highlighted candidate if any. Otherwise the literal text, except on
    /// the numeric keypad where an unmatched sequence shows its digits.
    pub(crate) fn display(&self) -> String {
        if let Some(surface) = self.candidates.highlighted_surface() {
            return apply_case(surface, self.is_capitalized());
        }
        if self.submode == Submode::Word && self.layout == Layout::Numeric {
            return self.sequence();
        }
        self.literal.clone()
    }
}

/// Uppercase the first letter of `word` when `capitalized`.
pub(crate) fn apply_case(word: &str, capitalized: bool) -> String {
    if !capitalized {
        return word.to_string();
    }
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(word.len());
            out.push(klavye_core::unicode::to_upper(first));
            out.extend(chars);
            out
        }
        None => String::new(),
    }
}

//! Static key layouts: which characters each physical key produces.
//!
//! Three layouts are supported: a phone keypad (`Numeric`), a QWERTY-ordered
//! keyboard with two or three letters per key (`Compact`), and a full
//! alphabetic keyboard (`Standard`). Lookups are total: an unknown key maps
//! to an empty character sequence.

mod table;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use table::{KeyDef, COMPACT, NUMERIC, STANDARD};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Layout {
    Numeric,
    Compact,
    Standard,
}

/// What a key press means to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyRole {
    /// Produces letters of the word being composed.
    Letters,
    /// Cycles through punctuation; terminates the current word.
    Punctuation,
    /// Terminates the current word and inserts a space.
    Space,
}

/// Opaque identifier of a physical key, e.g. `"7"`, `"gh"` or `"s"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct KeyId(String);

impl KeyId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for KeyId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Layout {
    pub const ALL: [Layout; 3] = [Layout::Numeric, Layout::Compact, Layout::Standard];

    fn table(self) -> &'static [KeyDef] {
        match self {
            Layout::Numeric => NUMERIC,
            Layout::Compact => COMPACT,
            Layout::Standard => STANDARD,
        }
    }

    fn find(self, key: &KeyId) -> Option<&'static KeyDef> {
        self.table().iter().find(|def| def.id == key.as_str())
    }

    /// Ordered characters for `key`; empty when the key is not on this layout.
    pub fn chars_for(self, key: &KeyId) -> &'static str {
        self.find(key).map_or("", |def| def.chars)
    }

    pub fn role(self, key: &KeyId) -> Option<KeyRole> {
        self.find(key).map(|def| def.role)
    }

    /// All keys in table order.
    pub fn keys(self) -> impl Iterator<Item = KeyId> {
        self.table().iter().map(|def| KeyId::new(def.id))
    }

    /// Whether repeated presses of a letter key cycle through its letters.
    /// The numeric keypad is predictive instead: every press is a new letter.
    pub fn cycles_letters(self) -> bool {
        !matches!(self, Layout::Numeric)
    }

    /// Whether a one-shot shift clears itself after a single character.
    pub fn shift_is_one_shot(self) -> bool {
        !matches!(self, Layout::Numeric)
    }

    /// Find the key and press count that produce `c`.
    ///
    /// Uppercase characters are looked up in the shifted subset. Used to turn
    /// plain text back into key presses (simulation, tests).
    pub fn taps_for(self, c: char) -> Option<(KeyId, u32)> {
        let shift = c.is_uppercase();
        self.table().iter().find_map(|def| {
            let key = KeyId::new(def.id);
            crate::resolver::cycle(self, &key, shift)
                .iter()
                .position(|&x| x == c)
                .map(|i| (key, i as u32 + 1))
        })
    }

    pub fn name(self) -> &'static str {
        match self {
            Layout::Numeric => "numeric",
            Layout::Compact => "compact",
            Layout::Standard => "standard",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown layout: {0} (expected numeric, compact or standard)")]
pub struct UnknownLayout(String);

impl FromStr for Layout {
    type Err = UnknownLayout;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "numeric" | "t9" => Ok(Layout::Numeric),
            "compact" | "t12" => Ok(Layout::Compact),
            "standard" | "qwerty" => Ok(Layout::Standard),
            _ => Err(UnknownLayout(s.to_string())),
        }
    }
}

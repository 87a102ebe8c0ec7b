use serde::{Deserialize, Serialize};

use super::DictError;

const MAGIC: &[u8; 4] = b"KLUW";
const VERSION: u8 = 1;
const HEADER_LEN: usize = 5;

/// Persistable user state: the learned overlay and the frequency table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserData {
    /// Learned words, oldest first.
    pub learned: Vec<String>,
    /// `(word, count)` pairs sorted by word.
    pub frequencies: Vec<(String, u32)>,
}

impl UserData {
    /// Serialize to bytes (KLUW format).
    pub fn to_bytes(&self) -> Result<Vec<u8>, DictError> {
        let body = bincode::serialize(self).map_err(DictError::Serialize)?;
        let mut buf = Vec::with_capacity(HEADER_LEN + body.len());
        buf.extend_from_slice(MAGIC);
        buf.push(VERSION);
        buf.extend_from_slice(&body);
        Ok(buf)
    }

    /// Deserialize from bytes (KLUW format).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DictError> {
        if bytes.len() < HEADER_LEN {
            return Err(DictError::InvalidHeader);
        }
        if &bytes[0..4] != MAGIC {
            return Err(DictError::InvalidMagic);
        }
        if bytes[4] != VERSION {
            return Err(DictError::UnsupportedVersion(bytes[4]));
        }
        bincode::deserialize(&bytes[HEADER_LEN..]).map_err(DictError::Deserialize)
    }
}

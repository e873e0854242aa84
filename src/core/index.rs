use serde::{Deserialize, Serialize};

use crate::types::RecordKey;

/// Ordered list of record keys persisted under an index name.
///
/// Encodes as a plain JSON array of strings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyIndex {
    keys: Vec<RecordKey>,
}

impl KeyIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> &[RecordKey] {
        &self.keys
    }

    /// Number of registered keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// True when no key is registered.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Key the next append would register.
    ///
    /// With `generate`, the supplied prefix gets the 1-based position the new
    /// entry will occupy. The suffix is positional, so two writers appending
    /// against the same snapshot derive the same key.
    pub fn next_key(&self, supplied: &str, generate: bool) -> RecordKey {
        if generate {
            format!("{supplied}{}", self.keys.len() + 1)
        } else {
            supplied.to_string()
        }
    }

    /// Appends `key` at the end.
    pub fn push(&mut self, key: impl Into<RecordKey>) {
        self.keys.push(key.into());
    }

    /// Decodes stored index bytes.
    ///
    /// Empty bytes and JSON `null` both decode to an empty index.
    pub fn decode(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        if bytes.is_empty() {
            return Ok(Self::new());
        }
        let keys: Option<Vec<RecordKey>> = serde_json::from_slice(bytes)?;
        Ok(Self {
            keys: keys.unwrap_or_default(),
        })
    }

    /// Encodes the index for storage.
    pub fn encode(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}

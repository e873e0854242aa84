//! Company record stored by the contract.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A company payload.
///
/// Only `name` is typed; any other field in the stored JSON is kept in
/// [`Company::attributes`] and written back out unchanged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Company {
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Remaining payload fields.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Company {
    /// Creates a company with only a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Map::new(),
        }
    }
}

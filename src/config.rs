//! Store and logging configuration.

use std::env;

use crate::types::{COMPANIES_INDEX, IndexName, KNOWN_INDEXES};

/// Environment variable holding the shim log level.
pub const LOG_LEVEL_ENV: &str = "SHIM_LOGGING_LEVEL";

/// How undecodable index or record bytes are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodePolicy {
    /// Corrupt index bytes read as an empty index and corrupt payloads as the
    /// record's zero value. A warning is logged for each substitution.
    #[default]
    Tolerant,
    /// Any decode failure is returned as an encoding error.
    Strict,
}

/// How `add_record` commits its index and payload writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WritePolicy {
    /// Both writes go to the ledger in one batch.
    #[default]
    Atomic,
    /// Index first, then payload. A failed payload write leaves the index
    /// pointing at a key with no record.
    Sequential,
}

/// Configuration handed to [`crate::core::store::IndexedStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Indexes cleared by a full reset.
    pub indexes: Vec<IndexName>,
    /// Index that company keys are registered in.
    pub companies_index: IndexName,
    /// Decode failure handling.
    pub decode: DecodePolicy,
    /// Write commit strategy for `add_record`.
    pub write: WritePolicy,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            indexes: KNOWN_INDEXES.iter().map(|name| name.to_string()).collect(),
            companies_index: COMPANIES_INDEX.to_string(),
            decode: DecodePolicy::default(),
            write: WritePolicy::default(),
        }
    }
}

impl StoreConfig {
    /// Replaces the decode policy.
    pub fn with_decode(mut self, decode: DecodePolicy) -> Self {
        self.decode = decode;
        self
    }

    /// Replaces the write policy.
    pub fn with_write(mut self, write: WritePolicy) -> Self {
        self.write = write;
        self
    }
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// `tracing` filter directive, e.g. `info` or `ledgerdex=debug`.
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

impl LogConfig {
    /// Reads [`LOG_LEVEL_ENV`], falling back to `info`.
    pub fn from_env() -> Self {
        env::var(LOG_LEVEL_ENV)
            .ok()
            .and_then(|raw| shim_level_filter(&raw))
            .map(|filter| Self {
                filter: filter.to_string(),
            })
            .unwrap_or_default()
    }
}

/// Maps a shim log level name onto a `tracing` level directive.
pub fn shim_level_filter(raw: &str) -> Option<&'static str> {
    match raw.trim().to_ascii_uppercase().as_str() {
        "DEBUG" => Some("debug"),
        "INFO" | "NOTICE" => Some("info"),
        "WARNING" | "WARN" => Some("warn"),
        "ERROR" | "CRITICAL" => Some("error"),
        _ => None,
    }
}

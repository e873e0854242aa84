//! Key-value ledger collaborator and its implementations.

/// In-memory ledger backed by a hash map.
pub mod memory;
/// SQLite-backed persistent ledger.
pub mod sqlite;

/// Errors raised by a ledger read or write.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// The SQLite backend failed.
    #[error("sqlite: {0}")]
    Sqlite(#[from] rusqlite::Error),
    /// The ledger could not serve the request.
    #[error("ledger unavailable: {0}")]
    Unavailable(String),
}

/// Result alias for ledger calls.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// World state exposed by the hosting ledger.
///
/// Writes overwrite unconditionally; there is no version check. `get`
/// distinguishes a missing key (`Ok(None)`) from a failed read.
pub trait LedgerState: Send {
    /// Reads the value stored under `key`.
    fn get(&self, key: &str) -> LedgerResult<Option<Vec<u8>>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn put(&mut self, key: &str, value: &[u8]) -> LedgerResult<()>;

    /// Stores several values.
    ///
    /// The default applies the writes in order and stops at the first
    /// failure, leaving earlier writes in place. Implementations that can
    /// commit all writes at once should override it.
    fn put_batch(&mut self, writes: &[(String, Vec<u8>)]) -> LedgerResult<()> {
        for (key, value) in writes {
            self.put(key, value)?;
        }
        Ok(())
    }
}

//! SQLite-backed world state.

use std::path::Path;

use rusqlite::{Connection, OptionalExtension, params};

use super::{LedgerResult, LedgerState};

/// SQLite implementation of [`crate::ledger::LedgerState`].
///
/// Batched writes are committed in one transaction, so either every write
/// lands or none does.
pub struct SqliteLedger {
    conn: Connection,
}

impl SqliteLedger {
    /// Opens or creates a SQLite-backed ledger at `path`.
    ///
    /// Enables WAL mode and sets `synchronous=NORMAL`.
    pub fn open(path: impl AsRef<Path>) -> LedgerResult<Self> {
        let conn = Connection::open(path)?;
        Self::init_connection(conn)
    }

    /// Opens an in-memory SQLite ledger.
    pub fn open_in_memory() -> LedgerResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init_connection(conn)
    }

    fn init_connection(conn: Connection) -> LedgerResult<Self> {
        conn.execute_batch(include_str!("schema.sql"))?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;
        Ok(Self { conn })
    }

    /// Returns every stored key in ascending order.
    pub fn keys(&self) -> LedgerResult<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT key FROM world_state ORDER BY key ASC")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }
}

impl LedgerState for SqliteLedger {
    fn get(&self, key: &str) -> LedgerResult<Option<Vec<u8>>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM world_state WHERE key = ?1",
                params![key],
                |row| row.get::<_, Vec<u8>>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn put(&mut self, key: &str, value: &[u8]) -> LedgerResult<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO world_state(key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }

    fn put_batch(&mut self, writes: &[(String, Vec<u8>)]) -> LedgerResult<()> {
        if writes.is_empty() {
            return Ok(());
        }

        let tx = self.conn.transaction()?;
        {
            let mut stmt =
                tx.prepare("INSERT OR REPLACE INTO world_state(key, value) VALUES (?1, ?2)")?;
            for (key, value) in writes {
                stmt.execute(params![key, value])?;
            }
        }
        tx.commit()?;
        Ok(())
    }
}

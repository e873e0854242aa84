use hashbrown::HashMap;

use super::{LedgerResult, LedgerState};

/// Ledger state held in process memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryLedger {
    entries: HashMap<String, Vec<u8>>,
}

impl MemoryLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl LedgerState for MemoryLedger {
    fn get(&self, key: &str) -> LedgerResult<Option<Vec<u8>>> {
        Ok(self.entries.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &[u8]) -> LedgerResult<()> {
        self.entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn put_batch(&mut self, writes: &[(String, Vec<u8>)]) -> LedgerResult<()> {
        self.entries.extend(writes.iter().cloned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_reads_as_none() {
        let ledger = MemoryLedger::new();
        assert_eq!(ledger.get("nope").unwrap(), None);
    }

    #[test]
    fn put_overwrites_previous_value() {
        let mut ledger = MemoryLedger::new();
        ledger.put("k", b"one").unwrap();
        ledger.put("k", b"two").unwrap();
        assert_eq!(ledger.get("k").unwrap().as_deref(), Some(&b"two"[..]));
        assert_eq!(ledger.len(), 1);
    }
}

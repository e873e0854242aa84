use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::{
    config::{DecodePolicy, StoreConfig, WritePolicy},
    ledger::{LedgerError, LedgerState},
    types::RecordKey,
};

use super::index::KeyIndex;

/// Why a record read failed.
#[derive(Debug, thiserror::Error)]
pub enum ReadCause {
    /// No value is stored under the key.
    #[error("not found")]
    NotFound,
    /// The ledger read itself failed.
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

/// Errors raised by [`IndexedStore`] operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The index sequence could not be read.
    #[error("failed to read index {index}")]
    IndexRead {
        /// Index name.
        index: String,
        /// Ledger failure.
        source: LedgerError,
    },
    /// The index sequence could not be written.
    #[error("failed to write index {index}")]
    IndexWrite {
        /// Index name.
        index: String,
        /// Ledger failure.
        source: LedgerError,
    },
    /// A record payload could not be read.
    #[error("failed to read record {key}: {cause}")]
    RecordRead {
        /// Record key.
        key: RecordKey,
        /// Missing key or ledger failure.
        #[source]
        cause: ReadCause,
    },
    /// A record payload could not be written.
    #[error("failed to write record {key}")]
    RecordWrite {
        /// Record key.
        key: RecordKey,
        /// Ledger failure.
        source: LedgerError,
    },
    /// An index or payload was not valid JSON for its type.
    #[error("malformed {context}: {source}")]
    Encoding {
        /// What was being encoded or decoded.
        context: String,
        /// Serializer failure.
        source: serde_json::Error,
    },
}

impl StoreError {
    fn encoding(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Encoding {
            context: context.into(),
            source,
        }
    }
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Index append computed against a snapshot but not yet written.
struct PendingAppend {
    key: RecordKey,
    encoded_index: Vec<u8>,
}

/// Records kept in a ledger and enumerated through named key indexes.
///
/// The store holds no state besides the ledger handle and its
/// configuration; every operation reads and writes the ledger directly.
#[derive(Debug)]
pub struct IndexedStore<L> {
    ledger: L,
    config: StoreConfig,
}

impl<L: LedgerState> IndexedStore<L> {
    /// Wraps `ledger` with `config`.
    pub fn new(ledger: L, config: StoreConfig) -> Self {
        Self { ledger, config }
    }

    /// Active configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Underlying ledger.
    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Mutable access to the underlying ledger.
    pub fn ledger_mut(&mut self) -> &mut L {
        &mut self.ledger
    }

    /// Writes an empty sequence under each name.
    ///
    /// Stops at the first failed write; indexes before it stay reset.
    pub fn reset<I, S>(&mut self, names: I) -> StoreResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let empty = KeyIndex::new()
            .encode()
            .map_err(|e| StoreError::encoding("empty index", e))?;

        for name in names {
            let name = name.as_ref();
            self.ledger
                .put(name, &empty)
                .map_err(|source| StoreError::IndexWrite {
                    index: name.to_string(),
                    source,
                })?;
            debug!(index = name, "index reset");
        }
        Ok(())
    }

    /// Resets every index named in the configuration.
    pub fn reset_all(&mut self) -> StoreResult<()> {
        let names = self.config.indexes.clone();
        self.reset(&names)
    }

    /// Reads the key sequence stored under `index`.
    ///
    /// An absent index is empty. An undecodable one is empty under
    /// [`DecodePolicy::Tolerant`] and an error under [`DecodePolicy::Strict`].
    pub fn read_index(&self, index: &str) -> StoreResult<KeyIndex> {
        let raw = self
            .ledger
            .get(index)
            .map_err(|source| StoreError::IndexRead {
                index: index.to_string(),
                source,
            })?;

        let Some(raw) = raw else {
            return Ok(KeyIndex::new());
        };

        match KeyIndex::decode(&raw) {
            Ok(keys) => Ok(keys),
            Err(err) => match self.config.decode {
                DecodePolicy::Tolerant => {
                    warn!(index, error = %err, "undecodable index treated as empty");
                    Ok(KeyIndex::new())
                }
                DecodePolicy::Strict => Err(StoreError::encoding(format!("index {index}"), err)),
            },
        }
    }

    /// Appends a key to `index` and returns it.
    ///
    /// With `generate`, the key is `supplied` followed by the new entry's
    /// 1-based position; otherwise it is `supplied` verbatim.
    pub fn append_key(
        &mut self,
        index: &str,
        supplied: &str,
        generate: bool,
    ) -> StoreResult<RecordKey> {
        let pending = self.prepare_append(index, supplied, generate)?;
        self.ledger
            .put(index, &pending.encoded_index)
            .map_err(|source| StoreError::IndexWrite {
                index: index.to_string(),
                source,
            })?;
        debug!(index, key = %pending.key, "key appended");
        Ok(pending.key)
    }

    /// Registers `key` in `index` and stores `payload` under it.
    ///
    /// The key is used verbatim. How the two writes are committed follows
    /// [`StoreConfig::write`].
    pub fn add_record(&mut self, index: &str, key: &str, payload: &[u8]) -> StoreResult<()> {
        match self.config.write {
            WritePolicy::Sequential => {
                let key = self.append_key(index, key, false)?;
                self.ledger
                    .put(&key, payload)
                    .map_err(|source| StoreError::RecordWrite { key, source })?;
            }
            WritePolicy::Atomic => {
                let pending = self.prepare_append(index, key, false)?;
                let writes = vec![
                    (index.to_string(), pending.encoded_index),
                    (pending.key.clone(), payload.to_vec()),
                ];
                self.ledger
                    .put_batch(&writes)
                    .map_err(|source| StoreError::RecordWrite {
                        key: pending.key,
                        source,
                    })?;
            }
        }
        debug!(index, key, bytes = payload.len(), "record stored");
        Ok(())
    }

    /// Returns the raw payload stored under `key`.
    pub fn get_record(&self, key: &str) -> StoreResult<Vec<u8>> {
        match self.ledger.get(key) {
            Ok(Some(payload)) => Ok(payload),
            Ok(None) => Err(StoreError::RecordRead {
                key: key.to_string(),
                cause: ReadCause::NotFound,
            }),
            Err(err) => Err(StoreError::RecordRead {
                key: key.to_string(),
                cause: err.into(),
            }),
        }
    }

    /// Decodes every record referenced by `index`, in index order.
    ///
    /// The first unreadable key fails the whole call. Payloads that do not
    /// decode become `T::default()` under [`DecodePolicy::Tolerant`].
    pub fn list_records<T>(&self, index: &str) -> StoreResult<Vec<T>>
    where
        T: DeserializeOwned + Default,
    {
        let keys = self.read_index(index)?;
        let mut out = Vec::with_capacity(keys.len());

        for key in keys.keys() {
            let payload = self.get_record(key)?;
            let record = match serde_json::from_slice::<T>(&payload) {
                Ok(record) => record,
                Err(err) => match self.config.decode {
                    DecodePolicy::Tolerant => {
                        warn!(
                            index,
                            key = %key,
                            error = %err,
                            "undecodable record replaced by default"
                        );
                        T::default()
                    }
                    DecodePolicy::Strict => {
                        return Err(StoreError::encoding(format!("record {key}"), err));
                    }
                },
            };
            out.push(record);
        }
        Ok(out)
    }

    fn prepare_append(
        &self,
        index: &str,
        supplied: &str,
        generate: bool,
    ) -> StoreResult<PendingAppend> {
        let mut keys = self.read_index(index)?;
        let key = keys.next_key(supplied, generate);
        keys.push(key.clone());
        let encoded_index = keys
            .encode()
            .map_err(|e| StoreError::encoding(format!("index {index}"), e))?;
        Ok(PendingAppend { key, encoded_index })
    }
}

//! Company contract: operation dispatch onto the indexed store.

use tracing::{debug, info};

use crate::{
    company::Company,
    config::StoreConfig,
    core::store::{IndexedStore, StoreError},
    ledger::LedgerState,
    op::{Operation, ParseError, Surface},
};

/// Errors returned to the host by the contract.
#[derive(Debug, thiserror::Error)]
pub enum ContractError {
    /// No function by that name exists on the surface.
    #[error("received unknown {surface} function name: {function}")]
    UnknownOperation {
        /// Surface that was called.
        surface: Surface,
        /// Requested function name.
        function: String,
    },
    /// A required positional argument was not supplied.
    #[error("{function} requires argument {position}")]
    MissingArgument {
        /// Function name.
        function: &'static str,
        /// Zero-based argument position.
        position: usize,
    },
    /// The store rejected the operation.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// The response could not be encoded.
    #[error("could not encode response: {0}")]
    Encoding(#[from] serde_json::Error),
}

impl From<ParseError> for ContractError {
    fn from(value: ParseError) -> Self {
        match value {
            ParseError::Unknown { surface, function } => {
                Self::UnknownOperation { surface, function }
            }
            ParseError::MissingArgument { function, position } => {
                Self::MissingArgument { function, position }
            }
        }
    }
}

/// Result alias for contract calls. `None` means the call has no payload.
pub type ContractResult = Result<Option<Vec<u8>>, ContractError>;

/// Contract serving company records over a ledger.
pub struct CompanyContract<L> {
    store: IndexedStore<L>,
}

impl<L: LedgerState> CompanyContract<L> {
    /// Builds a contract over `ledger`.
    pub fn new(ledger: L, config: StoreConfig) -> Self {
        Self {
            store: IndexedStore::new(ledger, config),
        }
    }

    /// Backing store.
    pub fn store(&self) -> &IndexedStore<L> {
        &self.store
    }

    /// Handles a transaction call.
    pub fn invoke(&mut self, function: &str, args: &[String]) -> ContractResult {
        self.call(Surface::Invoke, function, args).map(|(_, out)| out)
    }

    /// Handles a query call.
    pub fn query(&mut self, function: &str, args: &[String]) -> ContractResult {
        self.call(Surface::Query, function, args).map(|(_, out)| out)
    }

    /// Parses and runs a call arriving on `surface`.
    ///
    /// Returns the parsed operation alongside the call's output.
    pub fn call(
        &mut self,
        surface: Surface,
        function: &str,
        args: &[String],
    ) -> Result<(Operation, Option<Vec<u8>>), ContractError> {
        match surface {
            Surface::Invoke => info!(function, "invoke is running"),
            Surface::Query => debug!(function, "query is running"),
        }
        let op = Operation::parse(surface, function, args)?;
        let out = self.execute(&op)?;
        Ok((op, out))
    }

    /// Runs an already parsed operation.
    pub fn execute(&mut self, op: &Operation) -> ContractResult {
        match op {
            Operation::Init => Ok(None),
            Operation::ResetIndexes => self.reset_indexes(),
            Operation::AddCompany { key, payload } => self.add_company(key, payload),
            Operation::GetCompany { key } => self.get_company(key),
            Operation::GetAllCompanies => self.get_all_companies(),
        }
    }

    fn reset_indexes(&mut self) -> ContractResult {
        self.store.reset_all()?;
        info!(count = self.store.config().indexes.len(), "indexes reset");
        Ok(None)
    }

    fn add_company(&mut self, key: &str, payload: &str) -> ContractResult {
        let index = self.store.config().companies_index.clone();
        self.store.add_record(&index, key, payload.as_bytes())?;
        info!(key, "company added");
        Ok(None)
    }

    fn get_company(&self, key: &str) -> ContractResult {
        let payload = self.store.get_record(key)?;
        Ok(Some(payload))
    }

    fn get_all_companies(&self) -> ContractResult {
        let companies: Vec<Company> = self
            .store
            .list_records(&self.store.config().companies_index)?;
        Ok(Some(serde_json::to_vec(&companies)?))
    }
}

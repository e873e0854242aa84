//! Runtime event stream payloads.

use crate::{op::Operation, types::RecordKey};

/// Events emitted after a state-changing call succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractEvent {
    /// The contract was initialized.
    Initialized,
    /// Every known index was reset to empty.
    IndexesReset,
    /// A company record was stored.
    CompanyAdded {
        /// Record key.
        key: RecordKey,
    },
}

impl ContractEvent {
    /// Event published when `op` completes; queries publish nothing.
    pub fn for_operation(op: &Operation) -> Option<Self> {
        match op {
            Operation::Init => Some(Self::Initialized),
            Operation::ResetIndexes => Some(Self::IndexesReset),
            Operation::AddCompany { key, .. } => Some(Self::CompanyAdded { key: key.clone() }),
            Operation::GetCompany { .. } | Operation::GetAllCompanies => None,
        }
    }
}

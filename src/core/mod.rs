//! Index-backed record store.

/// Index sequence value and key generation.
pub mod index;
/// Record store over a ledger.
pub mod store;

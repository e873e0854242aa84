//! Company records in a key-value ledger, enumerated through JSON key indexes.
//!
//! # Examples
//!
//! Direct store usage with [`core::store::IndexedStore`]:
//! ```
//! use ledgerdex::{
//!     company::Company,
//!     config::StoreConfig,
//!     core::store::IndexedStore,
//!     ledger::memory::MemoryLedger,
//!     types::COMPANIES_INDEX,
//! };
//!
//! let mut store = IndexedStore::new(MemoryLedger::new(), StoreConfig::default());
//! store.reset_all().expect("reset");
//! store
//!     .add_record(COMPANIES_INDEX, "c1", br#"{"name":"Acme"}"#)
//!     .expect("add");
//! let companies: Vec<Company> = store.list_records(COMPANIES_INDEX).expect("list");
//! assert_eq!(companies, vec![Company::named("Acme")]);
//! ```
//!
//! Contract calls through the single-writer runtime:
//! ```no_run
//! use ledgerdex::{
//!     config::StoreConfig,
//!     contract::CompanyContract,
//!     ledger::sqlite::SqliteLedger,
//!     runtime::handle::{spawn_contract, RuntimeConfig},
//! };
//!
//! # #[tokio::main]
//! # async fn main() {
//! let ledger = SqliteLedger::open("ledger.db").expect("open sqlite");
//! let contract = CompanyContract::new(ledger, StoreConfig::default());
//! let handle = spawn_contract(contract, RuntimeConfig::default());
//! handle.invoke("reset_indexes", vec![]).await.expect("reset");
//! handle
//!     .invoke("add_company", vec!["c1".into(), r#"{"name":"Acme"}"#.into()])
//!     .await
//!     .expect("add");
//! let all = handle.query("get_all_companies", vec![]).await.expect("query");
//! assert_eq!(all.as_deref(), Some(&br#"[{"name":"Acme"}]"#[..]));
//! handle.shutdown().await.expect("shutdown");
//! # }
//! ```
#![deny(missing_docs)]

/// Company record type.
pub mod company;
/// Store and logging configuration.
pub mod config;
/// Contract dispatch over the store.
pub mod contract;
/// Index-backed record store.
pub mod core;
/// Ledger abstraction and backends.
pub mod ledger;
/// Tracing subscriber setup.
pub mod logging;
/// Contract operations and entry surfaces.
pub mod op;
/// Single-writer runtime handle and events.
pub mod runtime;
/// Shared key aliases and index names.
pub mod types;

//! Shared key aliases and well-known index names.

/// Name under which an index sequence is persisted.
pub type IndexName = String;
/// Ledger key under which a record payload is persisted.
pub type RecordKey = String;

/// Index enumerating every stored company.
pub const COMPANIES_INDEX: &str = "_companies";
/// Index reserved for mapping codes.
pub const MAPP_CODES_INDEX: &str = "_mappCodes";

/// Every index known to the contract, in reset order.
pub const KNOWN_INDEXES: [&str; 2] = [COMPANIES_INDEX, MAPP_CODES_INDEX];

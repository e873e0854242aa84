use tempfile::TempDir;

use ledgerdex::{
    company::Company,
    config::StoreConfig,
    contract::CompanyContract,
    core::store::IndexedStore,
    ledger::{LedgerState, sqlite::SqliteLedger},
    types::COMPANIES_INDEX,
};

#[test]
fn sqlite_state_survives_reopen() {
    let tmp = TempDir::new().expect("tmp");
    let db_path = tmp.path().join("ledger.db");

    {
        let ledger = SqliteLedger::open(&db_path).expect("open sqlite");
        let mut contract = CompanyContract::new(ledger, StoreConfig::default());
        contract.invoke("reset_indexes", &[]).expect("reset");
        for (key, name) in [("c1", "Acme"), ("c2", "Beta")] {
            let payload = format!(r#"{{"name":"{name}"}}"#);
            contract
                .invoke("add_company", &[key.to_string(), payload])
                .expect("add");
        }
    }

    let reopened = SqliteLedger::open(&db_path).expect("reopen");
    let store = IndexedStore::new(reopened, StoreConfig::default());
    let listed: Vec<Company> = store.list_records(COMPANIES_INDEX).expect("list");
    assert_eq!(listed, vec![Company::named("Acme"), Company::named("Beta")]);
    assert_eq!(store.read_index(COMPANIES_INDEX).expect("index").keys(), ["c1", "c2"]);
}

#[test]
fn sqlite_get_distinguishes_missing_keys() {
    let mut ledger = SqliteLedger::open_in_memory().expect("open");
    assert_eq!(ledger.get("k").expect("get"), None);

    ledger.put("k", b"").expect("put");
    assert_eq!(ledger.get("k").expect("get"), Some(Vec::new()));

    ledger.put("k", b"v2").expect("put");
    assert_eq!(ledger.get("k").expect("get"), Some(b"v2".to_vec()));
}

#[test]
fn sqlite_batch_commits_all_writes() {
    let mut ledger = SqliteLedger::open_in_memory().expect("open");
    ledger
        .put_batch(&[
            ("_companies".to_string(), br#"["c1"]"#.to_vec()),
            ("c1".to_string(), br#"{"name":"Acme"}"#.to_vec()),
        ])
        .expect("batch");

    assert_eq!(ledger.keys().expect("keys"), vec!["_companies", "c1"]);
}

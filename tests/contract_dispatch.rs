use serde_json::Value;

use ledgerdex::{
    config::StoreConfig,
    contract::{CompanyContract, ContractError},
    core::store::{ReadCause, StoreError},
    ledger::memory::MemoryLedger,
    op::{Operation, Surface},
};

fn args(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn contract() -> CompanyContract<MemoryLedger> {
    let mut contract = CompanyContract::new(MemoryLedger::new(), StoreConfig::default());
    contract.invoke("init", &[]).expect("init");
    contract.invoke("reset_indexes", &[]).expect("reset");
    contract
}

#[test]
fn three_companies_list_in_index_order() {
    let mut contract = contract();
    for (key, payload) in [
        ("c1", r#"{"name":"Acme"}"#),
        ("c2", r#"{"name":"Beta"}"#),
        ("c3", r#"{"name":"Gamma"}"#),
    ] {
        let out = contract.invoke("add_company", &args(&[key, payload])).expect("add");
        assert_eq!(out, None);
    }

    let out = contract
        .query("get_all_companies", &[])
        .expect("query")
        .expect("payload");
    assert_eq!(
        String::from_utf8(out).expect("utf8"),
        r#"[{"name":"Acme"},{"name":"Beta"},{"name":"Gamma"}]"#
    );
}

#[test]
fn get_company_returns_raw_payload() {
    let mut contract = contract();
    let payload = r#"{"name":"Acme","city":"Utrecht"}"#;
    contract.invoke("add_company", &args(&["c1", payload])).expect("add");

    let out = contract.query("get_company", &args(&["c1"])).expect("query");
    assert_eq!(out.as_deref(), Some(payload.as_bytes()));
}

#[test]
fn get_all_on_empty_index_is_empty_array() {
    let mut contract = contract();
    let out = contract.query("get_all_companies", &[]).expect("query");
    assert_eq!(out.as_deref(), Some(&b"[]"[..]));
}

#[test]
fn extra_company_fields_are_kept_in_listing() {
    let mut contract = contract();
    contract
        .invoke("add_company", &args(&["c1", r#"{"name":"Acme","size":3}"#]))
        .expect("add");

    let out = contract.query("get_all_companies", &[]).expect("query").expect("payload");
    let listed: Value = serde_json::from_slice(&out).expect("json");
    assert_eq!(listed, serde_json::json!([{ "name": "Acme", "size": 3 }]));
}

#[test]
fn unknown_functions_fail_on_both_surfaces() {
    let mut contract = contract();

    let err = contract.invoke("delete_company", &[]).unwrap_err();
    assert!(matches!(
        err,
        ContractError::UnknownOperation { surface: Surface::Invoke, ref function }
            if function == "delete_company"
    ));

    let err = contract.query("add_company", &args(&["c1", "{}"])).unwrap_err();
    assert!(matches!(err, ContractError::UnknownOperation { surface: Surface::Query, .. }));

    let err = contract.invoke("get_company", &args(&["c1"])).unwrap_err();
    assert!(matches!(err, ContractError::UnknownOperation { surface: Surface::Invoke, .. }));
}

#[test]
fn missing_arguments_are_rejected_without_side_effects() {
    let mut contract = contract();
    let err = contract.invoke("add_company", &args(&["c1"])).unwrap_err();
    assert!(matches!(
        err,
        ContractError::MissingArgument { function: "add_company", position: 1 }
    ));
    assert!(contract.store().read_index("_companies").expect("index").is_empty());

    let err = contract.query("get_company", &[]).unwrap_err();
    assert!(matches!(err, ContractError::MissingArgument { position: 0, .. }));
}

#[test]
fn get_company_on_missing_key_is_record_read_error() {
    let mut contract = contract();
    let err = contract.query("get_company", &args(&["nope"])).unwrap_err();
    assert!(matches!(
        err,
        ContractError::Store(StoreError::RecordRead { cause: ReadCause::NotFound, .. })
    ));
}

#[test]
fn reset_indexes_forgets_companies_but_not_payloads() {
    let mut contract = contract();
    contract
        .invoke("add_company", &args(&["c1", r#"{"name":"Acme"}"#]))
        .expect("add");
    contract.invoke("reset_indexes", &[]).expect("reset");

    let all = contract.query("get_all_companies", &[]).expect("query");
    assert_eq!(all.as_deref(), Some(&b"[]"[..]));
    let one = contract.query("get_company", &args(&["c1"])).expect("query");
    assert_eq!(one.as_deref(), Some(&br#"{"name":"Acme"}"#[..]));
}

#[test]
fn call_returns_parsed_operation_with_output() {
    let mut contract = contract();
    let (op, out) = contract
        .call(Surface::Invoke, "add_company", &args(&["c1", r#"{"name":"Acme"}"#]))
        .expect("add");
    assert_eq!(
        op,
        Operation::AddCompany {
            key: "c1".to_string(),
            payload: r#"{"name":"Acme"}"#.to_string(),
        }
    );
    assert_eq!(out, None);

    let (op, out) = contract
        .call(Surface::Query, "get_company", &args(&["c1"]))
        .expect("get");
    assert_eq!(op, Operation::GetCompany { key: "c1".to_string() });
    assert_eq!(out.as_deref(), Some(&br#"{"name":"Acme"}"#[..]));
}

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use ledgerdex::{
    company::Company,
    config::StoreConfig,
    core::store::IndexedStore,
    ledger::memory::MemoryLedger,
    types::{COMPANIES_INDEX, MAPP_CODES_INDEX},
};

fn payload(i: u64) -> Vec<u8> {
    format!(r#"{{"name":"Company {i}","seq":{i}}}"#).into_bytes()
}

fn filled_store(n: u64) -> IndexedStore<MemoryLedger> {
    let mut store = IndexedStore::new(MemoryLedger::new(), StoreConfig::default());
    store.reset_all().expect("reset");
    for i in 0..n {
        store
            .add_record(COMPANIES_INDEX, &format!("c{i}"), &payload(i))
            .expect("add");
    }
    store
}

fn bench_add_records(c: &mut Criterion) {
    c.bench_function("store_add_1k", |b| {
        b.iter(|| filled_store(1_000));
    });
}

fn bench_generated_appends(c: &mut Criterion) {
    c.bench_function("store_append_generated_1k", |b| {
        b.iter(|| {
            let mut store = IndexedStore::new(MemoryLedger::new(), StoreConfig::default());
            for _ in 0..1_000 {
                let _ = store
                    .append_key(MAPP_CODES_INDEX, "code", true)
                    .expect("append");
            }
        });
    });
}

fn bench_list_records(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_records");

    for n in [10u64, 100u64, 1000u64] {
        let store = filled_store(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &store, |b, store| {
            b.iter(|| {
                let _: Vec<Company> = store.list_records(COMPANIES_INDEX).expect("list");
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_add_records, bench_generated_appends, bench_list_records);
criterion_main!(benches);

//! # Trade-Ledger Benchmarks
//!
//! | Operation | Cost |
//! |-----------|------|
//! | Fraud screen | full scan of the fraud index |
//! | Party query | full scan of the agreement index |
//! | Settling payment update | one account read, one batch write |
//! | Dispatch | routing plus event publication |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ledger_runtime::config::LedgerConfig;
use ledger_runtime::LedgerRuntime;
use tl_01_record_store::{shared, InMemoryKVStore, KeyValueStore};
use tl_02_fraud_registry::FraudList;
use tl_03_agreement_workflow::{
    Agreement, AgreementWorkflowApi, AgreementWorkflowService, PartyField, AGREEMENT_FIELDS,
};
use tl_04_payment_settlement::{Payment, PaymentSettlementApi, PaymentSettlementService};

fn agreement_args(id: &str, buyer: &str) -> Vec<String> {
    let mut args: Vec<String> = AGREEMENT_FIELDS.iter().map(|f| f.to_string()).collect();
    args[0] = id.to_string();
    args[3] = buyer.to_string();
    args[13] = "5000".to_string();
    for sign in &mut args[20..24] {
        *sign = "false".to_string();
    }
    args[24] = "Books".to_string();
    args
}

fn agreement(id: &str, buyer: &str) -> Agreement {
    Agreement::from_args(&agreement_args(id, buyer)).unwrap()
}

fn payment_args(id: &str, signed: bool) -> Vec<String> {
    [
        id,
        "A1",
        "GoodCo",
        "SellCo",
        "965832147012",
        "741258963512",
        "12.34",
        "2024-03-02",
        "Approved",
        "2024-04-01",
        if signed { "true" } else { "false" },
        "FirstBank",
        "SecondBank",
    ]
    .map(String::from)
    .to_vec()
}

// ============================================================================
// TL-02: Fraud screen
// ============================================================================

fn bench_fraud_screen(c: &mut Criterion) {
    let mut group = c.benchmark_group("tl-02-fraud-screen");

    for size in [10usize, 100, 1_000] {
        let mut store = InMemoryKVStore::new();
        for i in 0..size {
            FraudList::register(&mut store, &format!("F{i}"), &format!("Fraudster {i}")).unwrap();
        }

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("is_listed_miss", size), &store, |b, store| {
            b.iter(|| black_box(FraudList::is_listed(store, "GoodCo").unwrap()))
        });
    }

    group.finish();
}

// ============================================================================
// TL-03: Agreement index scans
// ============================================================================

fn bench_agreement_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("tl-03-agreement-queries");

    for size in [10usize, 100, 1_000] {
        let service = AgreementWorkflowService::new(shared(InMemoryKVStore::new()));
        for i in 0..size {
            let buyer = if i % 10 == 0 { "GoodCo" } else { "OtherCo" };
            service.create_agreement(agreement(&format!("A{i}"), buyer)).unwrap();
        }

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("by_buyer", size), &service, |b, service| {
            b.iter(|| black_box(service.agreements_by(PartyField::Buyer, "GoodCo").unwrap()))
        });
        group.bench_with_input(BenchmarkId::new("all", size), &service, |b, service| {
            b.iter(|| black_box(service.all_agreements().unwrap()))
        });
    }

    group.finish();
}

fn bench_agreement_update(c: &mut Criterion) {
    let service = AgreementWorkflowService::new(shared(InMemoryKVStore::new()));
    service.create_agreement(agreement("A1", "GoodCo")).unwrap();

    c.bench_function("tl-03-update-with-auto-approval", |b| {
        b.iter(|| black_box(service.update_agreement(agreement("A1", "GoodCo")).unwrap()))
    });
}

// ============================================================================
// TL-04: Settlement
// ============================================================================

fn bench_settlement(c: &mut Criterion) {
    let mut group = c.benchmark_group("tl-04-settlement");
    let store = shared(InMemoryKVStore::new());
    let service = PaymentSettlementService::new(store.clone());
    let (_, seed) = service.initialize_ops("1000000000.00").unwrap();
    store.lock().atomic_batch_write(seed).unwrap();
    let create = Payment::from_update_args(&payment_args("P1", false)).unwrap();
    service.create_payment(create).unwrap();

    let unsigned = Payment::from_update_args(&payment_args("P1", false)).unwrap();
    group.bench_function("update_unsigned", |b| {
        b.iter(|| black_box(service.update_payment(unsigned.clone()).unwrap()))
    });

    let signed = Payment::from_update_args(&payment_args("P1", true)).unwrap();
    group.bench_function("update_settling", |b| {
        b.iter(|| black_box(service.update_payment(signed.clone()).unwrap()))
    });

    group.finish();
}

// ============================================================================
// Runtime: dispatch
// ============================================================================

fn bench_dispatch(c: &mut Criterion) {
    let ledger = LedgerRuntime::with_store(InMemoryKVStore::new(), &LedgerConfig::default()).unwrap();
    ledger.invoke("create_agreement", agreement_args("A1", "GoodCo")).unwrap();

    c.bench_function("runtime-dispatch-query", |b| {
        b.iter(|| black_box(ledger.invoke("getAgreement_byID", ["A1"]).unwrap()))
    });
    c.bench_function("runtime-dispatch-unknown", |b| {
        b.iter(|| black_box(ledger.invoke("mint", ["A1"]).is_err()))
    });
}

criterion_group!(
    benches,
    bench_fraud_screen,
    bench_agreement_queries,
    bench_agreement_update,
    bench_settlement,
    bench_dispatch
);
criterion_main!(benches);

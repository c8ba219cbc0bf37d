//! # Event Emission
//!
//! Observers subscribe to the runtime's bus and see one `evtsender` per
//! completed write and one `errEvent` per failed invocation. Queries are
//! silent.

use super::fixtures::*;
use shared_bus::{EventFilter, EventTopic, ERROR_EVENT, SUCCESS_EVENT};
use std::time::Duration;
use tokio::time::timeout;

#[tokio::test]
async fn test_write_emits_evtsender() {
    let ledger = runtime("100000.00");
    let mut agreements = ledger.subscribe(EventFilter::topics(vec![EventTopic::Agreements]));

    ledger
        .invoke("create_agreement", agreement_args("A1", "GoodCo", "SellCo"))
        .unwrap();

    let event = timeout(Duration::from_millis(100), agreements.recv())
        .await
        .expect("timeout waiting for event")
        .expect("bus closed");

    assert_eq!(event.name(), SUCCESS_EVENT);
    assert_eq!(event.function(), "create_agreement");
    let payload = event.payload_json();
    assert_eq!(payload["message"], "Agreement created successfully");
    assert_eq!(payload["code"], "200");
    assert_eq!(payload["agreementID"], "A1");
}

#[tokio::test]
async fn test_failure_emits_err_event() {
    let ledger = runtime("100000.00");
    let mut failures = ledger.subscribe(EventFilter::failures());

    ledger.invoke("update_fraud_list", ["F1", "EvilCo"]).unwrap();
    let _ = ledger.invoke("create_agreement", agreement_args("A1", "EvilCo", "SellCo"));

    let event = timeout(Duration::from_millis(100), failures.recv())
        .await
        .expect("timeout waiting for event")
        .expect("bus closed");

    assert_eq!(event.name(), ERROR_EVENT);
    assert_eq!(event.topic(), EventTopic::Agreements);
    let payload = event.payload_json();
    assert_eq!(payload["code"], "503");
    assert_eq!(payload["error_type"], "FraudRejected");
    assert_eq!(
        payload["message"],
        "Buyer name exists in Fraud list. So, Agreement A1 auto-rejected by System."
    );
    assert!(failures.drain().is_empty());
}

#[tokio::test]
async fn test_queries_are_silent() {
    let ledger = runtime("100000.00");
    ledger
        .invoke("create_agreement", agreement_args("A1", "GoodCo", "SellCo"))
        .unwrap();
    let mut all = ledger.subscribe(EventFilter::all());

    ledger.invoke("getAgreement_byID", ["A1"]).unwrap();
    ledger.invoke("get_AllAgreement", placeholder()).unwrap();
    ledger.invoke("getAccountDetails", placeholder()).unwrap();

    assert!(all.drain().is_empty());
}

#[tokio::test]
async fn test_events_follow_invocation_order() {
    let ledger = runtime("1000.00");
    let mut all = ledger.subscribe(EventFilter::all());

    ledger
        .invoke("createPayment", payment_create_args("P1", "A1", "250"))
        .unwrap();
    ledger
        .invoke("updatePayment", payment_update_args("P1", "A1", "250", true))
        .unwrap();
    let _ = ledger.invoke("deletePayment", Vec::<String>::new());
    let _ = ledger.invoke("closeLedger", ["now"]);

    let events = all.drain();
    let seen: Vec<_> = events
        .iter()
        .map(|e| (e.name(), e.function().to_string(), e.topic()))
        .collect();
    assert_eq!(
        seen,
        vec![
            (SUCCESS_EVENT, "createPayment".to_string(), EventTopic::Payments),
            (SUCCESS_EVENT, "updatePayment".to_string(), EventTopic::Payments),
            (ERROR_EVENT, "deletePayment".to_string(), EventTopic::Payments),
            (ERROR_EVENT, "closeLedger".to_string(), EventTopic::Runtime),
        ]
    );
}

#[tokio::test]
async fn test_init_reported_on_runtime_topic() {
    let ledger = runtime("1000.00");
    let mut runtime_events = ledger.subscribe(EventFilter::topics(vec![EventTopic::Runtime]));

    ledger.invoke("init", ["2000"]).unwrap();
    ledger
        .invoke("create_agreement", agreement_args("A1", "GoodCo", "SellCo"))
        .unwrap();

    let events = runtime_events.drain();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].name(), SUCCESS_EVENT);
    assert_eq!(
        events[0].payload_json()["message"],
        "Trade ledger deployed successfully"
    );
}

//! # Ledger Properties
//!
//! | Property | Checked by |
//! |----------|------------|
//! | A second create on a live key fails and changes nothing | `test_create_is_unique` |
//! | The index lists exactly the live keys | `test_index_tracks_live_keys` |
//! | A fraud-listed counterparty blocks creation | `test_fraud_gate` |
//! | Auto-approval sets the bank signatures | `test_auto_approval` |
//! | Bank-signed payments move the amount | `test_settlement` |
//! | Every stored field reads back unchanged | `test_round_trip` |
//! | Record kinds keep separate keyspaces | `test_kinds_share_ids` |

use super::fixtures::*;
use serde_json::Value;
use shared_types::errors::ErrorKind;
use std::collections::BTreeSet;
use tl_03_agreement_workflow::AGREEMENT_FIELDS;

fn listed_agreements(ledger: &TestRuntime) -> BTreeSet<String> {
    let all = ledger.invoke("get_AllAgreement", placeholder()).unwrap();
    all.document()
        .unwrap()
        .as_object()
        .unwrap()
        .keys()
        .cloned()
        .collect()
}

fn agreement_doc(ledger: &TestRuntime, id: &str) -> Value {
    ledger
        .invoke("getAgreement_byID", [id])
        .unwrap()
        .document()
        .unwrap()
        .clone()
}

#[test]
fn test_create_is_unique() {
    let ledger = runtime("100000.00");
    ledger
        .invoke("create_agreement", agreement_args("A1", "GoodCo", "SellCo"))
        .unwrap();
    let before = agreement_doc(&ledger, "A1");

    let err = ledger
        .invoke("create_agreement", agreement_args("A1", "OtherCo", "OtherSeller"))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AlreadyExists);
    assert_eq!(agreement_doc(&ledger, "A1"), before);

    ledger.invoke("update_fraud_list", ["F1", "EvilCo"]).unwrap();
    let err = ledger
        .invoke("update_fraud_list", ["F1", "SomeoneElse"])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AlreadyExists);

    ledger
        .invoke("createPayment", payment_create_args("P1", "A1", "10"))
        .unwrap();
    let err = ledger
        .invoke("createPayment", payment_create_args("P1", "A1", "20"))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AlreadyExists);
}

#[test]
fn test_index_tracks_live_keys() {
    let ledger = runtime("100000.00");
    let mut live = BTreeSet::new();

    let steps: [(&str, &str); 8] = [
        ("create", "A1"),
        ("create", "A2"),
        ("create", "A3"),
        ("delete", "A2"),
        ("delete", "A2"),
        ("create", "A2"),
        ("delete", "A1"),
        ("delete", "A9"),
    ];

    for (op, id) in steps {
        match op {
            "create" => {
                ledger
                    .invoke("create_agreement", agreement_args(id, "GoodCo", "SellCo"))
                    .unwrap();
                live.insert(id.to_string());
            }
            _ => {
                ledger.invoke("delete_agreement", [id]).unwrap();
                live.remove(id);
            }
        }
        assert_eq!(listed_agreements(&ledger), live, "after {op} {id}");
    }
}

#[test]
fn test_fraud_gate() {
    let ledger = runtime("100000.00");

    ledger
        .invoke("create_agreement", agreement_args("A1", "Acme", "SellCo"))
        .unwrap();

    ledger.invoke("update_fraud_list", ["F1", "Acme"]).unwrap();

    let err = ledger
        .invoke("create_agreement", agreement_args("A2", "Acme", "SellCo"))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::FraudRejected);

    let err = ledger
        .invoke("create_agreement", agreement_args("A3", "GoodCo", "Acme"))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::FraudRejected);
    assert!(err.to_string().starts_with("Seller name exists in Fraud list"));

    assert_eq!(listed_agreements(&ledger), BTreeSet::from(["A1".to_string()]));
}

#[test]
fn test_auto_approval() {
    let ledger = runtime("100000.00");
    let mut args = agreement_args("A1", "GoodCo", "SellCo");
    set(&mut args, "industry", "Books");
    set(&mut args, "total_value", "5000");
    ledger.invoke("create_agreement", args.clone()).unwrap();

    ledger.invoke("update_agreement", args).unwrap();

    let doc = agreement_doc(&ledger, "A1");
    assert_eq!(doc["buyerBank_sign"], "true");
    assert_eq!(doc["sellerBank_sign"], "true");
    assert_eq!(doc["seller_sign"], "false");
    // (true, false, true) matches no status rule.
    assert_eq!(doc["agreement_status"], "Created");
}

#[test]
fn test_auto_approval_above_limit() {
    let ledger = runtime("100000.00");
    let mut args = agreement_args("A1", "GoodCo", "SellCo");
    set(&mut args, "industry", "Mobiles & Tablets");
    set(&mut args, "total_value", "10001");
    ledger.invoke("create_agreement", args.clone()).unwrap();

    ledger.invoke("update_agreement", args).unwrap();

    let doc = agreement_doc(&ledger, "A1");
    assert_eq!(doc["buyerBank_sign"], "false");
    assert_eq!(doc["sellerBank_sign"], "true");
}

#[test]
fn test_settlement() {
    let ledger = runtime("1000.00");
    ledger
        .invoke("createPayment", payment_create_args("P1", "A1", "250.00"))
        .unwrap();

    ledger
        .invoke("updatePayment", payment_update_args("P1", "A1", "250.00", true))
        .unwrap();

    let account = ledger.invoke("getAccountDetails", placeholder()).unwrap();
    let account = account.document().unwrap();
    assert_eq!(account["buyerAccountBalance"], "750.00");
    assert_eq!(account["sellerAccountBalance"], "1250.00");
}

#[test]
fn test_round_trip() {
    let ledger = runtime("100000.00");
    let mut args = agreement_args("A1", "GoodCo", "SellCo");
    set(&mut args, "buyer_sign", "true");
    set(&mut args, "tc_text", "Net 30, FOB \"Shenzhen\"");
    set(&mut args, "item_name", "Résistance 10kΩ");
    ledger.invoke("create_agreement", args.clone()).unwrap();

    let doc = agreement_doc(&ledger, "A1");
    let fields = doc.as_object().unwrap();
    assert_eq!(fields.len(), AGREEMENT_FIELDS.len());
    for (field, value) in AGREEMENT_FIELDS.iter().zip(&args) {
        assert_eq!(fields[*field], Value::String(value.clone()), "field {field}");
    }
}

#[test]
fn test_kinds_share_ids() {
    let ledger = runtime("1000.00");

    ledger
        .invoke("create_agreement", agreement_args("1", "GoodCo", "SellCo"))
        .unwrap();
    ledger
        .invoke("createPayment", payment_create_args("1", "1", "100.00"))
        .unwrap();
    ledger
        .invoke("updatePayment", payment_update_args("1", "1", "100.00", true))
        .unwrap();

    assert_eq!(agreement_doc(&ledger, "1")["buyer_name"], "GoodCo");
    let payment = ledger.invoke("getPaymentByID", ["1"]).unwrap();
    assert_eq!(payment.document().unwrap()["agreementId"], "1");

    ledger.invoke("update_fraud_list", ["X1", "EvilCo"]).unwrap();
    let err = ledger.invoke("getAgreement_byID", ["X1"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    ledger
        .invoke("create_agreement", agreement_args("X1", "GoodCo", "SellCo"))
        .unwrap();
    ledger.invoke("delete_agreement", ["X1"]).unwrap();

    let fraud = ledger.invoke("get_fraud_details", ["EvilCo"]).unwrap();
    assert_eq!(fraud.document().unwrap()["X1"]["fraudName"], "EvilCo");
    assert_eq!(listed_agreements(&ledger), BTreeSet::from(["1".to_string()]));
}

//! Rejected invocations: the error kind and message callers see, and the
//! state left behind.

use super::fixtures::*;
use serde_json::json;
use shared_types::errors::ErrorKind;

#[test]
fn test_wrong_arity_names_expected_count() {
    let ledger = runtime("100000.00");
    let mut args = agreement_args("A1", "GoodCo", "SellCo");
    args.pop();

    let err = ledger.invoke("create_agreement", args).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(
        err.to_string(),
        "Invalid argument: Incorrect number of arguments for create_agreement. \
         Expecting 26 arguments, got 25."
    );

    let err = ledger.invoke("getAgreement_byID", Vec::<String>::new()).unwrap_err();
    assert!(err.to_string().contains("Expecting 1 argument, got 0."));

    let mut short = payment_update_args("P1", "A1", "10", false);
    short.truncate(11);
    let err = ledger.invoke("updatePayment", short).unwrap_err();
    assert!(err.to_string().contains("Expecting 13 arguments, got 11."));

    let mut short = payment_create_args("P1", "A1", "10");
    short.truncate(11);
    let err = ledger.invoke("createPayment", short).unwrap_err();
    assert!(err.to_string().contains("Expecting 13 arguments, got 11."));

    let all = ledger.invoke("get_AllAgreement", placeholder()).unwrap();
    assert_eq!(all.document().unwrap(), &json!({}));
}

#[test]
fn test_unknown_function() {
    let ledger = runtime("100000.00");

    let err = ledger.invoke("getAgreement_byBroker", ["X"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert!(err
        .to_string()
        .contains("Received unknown function invocation: getAgreement_byBroker"));
}

#[test]
fn test_bad_sign_flag_rejected() {
    let ledger = runtime("100000.00");
    let mut args = agreement_args("A1", "GoodCo", "SellCo");
    set(&mut args, "seller_sign", "yes");

    let err = ledger.invoke("create_agreement", args).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(ledger.invoke("getAgreement_byID", ["A1"]).unwrap_err().kind(), ErrorKind::NotFound);
}

#[test]
fn test_update_requires_existing_record() {
    let ledger = runtime("100000.00");

    let err = ledger
        .invoke("update_agreement", agreement_args("A404", "GoodCo", "SellCo"))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let err = ledger
        .invoke("updatePayment", payment_update_args("P404", "A1", "10", true))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn test_non_integer_total_value_blocks_update() {
    let ledger = runtime("100000.00");
    let args = agreement_args("A1", "GoodCo", "SellCo");
    ledger.invoke("create_agreement", args.clone()).unwrap();

    let mut bad = args;
    set(&mut bad, "total_value", "5k");
    set(&mut bad, "buyer_name", "Renamed");
    let err = ledger.invoke("update_agreement", bad).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);

    let doc = ledger.invoke("getAgreement_byID", ["A1"]).unwrap();
    assert_eq!(doc.document().unwrap()["buyer_name"], "GoodCo");
}

#[test]
fn test_bad_settlement_amount_writes_nothing() {
    let ledger = runtime("1000.00");
    ledger
        .invoke("createPayment", payment_create_args("P1", "A1", "100"))
        .unwrap();

    let err = ledger
        .invoke("updatePayment", payment_update_args("P1", "A1", "a hundred", true))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);

    let payment = ledger.invoke("getPaymentByID", ["P1"]).unwrap();
    assert_eq!(payment.document().unwrap()["amountTransferred"], "100");
    let account = ledger.invoke("getAccountDetails", placeholder()).unwrap();
    assert_eq!(account.document().unwrap()["buyerAccountBalance"], "1000.00");
}

#[test]
fn test_approval_status_for_stranger() {
    let ledger = runtime("100000.00");
    ledger
        .invoke("create_agreement", agreement_args("A1", "GoodCo", "SellCo"))
        .unwrap();

    let err = ledger.invoke("getApprovalStatus", ["Nobody", "A1"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let err = ledger.invoke("getApprovalStatus", ["GoodCo", "A2"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn test_empty_fraud_details() {
    let ledger = runtime("100000.00");
    ledger.invoke("update_fraud_list", ["F1", "EvilCo"]).unwrap();

    let err = ledger.invoke("get_fraud_details", ["GoodCo"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let found = ledger.invoke("get_fraud_details", ["EvilCo"]).unwrap();
    assert_eq!(found.document().unwrap()["F1"]["fraudName"], "EvilCo");
}

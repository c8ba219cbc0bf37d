//! # Trade Flow
//!
//! A trade from fraud screening to settlement, every step a named
//! invocation through the runtime dispatcher:
//!
//! ```text
//! update_fraud_list ──→ create_agreement (rejected / accepted)
//!                              │
//!                       update_agreement × n ──→ status derivation
//!                              │
//!                       createPayment ──→ updatePayment (bank-signed)
//!                              │
//!                       getAccountDetails ──→ balances moved
//! ```

use super::fixtures::*;
use serde_json::json;
use shared_types::errors::ErrorKind;

#[test]
fn test_fraud_screened_agreement_lifecycle() {
    let ledger = runtime("100000.00");

    ledger.invoke("update_fraud_list", ["F1", "EvilCo"]).unwrap();

    let err = ledger
        .invoke("create_agreement", agreement_args("A1", "EvilCo", "SellCo"))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::FraudRejected);
    assert_eq!(
        err.to_string(),
        "Buyer name exists in Fraud list. So, Agreement A1 auto-rejected by System."
    );

    let created = ledger
        .invoke("create_agreement", agreement_args("A1", "GoodCo", "SellCo"))
        .unwrap();
    assert_eq!(created.notice().unwrap().refs["agreementID"], "A1");

    let status = ledger.invoke("getApprovalStatus", ["GoodCo", "A1"]).unwrap();
    assert_eq!(
        status.document().unwrap(),
        &json!({"agreementId": "A1", "buyer_sign": "false"})
    );

    ledger.invoke("delete_agreement", ["A1"]).unwrap();

    let err = ledger.invoke("getAgreement_byID", ["A1"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(err.to_string(), "A1 Not Found.");
}

#[test]
fn test_signatures_drive_status() {
    let ledger = runtime("100000.00");
    let mut args = agreement_args("A2", "GoodCo", "SellCo");
    ledger.invoke("create_agreement", args.clone()).unwrap();

    set(&mut args, "buyerBank_sign", "true");
    ledger.invoke("update_agreement", args.clone()).unwrap();
    let doc = ledger.invoke("getAgreement_byID", ["A2"]).unwrap();
    assert_eq!(doc.document().unwrap()["agreement_status"], "Approved By Buyer Bank");

    set(&mut args, "seller_sign", "true");
    ledger.invoke("update_agreement", args.clone()).unwrap();
    let doc = ledger.invoke("getAgreement_byID", ["A2"]).unwrap();
    assert_eq!(doc.document().unwrap()["agreement_status"], "Approved By Seller");

    set(&mut args, "sellerBank_sign", "true");
    ledger.invoke("update_agreement", args).unwrap();
    let doc = ledger.invoke("getAgreement_byID", ["A2"]).unwrap();
    assert_eq!(doc.document().unwrap()["agreement_status"], "Approved By Seller Bank");

    let seller_view = ledger.invoke("getApprovalStatus", ["SellCo", "A2"]).unwrap();
    assert_eq!(seller_view.document().unwrap()["seller_sign"], "true");
    let bank_view = ledger.invoke("getApprovalStatus", ["SecondBank", "A2"]).unwrap();
    assert_eq!(bank_view.document().unwrap()["sellerBank_sign"], "true");
}

#[test]
fn test_party_queries_span_agreements() {
    let ledger = runtime("100000.00");
    ledger
        .invoke("create_agreement", agreement_args("A1", "GoodCo", "SellCo"))
        .unwrap();
    ledger
        .invoke("create_agreement", agreement_args("A2", "GoodCo", "OtherCo"))
        .unwrap();
    ledger
        .invoke("create_agreement", agreement_args("A3", "ThirdCo", "SellCo"))
        .unwrap();

    let by_buyer = ledger.invoke("getAgreement_byBuyer", ["GoodCo"]).unwrap();
    let by_buyer = by_buyer.document().unwrap().as_object().unwrap();
    assert_eq!(by_buyer.len(), 2);
    assert!(by_buyer.contains_key("A1") && by_buyer.contains_key("A2"));

    let by_seller = ledger.invoke("getAgreement_bySeller", ["SellCo"]).unwrap();
    assert_eq!(by_seller.document().unwrap().as_object().unwrap().len(), 2);

    let by_shipper = ledger.invoke("getAgreement_byShipper", ["FastShip"]).unwrap();
    assert_eq!(by_shipper.document().unwrap().as_object().unwrap().len(), 3);

    let by_port = ledger
        .invoke("getAgreement_byPortAuthority", ["HarborAuthority"])
        .unwrap();
    assert_eq!(by_port.document().unwrap().as_object().unwrap().len(), 3);

    let err = ledger.invoke("getAgreement_byBuyerBank", ["NoBank"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn test_payment_settles_against_accounts() {
    let ledger = runtime("1000.00");
    ledger
        .invoke("create_agreement", agreement_args("A1", "GoodCo", "SellCo"))
        .unwrap();

    let created = ledger
        .invoke("createPayment", payment_create_args("P1", "A1", "250.00"))
        .unwrap();
    assert_eq!(created.notice().unwrap().refs["paymentID"], "P1");

    // Unsigned updates move nothing.
    ledger
        .invoke("updatePayment", payment_update_args("P1", "A1", "250.00", false))
        .unwrap();
    let account = ledger.invoke("getAccountDetails", placeholder()).unwrap();
    assert_eq!(account.document().unwrap()["buyerAccountBalance"], "1000.00");

    ledger
        .invoke("updatePayment", payment_update_args("P1", "A1", "250.00", true))
        .unwrap();
    let account = ledger.invoke("getAccountDetails", placeholder()).unwrap();
    assert_eq!(
        account.document().unwrap(),
        &json!({
            "buyerAccountNumber": "965832147012",
            "buyerAccountBalance": "750.00",
            "sellerAccountNumber": "741258963512",
            "sellerAccountBalance": "1250.00",
        })
    );

    let payment = ledger.invoke("getPaymentByID", ["P1"]).unwrap();
    let payment = payment.document().unwrap();
    assert_eq!(payment["buyerBank_sign"], "true");
    assert_eq!(payment["paymentStatus"], "Approved");

    let by_buyer = ledger.invoke("getPaymentByBuyer", ["GoodCo"]).unwrap();
    assert!(by_buyer.document().unwrap().get("P1").is_some());

    ledger.invoke("deletePayment", ["P1"]).unwrap();
    let all = ledger.invoke("getAllPayment", placeholder()).unwrap();
    assert_eq!(all.document().unwrap(), &json!({}));
}

#[test]
fn test_init_redeploys_ledger() {
    let ledger = runtime("1000.00");
    ledger
        .invoke("create_agreement", agreement_args("A1", "GoodCo", "SellCo"))
        .unwrap();
    ledger.invoke("update_fraud_list", ["F1", "EvilCo"]).unwrap();
    ledger
        .invoke("createPayment", payment_create_args("P1", "A1", "10"))
        .unwrap();

    let deployed = ledger.invoke("init", ["500"]).unwrap();
    assert_eq!(
        deployed.notice().unwrap().message,
        "Trade ledger deployed successfully"
    );

    for query in ["get_AllAgreement", "get_fraud_list", "getAllPayment"] {
        let doc = ledger.invoke(query, placeholder()).unwrap();
        assert_eq!(doc.document().unwrap(), &json!({}), "{query} not emptied");
    }
    let account = ledger.invoke("getAccountDetails", placeholder()).unwrap();
    assert_eq!(account.document().unwrap()["sellerAccountBalance"], "500.00");
}

//! Positional argument builders shared by the flows.

use ledger_runtime::config::LedgerConfig;
use ledger_runtime::LedgerRuntime;
use tl_01_record_store::InMemoryKVStore;
use tl_03_agreement_workflow::AGREEMENT_FIELDS;

pub type TestRuntime = LedgerRuntime<InMemoryKVStore>;

/// A fresh in-memory ledger seeded with `seed`.
pub fn runtime(seed: &str) -> TestRuntime {
    let mut config = LedgerConfig::default();
    config.bootstrap.seed_balance = seed.to_string();
    LedgerRuntime::with_store(InMemoryKVStore::new(), &config).unwrap()
}

fn position(field: &str) -> usize {
    AGREEMENT_FIELDS
        .iter()
        .position(|f| *f == field)
        .unwrap_or_else(|| panic!("unknown agreement field {field}"))
}

/// The 26 arguments of an unsigned Electronics agreement worth 5000.
pub fn agreement_args(id: &str, buyer: &str, seller: &str) -> Vec<String> {
    let mut args: Vec<String> = AGREEMENT_FIELDS
        .iter()
        .map(|field| format!("{field} of {id}"))
        .collect();
    set(&mut args, "agreementId", id);
    set(&mut args, "agreement_status", "Created");
    set(&mut args, "buyer_name", buyer);
    set(&mut args, "seller_name", seller);
    set(&mut args, "shipper_name", "FastShip");
    set(&mut args, "bb_name", "FirstBank");
    set(&mut args, "sb_name", "SecondBank");
    set(&mut args, "agreementPortAuth_name", "HarborAuthority");
    set(&mut args, "total_value", "5000");
    set(&mut args, "industry", "Electronics");
    for sign in ["buyer_sign", "buyerBank_sign", "seller_sign", "sellerBank_sign"] {
        set(&mut args, sign, "false");
    }
    args
}

/// Overwrite one named field in agreement arguments.
pub fn set(args: &mut [String], field: &str, value: &str) {
    args[position(field)] = value.to_string();
}

/// The 13 `createPayment` arguments. The trailing two are ignored.
pub fn payment_create_args(id: &str, agreement_id: &str, amount: &str) -> Vec<String> {
    [
        id,
        agreement_id,
        "GoodCo",
        "SellCo",
        amount,
        "2024-03-01",
        "Created",
        "2024-04-01",
        "false",
        "FirstBank",
        "SecondBank",
        "",
        "",
    ]
    .map(String::from)
    .to_vec()
}

/// The 13 `updatePayment` arguments.
pub fn payment_update_args(id: &str, agreement_id: &str, amount: &str, signed: bool) -> Vec<String> {
    [
        id,
        agreement_id,
        "GoodCo",
        "SellCo",
        "965832147012",
        "741258963512",
        amount,
        "2024-03-02",
        if signed { "Approved" } else { "Pending" },
        "2024-04-01",
        if signed { "true" } else { "false" },
        "FirstBank",
        "SecondBank",
    ]
    .map(String::from)
    .to_vec()
}

/// Placeholder argument for the list-all queries.
pub fn placeholder() -> [&'static str; 1] {
    [""]
}

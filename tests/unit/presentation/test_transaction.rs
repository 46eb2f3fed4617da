use extendz::presentation::transaction::Transaction;
use serde_json::json;

#[test]
fn transaction_type_key() {
    let transaction: Transaction =
        serde_json::from_value(json!({ "id": "tx_1", "type": "CREDIT" })).unwrap();
    assert_eq!(transaction.transaction_type, "CREDIT");

    let value = serde_json::to_value(&transaction).unwrap();
    assert_eq!(value["type"], "CREDIT");
    assert!(value.get("transactionType").is_none());
}

#[test]
fn settled_amount_follows_status() {
    let mut transaction = Transaction {
        status: "PENDING".to_string(),
        auth_billing_amount_cents: 2500,
        clearing_billing_amount_cents: 2450,
        ..Transaction::default()
    };
    assert_eq!(transaction.settled_amount_cents(), 2500);

    transaction.status = "CLEARED".to_string();
    assert_eq!(transaction.settled_amount_cents(), 2450);
}

#[test]
fn exchange_rates_are_fractional() {
    let transaction: Transaction =
        serde_json::from_value(json!({ "clearingExchangeRate": 0.98 })).unwrap();
    assert!((transaction.clearing_exchange_rate - 0.98).abs() < f64::EPSILON);
}

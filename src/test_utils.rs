use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::{parse_timestamp, Transaction, TransactionStore, TransactionType};

pub(crate) fn tx(
    id: &str,
    date: &str,
    amount: Decimal,
    tx_type: &str,
    merchant_name: &str,
) -> Transaction {
    Transaction {
        id: id.to_string(),
        date: parse_timestamp(date).unwrap(),
        amount: Some(amount),
        tx_type: TransactionType::from(tx_type),
        description: format!("Purchase {}", id),
        merchant_name: merchant_name.to_string(),
        card_type: "Visa".to_string(),
    }
}

/// Two January transactions and one in February.
pub(crate) fn sample_store() -> TransactionStore {
    TransactionStore::new(vec![
        tx("1", "2023-01-15", dec!(100), "debit", "SuperMart"),
        tx("2", "2023-01-20", dec!(50), "credit", "OnlineStore"),
        tx("3", "2023-02-01", dec!(200), "debit", "SuperMart"),
    ])
}

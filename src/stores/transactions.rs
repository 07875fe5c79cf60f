//! Append-only, in-memory transaction storage with lookups and filters.
//!
//! Every query is a linear scan in insertion order:
//! - Filters return matching transactions in store order
//! - Lookups return the first match or `None`
//! - Nothing is ever removed or updated once appended
//!
//! Aggregations over the same store live in [`crate::aggregates`].

use chrono::NaiveDateTime;
use log::debug;
use rust_decimal::Decimal;
use std::collections::HashSet;

use crate::{Transaction, TransactionType};

#[derive(Debug, Default, Clone)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
}

impl TransactionStore {
    pub fn new(transactions: impl IntoIterator<Item = Transaction>) -> Self {
        let transactions: Vec<Transaction> = transactions.into_iter().collect();
        debug!("Created store with {} transactions", transactions.len());
        Self { transactions }
    }

    /// Appends a transaction. Duplicate ids are accepted as-is.
    pub fn append(&mut self, transaction: Transaction) {
        debug!("Appending transaction {}", transaction.id);
        self.transactions.push(transaction);
    }

    /// All transactions in insertion order.
    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Distinct transaction types in the order they were first seen.
    pub fn unique_types(&self) -> Vec<&TransactionType> {
        let mut seen = HashSet::new();
        self.transactions
            .iter()
            .map(|tx| &tx.tx_type)
            .filter(|tx_type| seen.insert(*tx_type))
            .collect()
    }

    pub fn transactions_by_type(&self, tx_type: &TransactionType) -> Vec<&Transaction> {
        self.filter(|tx| &tx.tx_type == tx_type)
    }

    /// Transactions with `start <= date <= end`, compared with time of day.
    /// An inverted range matches nothing.
    pub fn transactions_in_date_range(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Vec<&Transaction> {
        self.filter(|tx| tx.date >= start && tx.date <= end)
    }

    pub fn transactions_by_merchant(&self, merchant_name: &str) -> Vec<&Transaction> {
        self.filter(|tx| tx.merchant_name == merchant_name)
    }

    /// Transactions with `min <= amount <= max`. Amounts that are not a
    /// number never match.
    pub fn transactions_by_amount_range(&self, min: Decimal, max: Decimal) -> Vec<&Transaction> {
        self.filter(|tx| matches!(tx.amount, Some(amount) if amount >= min && amount <= max))
    }

    pub fn transactions_before_date(&self, date: NaiveDateTime) -> Vec<&Transaction> {
        self.filter(|tx| tx.date < date)
    }

    /// First transaction with the given id.
    pub fn find_by_id(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|tx| tx.id == id)
    }

    pub fn descriptions(&self) -> Vec<&str> {
        self.transactions
            .iter()
            .map(|tx| tx.description.as_str())
            .collect()
    }

    fn filter<F>(&self, predicate: F) -> Vec<&Transaction>
    where
        F: Fn(&Transaction) -> bool,
    {
        self.transactions.iter().filter(|tx| predicate(tx)).collect()
    }
}

impl FromIterator<Transaction> for TransactionStore {
    fn from_iter<I: IntoIterator<Item = Transaction>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> FromIterator<&'a Transaction> for TransactionStore {
    fn from_iter<I: IntoIterator<Item = &'a Transaction>>(iter: I) -> Self {
        Self::new(iter.into_iter().cloned())
    }
}

impl Extend<Transaction> for TransactionStore {
    fn extend<I: IntoIterator<Item = Transaction>>(&mut self, iter: I) {
        for transaction in iter {
            self.append(transaction);
        }
    }
}

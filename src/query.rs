use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::{Transaction, TransactionStore, TransactionType};

/// A conjunction of optional filters with the same meaning as the matching
/// [`TransactionStore`] operations: exact type and merchant, inclusive
/// `from..=to`, strict `before`, inclusive amount bounds.
#[derive(Debug, Default, Clone)]
pub struct Query {
    pub tx_type: Option<TransactionType>,
    pub merchant_name: Option<String>,
    pub from: Option<NaiveDateTime>,
    pub to: Option<NaiveDateTime>,
    pub before: Option<NaiveDateTime>,
    pub min_amount: Option<Decimal>,
    pub max_amount: Option<Decimal>,
}

impl Query {
    pub fn is_empty(&self) -> bool {
        self.tx_type.is_none()
            && self.merchant_name.is_none()
            && self.from.is_none()
            && self.to.is_none()
            && self.before.is_none()
            && self.min_amount.is_none()
            && self.max_amount.is_none()
    }

    /// Whether `tx` passes every set filter. Once either amount bound is set,
    /// an amount that is not a number never matches.
    pub fn matches(&self, tx: &Transaction) -> bool {
        if let Some(tx_type) = &self.tx_type {
            if &tx.tx_type != tx_type {
                return false;
            }
        }
        if let Some(merchant_name) = &self.merchant_name {
            if &tx.merchant_name != merchant_name {
                return false;
            }
        }
        if self.from.map_or(false, |from| tx.date < from)
            || self.to.map_or(false, |to| tx.date > to)
            || self.before.map_or(false, |before| tx.date >= before)
        {
            return false;
        }
        if self.min_amount.is_some() || self.max_amount.is_some() {
            let min = self.min_amount.unwrap_or(Decimal::MIN);
            let max = self.max_amount.unwrap_or(Decimal::MAX);
            return matches!(tx.amount, Some(amount) if amount >= min && amount <= max);
        }
        true
    }

    /// Returns a new store holding the matching transactions in store order.
    /// Only the matches are cloned.
    pub fn apply(&self, store: &TransactionStore) -> TransactionStore {
        store.iter().filter(|tx| self.matches(tx)).collect()
    }
}

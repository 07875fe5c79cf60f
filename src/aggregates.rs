//! Totals, averages and frequency rankings over a [`TransactionStore`].
//!
//! Sums are `Option<Decimal>`: `Some(0)` for an empty selection and `None`
//! once any amount in the selection is not a number (or the sum overflows).

use chrono::{Datelike, NaiveDateTime};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

use crate::stores::{MonthKey, MonthlyCounts, TransactionStore};
use crate::{Error, Transaction, TransactionType};

/// Calendar filter for [`TransactionStore::total_amount_by_date`], from
/// loosest to tightest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFilter {
    All,
    Year(i32),
    YearMonth(i32, u32),
    Day(i32, u32, u32),
}

impl DateFilter {
    /// Builds a filter from optional components. Only a leading prefix of
    /// year, month, day is accepted.
    pub fn from_parts(
        year: Option<i32>,
        month: Option<u32>,
        day: Option<u32>,
    ) -> Result<Self, Error> {
        match (year, month, day) {
            (None, None, None) => Ok(DateFilter::All),
            (Some(year), None, None) => Ok(DateFilter::Year(year)),
            (Some(year), Some(month), None) => Ok(DateFilter::YearMonth(year, month)),
            (Some(year), Some(month), Some(day)) => Ok(DateFilter::Day(year, month, day)),
            _ => Err(Error::InvalidArgumentCombination),
        }
    }

    pub fn matches(&self, date: &NaiveDateTime) -> bool {
        match *self {
            DateFilter::All => true,
            DateFilter::Year(year) => date.year() == year,
            DateFilter::YearMonth(year, month) => date.year() == year && date.month() == month,
            DateFilter::Day(year, month, day) => {
                date.year() == year && date.month() == month && date.day() == day
            }
        }
    }
}

/// Which of debit and credit occurs more often.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DominantType {
    Debit,
    Credit,
    Equal,
}

impl DominantType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DominantType::Debit => "debit",
            DominantType::Credit => "credit",
            DominantType::Equal => "equal",
        }
    }
}

impl fmt::Display for DominantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn sum_amounts<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> Option<Decimal> {
    transactions
        .into_iter()
        .try_fold(Decimal::ZERO, |total, tx| {
            tx.amount.and_then(|amount| total.checked_add(amount))
        })
}

impl TransactionStore {
    pub fn total_amount(&self) -> Option<Decimal> {
        sum_amounts(self.iter())
    }

    pub fn total_amount_by_date(&self, filter: DateFilter) -> Option<Decimal> {
        sum_amounts(self.iter().filter(|tx| filter.matches(&tx.date)))
    }

    /// Mean amount, zero for an empty store.
    pub fn average_amount(&self) -> Option<Decimal> {
        if self.is_empty() {
            return Some(Decimal::ZERO);
        }
        let total = self.total_amount()?;
        total.checked_div(Decimal::from(self.len()))
    }

    pub fn total_debit_amount(&self) -> Option<Decimal> {
        sum_amounts(self.iter().filter(|tx| tx.tx_type == TransactionType::Debit))
    }

    pub fn monthly_counts(&self) -> MonthlyCounts {
        self.iter().map(|tx| &tx.date).collect()
    }

    pub fn monthly_debit_counts(&self) -> MonthlyCounts {
        self.iter()
            .filter(|tx| tx.tx_type == TransactionType::Debit)
            .map(|tx| &tx.date)
            .collect()
    }

    pub fn most_frequent_month_key(&self) -> Option<MonthKey> {
        self.monthly_counts().most_frequent()
    }

    pub fn most_frequent_debit_month_key(&self) -> Option<MonthKey> {
        self.monthly_debit_counts().most_frequent()
    }

    /// Name of the month with the most transactions; `None` for an empty store.
    pub fn most_frequent_month(&self) -> Option<&'static str> {
        self.most_frequent_month_key().map(|key| key.name())
    }

    pub fn most_frequent_debit_month(&self) -> Option<&'static str> {
        self.most_frequent_debit_month_key().map(|key| key.name())
    }

    pub fn dominant_transaction_type(&self) -> DominantType {
        let (debits, credits) =
            self.iter()
                .fold((0usize, 0usize), |(debits, credits), tx| match tx.tx_type {
                    TransactionType::Debit => (debits + 1, credits),
                    TransactionType::Credit => (debits, credits + 1),
                    TransactionType::Other(_) => (debits, credits),
                });
        if debits > credits {
            DominantType::Debit
        } else if credits > debits {
            DominantType::Credit
        } else {
            DominantType::Equal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{sample_store, tx};
    use rust_decimal_macros::dec;

    fn store_of(amounts: &[Decimal]) -> TransactionStore {
        amounts
            .iter()
            .enumerate()
            .map(|(i, amount)| tx(&i.to_string(), "2023-01-01", *amount, "debit", "Shop"))
            .collect()
    }

    #[test]
    fn test_total_amount() {
        assert_eq!(TransactionStore::default().total_amount(), Some(dec!(0)));
        assert_eq!(
            store_of(&[dec!(10), dec!(20), dec!(30)]).total_amount(),
            Some(dec!(60))
        );
    }

    #[test]
    fn test_not_a_number_poisons_sums() {
        let mut store = sample_store();
        let mut broken = tx("4", "2023-01-16", dec!(0), "debit", "SuperMart");
        broken.amount = None;
        store.append(broken);

        assert_eq!(store.total_amount(), None);
        assert_eq!(store.average_amount(), None);
        assert_eq!(store.total_debit_amount(), None);
        assert_eq!(store.total_amount_by_date(DateFilter::YearMonth(2023, 1)), None);
        // February is untouched by the broken January transaction
        assert_eq!(
            store.total_amount_by_date(DateFilter::YearMonth(2023, 2)),
            Some(dec!(200))
        );
    }

    #[test]
    fn test_overflow_poisons_sum() {
        let store = store_of(&[Decimal::MAX, dec!(1)]);
        assert_eq!(store.total_amount(), None);
    }

    #[test]
    fn test_total_amount_by_date() {
        let store = sample_store();
        assert_eq!(store.total_amount_by_date(DateFilter::YearMonth(2023, 1)), Some(dec!(150)));
        assert_eq!(store.total_amount_by_date(DateFilter::Day(2023, 1, 20)), Some(dec!(50)));
        assert_eq!(store.total_amount_by_date(DateFilter::Year(2023)), Some(dec!(350)));
        assert_eq!(store.total_amount_by_date(DateFilter::Year(2022)), Some(dec!(0)));
        assert_eq!(
            store.total_amount_by_date(DateFilter::All),
            store.total_amount()
        );
    }

    #[test]
    fn test_date_filter_from_parts() {
        assert_eq!(DateFilter::from_parts(None, None, None), Ok(DateFilter::All));
        assert_eq!(DateFilter::from_parts(Some(2023), None, None), Ok(DateFilter::Year(2023)));
        assert_eq!(
            DateFilter::from_parts(Some(2023), Some(3), None),
            Ok(DateFilter::YearMonth(2023, 3))
        );
        assert_eq!(
            DateFilter::from_parts(Some(2023), Some(3), Some(9)),
            Ok(DateFilter::Day(2023, 3, 9))
        );
        assert_eq!(
            DateFilter::from_parts(None, Some(3), None),
            Err(Error::InvalidArgumentCombination)
        );
        assert_eq!(
            DateFilter::from_parts(Some(2023), None, Some(9)),
            Err(Error::InvalidArgumentCombination)
        );
    }

    #[test]
    fn test_average_amount() {
        assert_eq!(TransactionStore::default().average_amount(), Some(dec!(0)));
        assert_eq!(
            store_of(&[dec!(10), dec!(20), dec!(30)]).average_amount(),
            Some(dec!(20))
        );
    }

    #[test]
    fn test_total_debit_amount() {
        let store = sample_store();
        assert_eq!(store.total_debit_amount(), Some(dec!(300)));
        assert!(store.total_debit_amount() <= store.total_amount());

        let credits_only: TransactionStore = vec![tx("1", "2023-01-01", dec!(5), "credit", "Shop")]
            .into_iter()
            .collect();
        assert_eq!(credits_only.total_debit_amount(), Some(dec!(0)));
    }

    #[test]
    fn test_most_frequent_month() {
        let store = sample_store();
        assert_eq!(store.most_frequent_month(), Some("January"));
        assert_eq!(
            store.most_frequent_month_key(),
            MonthKey::new(2023, 1)
        );
    }

    #[test]
    fn test_most_frequent_month_empty_store() {
        let store = TransactionStore::default();
        assert_eq!(store.most_frequent_month(), None);
        assert_eq!(store.most_frequent_debit_month(), None);
    }

    #[test]
    fn test_most_frequent_month_tie_goes_to_first_seen() {
        let store: TransactionStore = vec![
            tx("1", "2023-03-02", dec!(1), "debit", "Shop"),
            tx("2", "2023-01-05", dec!(1), "debit", "Shop"),
            tx("3", "2023-01-06", dec!(1), "credit", "Shop"),
            tx("4", "2023-03-07", dec!(1), "credit", "Shop"),
        ]
        .into_iter()
        .collect();
        assert_eq!(store.most_frequent_month(), Some("March"));
    }

    #[test]
    fn test_most_frequent_debit_month() {
        let store: TransactionStore = vec![
            tx("1", "2023-01-02", dec!(1), "credit", "Shop"),
            tx("2", "2023-01-05", dec!(1), "credit", "Shop"),
            tx("3", "2023-02-06", dec!(1), "debit", "Shop"),
        ]
        .into_iter()
        .collect();
        assert_eq!(store.most_frequent_month(), Some("January"));
        assert_eq!(store.most_frequent_debit_month(), Some("February"));
    }

    #[test]
    fn test_same_month_in_different_years_is_separate() {
        let store: TransactionStore = vec![
            tx("1", "2022-05-02", dec!(1), "debit", "Shop"),
            tx("2", "2023-06-05", dec!(1), "debit", "Shop"),
            tx("3", "2023-06-06", dec!(1), "debit", "Shop"),
            tx("4", "2024-05-06", dec!(1), "debit", "Shop"),
        ]
        .into_iter()
        .collect();
        assert_eq!(store.most_frequent_month(), Some("June"));
    }

    #[test]
    fn test_dominant_transaction_type() {
        assert_eq!(sample_store().dominant_transaction_type(), DominantType::Debit);
        assert_eq!(
            TransactionStore::default().dominant_transaction_type(),
            DominantType::Equal
        );

        let store: TransactionStore = vec![
            tx("1", "2023-01-01", dec!(1), "credit", "Shop"),
            tx("2", "2023-01-01", dec!(1), "transfer", "Shop"),
            tx("3", "2023-01-01", dec!(1), "transfer", "Shop"),
        ]
        .into_iter()
        .collect();
        assert_eq!(store.dominant_transaction_type(), DominantType::Credit);
        assert_eq!(store.dominant_transaction_type().to_string(), "credit");
    }
}

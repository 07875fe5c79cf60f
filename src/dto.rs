use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::aggregates::DominantType;
use crate::stores::TransactionStore;
use crate::Error;

/// Transaction type as found in the input. Only `debit` and `credit` take part
/// in type-specific aggregates; every other value is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TransactionType {
    Debit,
    Credit,
    Other(String),
}

impl TransactionType {
    pub fn as_str(&self) -> &str {
        match self {
            TransactionType::Debit => "debit",
            TransactionType::Credit => "credit",
            TransactionType::Other(other) => other,
        }
    }
}

impl From<String> for TransactionType {
    fn from(value: String) -> Self {
        if value == "debit" {
            TransactionType::Debit
        } else if value == "credit" {
            TransactionType::Credit
        } else {
            TransactionType::Other(value)
        }
    }
}

impl From<&str> for TransactionType {
    fn from(value: &str) -> Self {
        TransactionType::from(value.to_string())
    }
}

impl From<TransactionType> for String {
    fn from(value: TransactionType) -> Self {
        match value {
            TransactionType::Other(other) => other,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "transaction_id")]
    pub id: String,
    #[serde(rename = "transaction_date", deserialize_with = "deserialize_timestamp")]
    pub date: NaiveDateTime,
    /// `None` when the input amount is not a number. Such a transaction
    /// poisons every sum it takes part in.
    #[serde(
        rename = "transaction_amount",
        default,
        deserialize_with = "deserialize_amount"
    )]
    pub amount: Option<Decimal>,
    #[serde(rename = "transaction_type")]
    pub tx_type: TransactionType,
    #[serde(rename = "transaction_description")]
    pub description: String,
    pub merchant_name: String,
    pub card_type: String,
}

/// CSV shape of a [`Transaction`]. Every field stays raw text so that the
/// CSV reader cannot infer amounts as floats before they are parsed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TransactionRow {
    pub transaction_id: String,
    pub transaction_date: String,
    #[serde(default)]
    pub transaction_amount: String,
    pub transaction_type: String,
    pub transaction_description: String,
    pub merchant_name: String,
    pub card_type: String,
}

impl TryFrom<TransactionRow> for Transaction {
    type Error = Error;

    fn try_from(row: TransactionRow) -> Result<Self, Self::Error> {
        Ok(Transaction {
            id: row.transaction_id,
            date: parse_timestamp(&row.transaction_date)?,
            amount: parse_amount(&row.transaction_amount),
            tx_type: TransactionType::from(row.transaction_type),
            description: row.transaction_description,
            merchant_name: row.merchant_name,
            card_type: row.card_type,
        })
    }
}

/// Parses a timestamp in any of the accepted input forms:
/// `YYYY-MM-DD` (midnight), `YYYY-MM-DDTHH:MM:SS[.f]`, `YYYY-MM-DD HH:MM:SS[.f]`
/// or RFC 3339 with an offset, which is normalised to UTC.
pub fn parse_timestamp(input: &str) -> Result<NaiveDateTime, Error> {
    let input = input.trim();
    let invalid = || Error::InvalidTimestamp(input.to_string());

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).ok_or_else(invalid);
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(timestamp);
        }
    }
    DateTime::parse_from_rfc3339(input)
        .map(|timestamp| timestamp.naive_utc())
        .map_err(|_| invalid())
}

/// Lenient amount coercion: anything that is not a decimal becomes `None`.
pub fn parse_amount(input: &str) -> Option<Decimal> {
    let input = input.trim();
    Decimal::from_str(input)
        .or_else(|_| Decimal::from_scientific(input))
        .ok()
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).map_err(de::Error::custom)
}

fn deserialize_amount<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(AmountVisitor)
}

struct AmountVisitor;

impl<'de> Visitor<'de> for AmountVisitor {
    type Value = Option<Decimal>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a number or a numeric string")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(parse_amount(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Some(Decimal::from(v)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Some(Decimal::from(v)))
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> Result<Self::Value, E> {
        Ok(Decimal::try_from_i128_with_scale(v, 0).ok())
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<Self::Value, E> {
        Ok(i128::try_from(v)
            .ok()
            .and_then(|v| Decimal::try_from_i128_with_scale(v, 0).ok()))
    }

    // Display for f64 never uses exponent notation and prints NaN/inf as text,
    // which then fails to parse as expected.
    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(parse_amount(&v.to_string()))
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(AmountVisitor)
    }
}

/// Report row written by the runners.
#[derive(Debug, Serialize, PartialEq)]
pub struct Summary {
    pub transactions: usize,
    pub total_amount: Option<Decimal>,
    pub average_amount: Option<Decimal>,
    pub total_debit_amount: Option<Decimal>,
    pub unique_types: Vec<String>,
    pub dominant_type: DominantType,
    pub most_frequent_month: Option<&'static str>,
    pub most_frequent_debit_month: Option<&'static str>,
}

impl From<&TransactionStore> for Summary {
    fn from(store: &TransactionStore) -> Self {
        Self {
            transactions: store.len(),
            total_amount: store.total_amount(),
            average_amount: store.average_amount(),
            total_debit_amount: store.total_debit_amount(),
            unique_types: store
                .unique_types()
                .into_iter()
                .map(|tx_type| tx_type.to_string())
                .collect(),
            dominant_type: store.dominant_transaction_type(),
            most_frequent_month: store.most_frequent_month(),
            most_frequent_debit_month: store.most_frequent_debit_month(),
        }
    }
}

//! This example generates a CSV file with a number of transactions supplied as a
//! command-line argument. The file can then be used to try out the
//! `transaction-analyzer` binary or the benchmarks.
//!
//! Example (10 000 transactions):
//! ```bash
//! cargo run --example generator 10000 > data/10K_transactions.csv
//! ```
//! ### Maths
//! Transaction `i` (0-based) gets:
//! - date `2023-01-01 + (i mod 365)` days,
//! - amount `(i mod 100) + 1`,
//! - type `credit` when `i mod 3 == 0`, otherwise `debit`,
//! - merchant `MERCHANTS[i mod 4]`.
//!
//! So for `n = 300·k` transactions the total amount is `k · 3 · 5050`
//! (each block of 100 sums to 5050), and debits outnumber credits two to one.
//!

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use std::{env, error::Error, io};
use transaction_analyzer::{write_csv, Transaction, TransactionType};

const MERCHANTS: [&str; 4] = ["SuperMart", "OnlineStore", "TechShop", "Bistro"];
const CARD_TYPES: [&str; 2] = ["Visa", "Mastercard"];

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: cargo run --example generator <num_transactions>");
        std::process::exit(1);
    }

    let count: usize = args[1].parse()?;
    let start = NaiveDate::from_ymd_opt(2023, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or("invalid start date")?;

    let transactions = (0..count).map(|i| Transaction {
        id: (i + 1).to_string(),
        date: start + Duration::days((i % 365) as i64),
        amount: Some(Decimal::from(i % 100 + 1)),
        tx_type: if i % 3 == 0 {
            TransactionType::Credit
        } else {
            TransactionType::Debit
        },
        description: format!("Generated transaction {}", i + 1),
        merchant_name: MERCHANTS[i % MERCHANTS.len()].to_string(),
        card_type: CARD_TYPES[i % CARD_TYPES.len()].to_string(),
    });

    write_csv(io::stdout().lock(), transactions)?;
    Ok(())
}

mod aggregates;
mod csv_utils;
mod dto;
mod error;
mod query;
mod runner;
mod stores;
#[cfg(test)]
mod test_utils;

pub use aggregates::{DateFilter, DominantType};
pub use csv_utils::{read_csv, write_csv};
pub use dto::{
    parse_amount, parse_timestamp, Summary, Transaction, TransactionRow, TransactionType,
};
pub use error::Error;
pub use query::Query;
pub use runner::{load, load_async, run, run_async, write_summary, InputFormat};
pub use stores::{MonthKey, MonthlyCounts, TransactionStore};

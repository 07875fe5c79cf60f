//! Storage layer for the transaction analyzer. Provides:
//! - The append-only transaction sequence ([`TransactionStore`])
//! - Per-month transaction counts for frequency ranking ([`MonthlyCounts`])
//!
//! Current implementation is optimized for synchronous, direct memory
//! access.

mod months;
mod transactions;

pub use months::{MonthKey, MonthlyCounts};
pub use transactions::TransactionStore;

//! Domain-specific errors for the transaction analyzer.
//!
//! Contains error variants for caller contract violations:
//! - Date filter components that do not form a year/month/day prefix
//! - Timestamps that cannot be parsed at the loader boundary
//! - Input files in a format the loader does not understand
//!
//! Absence is never an error here: lookups return `Option` and filters
//! return empty collections. Technical failures like I/O or CSV parsing
//! are propagated by the runners as boxed errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("date filter components must be a prefix of year, month, day")]
    InvalidArgumentCombination,
    #[error("invalid timestamp '{0}'")]
    InvalidTimestamp(String),
    #[error("unsupported input format '{0}'")]
    UnsupportedFormat(String),
}

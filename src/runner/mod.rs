//! The runner is responsible for loading a transactions file into a
//! [`TransactionStore`] and writing reports about it to a writer.
//!
//! This module provides both a synchronous and an asynchronous runner implementations.
//!
mod async_runner;
mod sync_runner;

pub use async_runner::{load as load_async, run as run_async};
pub use sync_runner::{load, run};

use log::{info, warn};
use std::io::{self, Write};
use std::path::Path;

use crate::{Error, Summary, TransactionStore};

/// Input file formats understood by the loaders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Csv,
    Json,
}

impl InputFormat {
    /// Picks the format from the file extension. Files without an extension
    /// are read as CSV.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        match path.extension().and_then(|ext| ext.to_str()) {
            None => Ok(InputFormat::Csv),
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Ok(InputFormat::Csv),
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(InputFormat::Json),
            Some(ext) => Err(Error::UnsupportedFormat(ext.to_string())),
        }
    }
}

/// Writes the pretty-printed JSON [`Summary`] of the store.
pub fn write_summary<W: Write>(mut writer: W, store: &TransactionStore) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut writer, &Summary::from(store))?;
    writeln!(writer)?;
    writer.flush()
}

fn log_loaded(path: &Path, store: &TransactionStore) {
    info!("Loaded {} transactions from {}", store.len(), path.display());
    let not_a_number = store.iter().filter(|tx| tx.amount.is_none()).count();
    if not_a_number > 0 {
        warn!(
            "{} transactions in {} have an amount that is not a number",
            not_a_number,
            path.display()
        );
    }
}

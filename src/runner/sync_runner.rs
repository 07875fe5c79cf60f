use std::error::Error;
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

use super::{log_loaded, write_summary, InputFormat};
use crate::{csv_utils::read_csv, Transaction, TransactionRow, TransactionStore};

/// Loads a CSV or JSON transactions file into a store, preserving file order.
///
/// # Errors
/// Returns an error if:
/// * The file extension is not supported
/// * The input file cannot be read
/// * A record is malformed or has an unparseable date
pub fn load<P>(input_path: P) -> Result<TransactionStore, Box<dyn Error>>
where
    P: AsRef<Path>,
{
    let input_path = input_path.as_ref();
    let transactions: Vec<Transaction> = match InputFormat::from_path(input_path)? {
        InputFormat::Csv => read_csv::<TransactionRow, _>(input_path)?
            .map(|row| Ok(Transaction::try_from(row?)?))
            .collect::<Result<_, Box<dyn Error>>>()?,
        InputFormat::Json => serde_json::from_reader(BufReader::new(File::open(input_path)?))?,
    };
    let store = TransactionStore::new(transactions);
    log_loaded(input_path, &store);
    Ok(store)
}

/// Loads the given input file and writes its summary to the provided writer.
///
/// # Arguments
/// * `input_path` - Path to the CSV or JSON file containing transactions
/// * `writer` - Where to write the summary (e.g. stdout)
///
/// # Errors
/// Returns an error if loading fails or writing to the output fails.
pub fn run<P, W>(input_path: P, writer: W) -> Result<(), Box<dyn Error>>
where
    P: AsRef<Path>,
    W: Write,
{
    let store = load(input_path)?;
    write_summary(writer, &store)?;
    Ok(())
}

use std::error::Error;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::{log_loaded, write_summary, InputFormat};
use crate::{Transaction, TransactionRow, TransactionStore};

use csv_async::{AsyncReaderBuilder, Trim};
use tokio::fs::File;
use tokio::sync::mpsc;
use tokio_stream::StreamExt;

const BUFFER_SIZE: usize = 1024;

type Result<T, E = Box<dyn Error + Send + Sync>> = std::result::Result<T, E>;

/// Loads a transactions file into a store asynchronously.
/// For CSV input, spawns two tasks:
/// * CSV reader - streams records from the input file, deserializes them and sends them to the builder via channel.
/// * Builder - receives transactions from the channel and appends them to a store until the channel is closed.
///
/// JSON input is read in one go and parsed on the current task.
///
/// # Errors
/// Returns an error if:
/// * The file extension is not supported
/// * The input file cannot be read
/// * A record is malformed or has an unparseable date
pub async fn load<P>(input_path: P) -> Result<TransactionStore>
where
    P: AsRef<Path>,
{
    let input_path = input_path.as_ref().to_owned();
    let store = match InputFormat::from_path(&input_path)? {
        InputFormat::Csv => load_csv(input_path.clone()).await?,
        InputFormat::Json => {
            let contents = tokio::fs::read(&input_path).await?;
            let transactions: Vec<Transaction> = serde_json::from_slice(&contents)?;
            TransactionStore::new(transactions)
        }
    };
    log_loaded(&input_path, &store);
    Ok(store)
}

/// Loads the given input file asynchronously and writes its summary to the provided writer.
///
/// # Arguments
/// * `input_path` - Path to the CSV or JSON file containing transactions
/// * `writer` - Where to write the summary (e.g. stdout)
///
/// # Errors
/// Returns an error if loading fails or writing to the output fails.
pub async fn run<P, W>(input_path: P, writer: W) -> Result<()>
where
    P: AsRef<Path>,
    W: Write,
{
    let store = load(input_path).await?;
    write_summary(writer, &store)?;
    Ok(())
}

async fn load_csv(input_path: PathBuf) -> Result<TransactionStore> {
    // Create channel for passing transactions from reader to builder
    let (tx, rx) = mpsc::channel(BUFFER_SIZE);

    let reader_handle = tokio::spawn(read_transactions(input_path, tx));
    let builder_handle = tokio::spawn(build_store(rx));

    // Wait for reader to finish and propagate any errors
    reader_handle.await??;

    Ok(builder_handle.await?)
}

/// Reads CSV rows from a file and converts them into transactions.
/// Returns them through the provided channel.
async fn read_transactions(
    input_path: impl AsRef<Path> + Send,
    tx: mpsc::Sender<Transaction>,
) -> Result<()> {
    let file = File::open(input_path).await?;
    let mut csv_reader = AsyncReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .create_deserializer(file);

    let mut records = csv_reader.deserialize::<TransactionRow>();
    while let Some(result) = records.next().await {
        // Malformed records fail the whole load
        let transaction = Transaction::try_from(result?)?;
        if tx.send(transaction).await.is_err() {
            // Receiver dropped, exit gracefully
            break;
        }
    }
    Ok(())
}

/// Appends transactions received through the channel, in arrival order.
/// Returns the store once the channel is closed by the reader.
async fn build_store(mut rx: mpsc::Receiver<Transaction>) -> TransactionStore {
    let mut store = TransactionStore::default();
    while let Some(transaction) = rx.recv().await {
        store.append(transaction);
    }
    store
}

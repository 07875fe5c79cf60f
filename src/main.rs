use std::error::Error;
use std::io;
use std::path::PathBuf;
use std::process;

use chrono::NaiveDateTime;
use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use log::info;
use rust_decimal::Decimal;

use transaction_analyzer::{
    load, parse_timestamp, run, write_csv, DateFilter, Query, TransactionType,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Transactions file (.csv or .json)
    path: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print a JSON summary of all transactions
    Summary,
    /// Print matching transactions as CSV
    List(ListArgs),
    /// Print the first transaction with the given id as JSON
    Find { id: String },
    /// Print the total amount for a year, a month or a single day
    Total {
        #[arg(long)]
        year: Option<i32>,
        #[arg(long, requires = "year")]
        month: Option<u32>,
        #[arg(long, requires = "month")]
        day: Option<u32>,
    },
}

#[derive(Args)]
struct ListArgs {
    /// Exact transaction type, e.g. debit
    #[arg(long = "type")]
    tx_type: Option<String>,
    /// Exact merchant name
    #[arg(long)]
    merchant: Option<String>,
    /// Earliest timestamp, inclusive
    #[arg(long, value_parser = parse_timestamp)]
    from: Option<NaiveDateTime>,
    /// Latest timestamp, inclusive
    #[arg(long, value_parser = parse_timestamp)]
    to: Option<NaiveDateTime>,
    /// Only transactions strictly before this timestamp
    #[arg(long, value_parser = parse_timestamp)]
    before: Option<NaiveDateTime>,
    /// Smallest amount, inclusive
    #[arg(long, allow_hyphen_values = true)]
    min: Option<Decimal>,
    /// Largest amount, inclusive
    #[arg(long, allow_hyphen_values = true)]
    max: Option<Decimal>,
}

impl From<ListArgs> for Query {
    fn from(args: ListArgs) -> Self {
        Query {
            tx_type: args.tx_type.map(TransactionType::from),
            merchant_name: args.merchant,
            from: args.from,
            to: args.to,
            before: args.before,
            min_amount: args.min,
            max_amount: args.max,
        }
    }
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    if let Err(err) = run_cli(Cli::parse()) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn run_cli(cli: Cli) -> Result<(), Box<dyn Error>> {
    match cli.command {
        Command::Summary => run(&cli.path, io::stdout().lock())?,
        Command::List(args) => {
            let store = load(&cli.path)?;
            let selected = Query::from(args).apply(&store);
            info!("{} of {} transactions match", selected.len(), store.len());
            write_csv(io::stdout().lock(), selected.iter())?;
        }
        Command::Find { id } => {
            let store = load(&cli.path)?;
            let found = store.find_by_id(&id);
            if found.is_none() {
                info!("No transaction with id {}", id);
            }
            println!("{}", serde_json::to_string_pretty(&found)?);
        }
        Command::Total { year, month, day } => {
            let filter = DateFilter::from_parts(year, month, day)?;
            let store = load(&cli.path)?;
            match store.total_amount_by_date(filter) {
                Some(total) => println!("{}", total),
                None => println!("NaN"),
            }
        }
    }
    Ok(())
}

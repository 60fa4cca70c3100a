//! Mock Cards CLI
//!
//! Bootstraps an in-memory card store and writes the generated data to
//! stdout as CSV.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- 10 --seed 42 > cards.csv
//! cargo run -- --transactions > transactions.csv
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `info` to control logging verbosity

use log::info;
use mockcards::{CardError, CardStore, Result, DEFAULT_CARD_COUNT};
use std::env;
use std::io;
use std::process;

const USAGE: &str = "Usage: mockcards [CARD_COUNT] [--seed N] [--transactions]";

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Parsed command-line options.
struct Options {
    card_count: usize,
    seed: Option<u64>,
    transactions: bool,
}

fn parse_args(args: &[String]) -> Result<Options> {
    let mut options = Options {
        card_count: DEFAULT_CARD_COUNT,
        seed: None,
        transactions: false,
    };

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--transactions" => options.transactions = true,
            "--seed" => {
                let value = iter
                    .next()
                    .ok_or_else(|| CardError::InvalidArgument(format!("--seed needs a value. {}", USAGE)))?;
                options.seed = Some(value.parse().map_err(|_| {
                    CardError::InvalidArgument(format!("Bad seed {:?}. {}", value, USAGE))
                })?);
            }
            other => {
                options.card_count = other.parse().map_err(|_| {
                    CardError::InvalidArgument(format!("Bad card count {:?}. {}", other, USAGE))
                })?;
            }
        }
    }

    Ok(options)
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let options = parse_args(&args)?;

    let mut store = match options.seed {
        Some(seed) => CardStore::with_seed(seed),
        None => CardStore::with_defaults(),
    };
    store.bootstrap(options.card_count);

    let partition = store.partition_by_balance();
    info!(
        "Generated {} cards with total balance {} ({} non-negative, {} negative)",
        store.cards().len(),
        store.total_balance(),
        partition.non_negative.len(),
        partition.negative.len()
    );

    let stdout = io::stdout();
    let handle = stdout.lock();
    if options.transactions {
        store.write_transactions_csv(handle)?;
    } else {
        store.write_cards_csv(handle)?;
    }

    Ok(())
}

mod import;
mod input;
mod ledger;
mod shell;
mod transaction;

use std::{error::Error, io, path::PathBuf};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::{ledger::Ledger, shell::Shell, transaction::DEFAULT_CURRENCY};

/// Personal budget tracker.
#[derive(Parser, Debug)]
#[clap(version, about, long_about = None)]
struct Args {
    /// Symbol printed in front of every amount.
    #[clap(long, default_value = DEFAULT_CURRENCY)]
    currency: String,

    /// CSV file (description,amount,kind,category,date) to load before starting.
    #[clap(long, value_parser)]
    import: Option<PathBuf>,

    /// Print the transactions, summary and analytics once and exit.
    #[clap(long)]
    report: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut ledger = Ledger::new();

    if let Some(path) = &args.import {
        let file = std::fs::File::open(path)?;
        import::import_into(&mut ledger, file)?;
    }

    let stdout = io::stdout();

    if args.report {
        shell::write_report(&mut stdout.lock(), &ledger, &args.currency)?;
        return Ok(());
    }

    let stdin = io::stdin();
    Shell::new(&mut ledger, stdin.lock(), stdout.lock(), args.currency).run()?;

    Ok(())
}

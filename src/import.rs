use std::io::Read;

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::{
    input::{InputError, RawTransaction},
    ledger::Ledger,
    transaction::Transaction,
};

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ImportError {
    /// The file is not readable CSV or is missing a column.
    #[error("failed to read CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A record was read but one of its fields does not parse.
    #[error("line {line}: {source}")]
    Record { line: u64, source: InputError },
}

/// One CSV row, e.g.
///
/// |description |amount |kind    |category |date       |
/// |------------|-------|--------|---------|-----------|
/// |Lunch       |150.00 |Expense |Food     |2024-01-05 |
#[derive(Debug, Deserialize)]
struct Record {
    description: String,
    amount: String,
    #[serde(alias = "type")]
    kind: String,
    category: String,
    date: String,
}

impl From<Record> for RawTransaction {
    fn from(record: Record) -> Self {
        RawTransaction {
            description: record.description,
            amount: record.amount,
            kind: record.kind,
            category: record.category,
            date: record.date,
        }
    }
}

/// Reads every transaction from `reader`. Fails on the first bad record.
pub fn read_transactions<R: Read>(reader: R) -> Result<Vec<Transaction>, ImportError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let mut row = csv::StringRecord::new();
    let mut transactions = Vec::new();

    while rdr.read_record(&mut row)? {
        let line = row.position().map_or(0, |pos| pos.line());
        let record: Record = row.deserialize(Some(&headers))?;

        let transaction = RawTransaction::from(record)
            .parse()
            .map_err(|source| ImportError::Record { line, source })?;

        transactions.push(transaction);
    }

    Ok(transactions)
}

/// Loads `reader` into `ledger`. On error the ledger is left as it was.
pub fn import_into<R: Read>(ledger: &mut Ledger, reader: R) -> Result<usize, ImportError> {
    let transactions = read_transactions(reader)?;
    let count = transactions.len();

    for transaction in transactions {
        ledger.add(transaction);
    }

    info!(count, total = ledger.len(), "imported transactions");

    Ok(count)
}

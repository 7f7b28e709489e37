use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::transaction::{Transaction, TransactionKind};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Largest accepted amount, in whole currency units. Far more entries than
/// fit in memory would be needed for a ledger total to overflow `Decimal`.
pub const MAX_AMOUNT_UNITS: i64 = 1_000_000_000_000_000;

#[non_exhaustive]
#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    /// Amount is not a decimal number.
    #[error("invalid amount: {0:?}")]
    InvalidAmount(String),

    /// Amount parsed but is below zero.
    #[error("amount must not be negative: {0}")]
    NegativeAmount(Decimal),

    /// Amount is above `MAX_AMOUNT_UNITS`.
    #[error("amount is too large (maximum {max}): {amount}")]
    AmountTooLarge { amount: Decimal, max: Decimal },

    /// Date is not a valid `YYYY-MM-DD` calendar date.
    #[error("invalid date (expected yyyy-mm-dd): {0:?}")]
    InvalidDate(String),
}

pub fn parse_amount(raw: &str) -> Result<Decimal, InputError> {
    let amount =
        Decimal::from_str(raw.trim()).map_err(|_| InputError::InvalidAmount(raw.to_string()))?;

    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(InputError::NegativeAmount(amount));
    }

    let max = Decimal::new(MAX_AMOUNT_UNITS, 0);
    if amount > max {
        return Err(InputError::AmountTooLarge { amount, max });
    }

    Ok(amount)
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, InputError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| InputError::InvalidDate(raw.to_string()))
}

/// The five raw text fields collected for one transaction.
#[derive(Debug, Default, Clone)]
pub struct RawTransaction {
    pub description: String,
    pub amount: String,
    pub kind: String,
    pub category: String,
    pub date: String,
}

impl RawTransaction {
    /// Parses the raw fields. Nothing is added anywhere; the caller decides
    /// what to do with the result.
    pub fn parse(&self) -> Result<Transaction, InputError> {
        let amount = parse_amount(&self.amount)?;
        let date = parse_date(&self.date)?;
        let kind = TransactionKind::from(self.kind.as_str());

        Ok(Transaction::new(
            self.description.trim(),
            amount,
            kind,
            self.category.trim(),
            date,
        ))
    }
}

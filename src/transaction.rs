use std::fmt::Display;

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Currency prefix used when no other symbol is configured.
pub const DEFAULT_CURRENCY: &str = "₱";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionKind {
    /// Money earned. Counted by `Ledger::total_income`.
    ///
    /// An income looks like
    ///
    /// |description |amount  |kind   |category |date       |
    /// |------------|--------|-------|---------|-----------|
    /// |Salary      |5000.00 |Income |Work     |2024-01-01 |
    Income,

    /// Money spent. Counted by `Ledger::total_expenses` and grouped
    /// by category in `Ledger::category_spending`.
    ///
    /// An expense looks like
    ///
    /// |description |amount |kind    |category |date       |
    /// |------------|-------|--------|---------|-----------|
    /// |Lunch       |150.00 |Expense |Food     |2024-01-05 |
    Expense,

    /// Any other label the user typed in. The entry is kept in the
    /// ledger and listed, but it takes no part in income or expense
    /// totals.
    Other(String),
}

impl From<&str> for TransactionKind {
    /// Case-insensitive. Unknown labels are kept as `Other`.
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "income" => TransactionKind::Income,
            "expense" => TransactionKind::Expense,
            _ => TransactionKind::Other(s.trim().to_string()),
        }
    }
}

impl Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionKind::Income => write!(f, "Income"),
            TransactionKind::Expense => write!(f, "Expense"),
            TransactionKind::Other(label) => write!(f, "{}", label),
        }
    }
}

/// A single ledger entry. Once built it is never modified.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    description: String,
    amount: Decimal,
    kind: TransactionKind,
    category: String,
    date: NaiveDate,
}

impl Transaction {
    /// `amount` is expected to have gone through `input::parse_amount`,
    /// which keeps it within the range the ledger totals can hold.
    pub fn new(
        description: impl Into<String>,
        amount: Decimal,
        kind: TransactionKind,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Transaction {
            description: description.into(),
            amount,
            kind,
            category: category.into(),
            date,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn kind(&self) -> &TransactionKind {
        &self.kind
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// Renders the transaction with `currency` in front of the amount.
    pub fn display_with<'a>(&'a self, currency: &'a str) -> DisplayTransaction<'a> {
        DisplayTransaction {
            transaction: self,
            currency,
        }
    }
}

impl Display for Transaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.display_with(DEFAULT_CURRENCY).fmt(f)
    }
}

/// Writes `amount` with a currency prefix, e.g. `₱150.00`.
pub fn format_currency(currency: &str, amount: Decimal) -> String {
    format!("{}{}", currency, amount)
}

/// Short date used for listing only, e.g. `1/5/2024`.
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

pub struct DisplayTransaction<'a> {
    transaction: &'a Transaction,
    currency: &'a str,
}

impl Display for DisplayTransaction<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tx = self.transaction;

        write!(
            f,
            "{} - {} - {} - {}: {}",
            format_short_date(tx.date()),
            tx.kind(),
            tx.category(),
            tx.description(),
            format_currency(self.currency, tx.amount())
        )
    }
}

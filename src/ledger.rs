use std::{collections::HashMap, str::FromStr};

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, warn};

use crate::transaction::Transaction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortCriterion {
    /// Oldest first.
    Date,

    /// Largest first.
    Amount,

    /// Alphabetical by category label.
    Category,
}

#[non_exhaustive]
#[derive(Debug, Error, PartialEq)]
pub enum SortError {
    /// The requested ordering is not one of date, amount or category.
    #[error("invalid sort option: {0:?}")]
    InvalidOption(String),
}

impl FromStr for SortCriterion {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "date" => Ok(SortCriterion::Date),
            "amount" => Ok(SortCriterion::Amount),
            "category" => Ok(SortCriterion::Category),
            _ => Err(SortError::InvalidOption(s.trim().to_string())),
        }
    }
}

/// Expense totals per category.
///
/// Categories are kept in the order their first expense was added to the
/// ledger, which is also the order used to break ties in
/// `Ledger::most_spent_category`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CategorySpending {
    totals: Vec<(String, Decimal)>,
}

impl CategorySpending {
    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.totals
            .iter()
            .map(|(name, amount)| (name.as_str(), *amount))
    }

    /// The category with the largest total. The earliest seen category wins a tie.
    fn max(&self) -> Option<(&str, Decimal)> {
        self.iter().fold(None, |best, (name, amount)| match best {
            Some((_, best_amount)) if best_amount >= amount => best,
            _ => Some((name, amount)),
        })
    }
}

/// In-memory list of transactions, kept in insertion order until sorted.
#[derive(Debug, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Ledger::default()
    }

    pub fn add(&mut self, transaction: Transaction) {
        debug!(
            description = transaction.description(),
            amount = %transaction.amount(),
            "adding transaction"
        );

        self.transactions.push(transaction);
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn total_income(&self) -> Decimal {
        self.transactions
            .iter()
            .filter(|tx| tx.is_income())
            .map(Transaction::amount)
            .sum()
    }

    pub fn total_expenses(&self) -> Decimal {
        self.transactions
            .iter()
            .filter(|tx| tx.is_expense())
            .map(Transaction::amount)
            .sum()
    }

    pub fn net_savings(&self) -> Decimal {
        self.total_income() - self.total_expenses()
    }

    /// Sums expenses per category. Category labels are compared exactly.
    pub fn category_spending(&self) -> CategorySpending {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut spending = CategorySpending::default();

        for tx in self.transactions.iter().filter(|tx| tx.is_expense()) {
            match index.get(tx.category()) {
                Some(&i) => spending.totals[i].1 += tx.amount(),
                None => {
                    index.insert(tx.category(), spending.totals.len());
                    spending
                        .totals
                        .push((tx.category().to_string(), tx.amount()));
                }
            }
        }

        spending
    }

    pub fn most_spent_category(&self) -> Option<(String, Decimal)> {
        self.category_spending()
            .max()
            .map(|(name, amount)| (name.to_string(), amount))
    }

    /// All transactions oldest first. Entries on the same day keep their
    /// current relative order.
    pub fn transactions_by_date(&self) -> Vec<&Transaction> {
        let mut sorted: Vec<&Transaction> = self.transactions.iter().collect();
        sorted.sort_by_key(|tx| tx.date());
        sorted
    }

    /// Reorders the ledger in place. `Vec::sort_by` is stable, so equal keys
    /// keep their relative order.
    pub fn sort(&mut self, criterion: SortCriterion) {
        match criterion {
            SortCriterion::Date => self.transactions.sort_by_key(|tx| tx.date()),
            SortCriterion::Amount => self
                .transactions
                .sort_by(|a, b| b.amount().cmp(&a.amount())),
            SortCriterion::Category => self
                .transactions
                .sort_by(|a, b| a.category().cmp(b.category())),
        }
    }

    /// Parses `criterion` and sorts. An unknown criterion leaves the
    /// ledger untouched.
    pub fn sort_by_name(&mut self, criterion: &str) -> Result<SortCriterion, SortError> {
        let criterion = criterion.parse::<SortCriterion>().map_err(|err| {
            warn!("{}", err);
            err
        })?;

        self.sort(criterion);

        Ok(criterion)
    }
}

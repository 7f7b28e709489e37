use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::{
    input::RawTransaction,
    ledger::Ledger,
    transaction::{format_currency, Transaction},
};

const MENU: &str = "\
--- Personal Budget Tracker ---
1. Add Transaction
2. View All Transactions
3. Show Summary
4. Show Spending Analytics
5. Sort Transactions
6. Exit";

/// Interactive menu over a ledger.
///
/// Reads from any `BufRead` and writes to any `Write`, so tests can drive it
/// with in-memory buffers. End of input behaves like choosing Exit.
pub struct Shell<'a, R, W> {
    ledger: &'a mut Ledger,
    input: R,
    output: W,
    currency: String,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(ledger: &'a mut Ledger, input: R, output: W, currency: impl Into<String>) -> Self {
        Shell {
            ledger,
            input,
            output,
            currency: currency.into(),
        }
    }

    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "\n{}", MENU)?;

            let choice = match self.prompt("Choose an option: ")? {
                Some(choice) => choice,
                None => return Ok(()),
            };

            let keep_going = match choice.trim().parse::<u8>() {
                Ok(1) => self.add_transaction()?,
                Ok(2) => {
                    let by_date = self.ledger.transactions_by_date();
                    write_transactions(&mut self.output, by_date, &self.currency)?;
                    true
                }
                Ok(3) => {
                    write_summary(&mut self.output, self.ledger, &self.currency)?;
                    true
                }
                Ok(4) => {
                    write_analytics(&mut self.output, self.ledger, &self.currency)?;
                    true
                }
                Ok(5) => self.sort_transactions()?,
                Ok(6) => false,
                _ => {
                    debug!(choice = choice.trim(), "invalid menu choice");
                    writeln!(self.output, "Invalid choice. Try again.")?;
                    true
                }
            };

            if !keep_going {
                return Ok(());
            }
        }
    }

    /// Writes `message` and reads one line. `None` at end of input.
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Asks for the five fields of a transaction. `None` at end of input.
    fn read_raw_transaction(&mut self) -> io::Result<Option<RawTransaction>> {
        let amount_prompt = format!("Enter Amount: {}", self.currency);

        let Some(description) = self.prompt("Enter Description: ")? else {
            return Ok(None);
        };
        let Some(amount) = self.prompt(&amount_prompt)? else {
            return Ok(None);
        };
        let Some(kind) = self.prompt("Enter Type (Income/Expense): ")? else {
            return Ok(None);
        };
        let Some(category) = self.prompt("Enter Category: ")? else {
            return Ok(None);
        };
        let Some(date) = self.prompt("Enter Date (yyyy-mm-dd): ")? else {
            return Ok(None);
        };

        Ok(Some(RawTransaction {
            description,
            amount,
            kind,
            category,
            date,
        }))
    }

    fn add_transaction(&mut self) -> io::Result<bool> {
        let raw = match self.read_raw_transaction()? {
            Some(raw) => raw,
            None => return Ok(false),
        };

        match raw.parse() {
            Ok(transaction) => {
                self.ledger.add(transaction);
                writeln!(self.output, "Transaction added successfully!")?;
            }
            Err(err) => {
                warn!("rejected transaction: {}", err);
                writeln!(self.output, "Invalid input. Transaction not added. ({})", err)?;
            }
        }

        Ok(true)
    }

    fn sort_transactions(&mut self) -> io::Result<bool> {
        let criterion = match self.prompt("Sort by (date/amount/category): ")? {
            Some(criterion) => criterion,
            None => return Ok(false),
        };

        if self.ledger.sort_by_name(&criterion).is_err() {
            writeln!(self.output, "Invalid sort option.")?;
        }

        write_transactions(
            &mut self.output,
            self.ledger.transactions().iter(),
            &self.currency,
        )?;

        Ok(true)
    }
}

pub fn write_transactions<'t, W: Write>(
    out: &mut W,
    transactions: impl IntoIterator<Item = &'t Transaction>,
    currency: &str,
) -> io::Result<()> {
    writeln!(out, "\nAll Transactions:")?;

    for transaction in transactions {
        writeln!(out, "{}", transaction.display_with(currency))?;
    }

    Ok(())
}

pub fn write_summary<W: Write>(out: &mut W, ledger: &Ledger, currency: &str) -> io::Result<()> {
    writeln!(
        out,
        "\nTotal Income: {}",
        format_currency(currency, ledger.total_income())
    )?;
    writeln!(
        out,
        "Total Expenses: {}",
        format_currency(currency, ledger.total_expenses())
    )?;
    writeln!(
        out,
        "Net Savings: {}",
        format_currency(currency, ledger.net_savings())
    )
}

pub fn write_analytics<W: Write>(out: &mut W, ledger: &Ledger, currency: &str) -> io::Result<()> {
    let spending = ledger.category_spending();

    writeln!(out, "\nCategory-wise Spending:")?;
    for (category, amount) in spending.iter() {
        writeln!(out, "{}: {}", category, format_currency(currency, amount))?;
    }

    if let Some((category, amount)) = ledger.most_spent_category() {
        writeln!(
            out,
            "\nMost Spent Category: {} - {}",
            category,
            format_currency(currency, amount)
        )?;
    }

    Ok(())
}

/// Everything the menu can show, in one go.
pub fn write_report<W: Write>(out: &mut W, ledger: &Ledger, currency: &str) -> io::Result<()> {
    write_transactions(out, ledger.transactions_by_date(), currency)?;
    write_summary(out, ledger, currency)?;
    write_analytics(out, ledger, currency)
}

use anyhow::Result;
use bigdecimal::BigDecimal;
use chrono::{Local, NaiveDate};
use std::io::Write;
use tracing::{debug, info};

use crate::cli_utils::formatting::{format_count, format_expenses};
use crate::expenses::db_types::{CreateExpense, Expense};
use crate::utils::traits::ExpenseBackend;

/// Persists and reads back expenses, writing human-readable reports.
///
/// Every report is written to the `out` passed to the call, so the same store
/// serves stdout in the binary and a buffer in tests.
pub struct ExpenseStore<B: ExpenseBackend> {
    backend: B,
}

impl<B: ExpenseBackend> ExpenseStore<B> {
    /// Wraps `backend`, creating the expense table if it is missing.
    pub fn new(mut backend: B) -> Result<Self> {
        backend.setup_schema()?;
        Ok(Self { backend })
    }

    #[cfg(test)]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn list_expenses<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let rows = self.backend.all()?;
        debug!(count = rows.len(), "listing expenses");

        writeln!(out, "{}", format_count(rows.len()))?;
        display_expenses(&rows, out)
    }

    /// Records an expense dated `date`, or today when no date is given.
    pub fn add_expense(
        &mut self,
        amount: BigDecimal,
        memo: &str,
        date: Option<NaiveDate>,
    ) -> Result<Expense> {
        let input = CreateExpense {
            amount,
            memo: memo.to_string(),
            created_on: date.unwrap_or_else(|| Local::now().date_naive()),
        };

        let row = self.backend.insert(&input)?;
        info!(id = row.id, amount = %row.amount, "recorded expense");
        Ok(row)
    }

    pub fn search_expenses<W: Write>(&mut self, query: &str, out: &mut W) -> Result<()> {
        let rows = self.backend.search(query)?;
        debug!(query, count = rows.len(), "searched expenses");

        writeln!(out, "{}", format_count(rows.len()))?;
        display_expenses(&rows, out)
    }

    pub fn delete_expense<W: Write>(&mut self, id: i32, out: &mut W) -> Result<()> {
        let Some(row) = self.backend.find(id)? else {
            writeln!(out, "There is no expense with the id '{}'.", id)?;
            return Ok(());
        };

        self.backend.delete(id)?;
        info!(id, "deleted expense");

        writeln!(out, "The following expense has been deleted:")?;
        display_expenses(std::slice::from_ref(&row), out)
    }

    pub fn delete_all_expenses<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let deleted = self.backend.delete_all()?;
        info!(deleted, "deleted all expenses");

        writeln!(out, "All expenses have been deleted.")?;
        Ok(())
    }
}

fn display_expenses<W: Write>(rows: &[Expense], out: &mut W) -> Result<()> {
    if rows.is_empty() {
        return Ok(());
    }

    for line in format_expenses(rows) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

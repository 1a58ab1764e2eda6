use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use std::io::Write;
use std::str::FromStr;
use tracing::debug;

use crate::cli::Command;
use crate::cli_utils::{CliError, CliResult, KeyInput, confirm};
use crate::expenses::store::ExpenseStore;
use crate::utils::traits::ExpenseBackend;

pub const HELP: &str = "\
An expense recording system

Commands:

add AMOUNT MEMO [DATE] - record a new expense
clear - delete all expenses
list - list all expenses
delete NUMBER - remove expense with id NUMBER
search QUERY - list expenses with a matching memo field
";

const CLEAR_PROMPT: &str = "This will remove all expenses. Are you sure? (y/N)";

/// Maps one parsed command onto the matching [`ExpenseStore`] operation.
pub struct CommandDispatcher<B: ExpenseBackend> {
    store: ExpenseStore<B>,
}

impl<B: ExpenseBackend> CommandDispatcher<B> {
    pub fn new(store: ExpenseStore<B>) -> Self {
        Self { store }
    }

    #[cfg(test)]
    pub fn store(&self) -> &ExpenseStore<B> {
        &self.store
    }

    /// Runs `command`, reading the `clear` confirmation key from `keys`.
    ///
    /// Argument problems are reported before the store is touched.
    pub fn run<K: KeyInput, W: Write>(
        &mut self,
        command: Option<Command>,
        keys: &mut K,
        out: &mut W,
    ) -> CliResult<()> {
        debug!(?command, "dispatching");

        match command {
            Some(Command::List { .. }) => self.store.list_expenses(out)?,
            Some(Command::Add { amount, memo, date, .. }) => {
                let (Some(amount), Some(memo)) = (amount, memo) else {
                    return Err(CliError::MissingArgument("You must provide an amount and memo."));
                };
                let amount = parse_amount(&amount)?;
                let date = date.as_deref().map(parse_date).transpose()?;
                self.store.add_expense(amount, &memo, date)?;
            }
            Some(Command::Search { query, .. }) => {
                let query = query.ok_or(CliError::MissingArgument("You must provide a query."))?;
                self.store.search_expenses(&query, out)?;
            }
            Some(Command::Delete { id, .. }) => {
                let id = id.ok_or(CliError::MissingArgument("You must provide an id."))?;
                let id = parse_id(&id)?;
                self.store.delete_expense(id, out)?;
            }
            Some(Command::Clear { .. }) => {
                if !confirm(CLEAR_PROMPT, keys, out)? {
                    return Err(CliError::UserCancelled);
                }
                self.store.delete_all_expenses(out)?;
            }
            Some(Command::Unknown(_)) | None => write!(out, "{}", HELP)?,
        }

        Ok(())
    }
}

fn parse_amount(raw: &str) -> CliResult<BigDecimal> {
    BigDecimal::from_str(raw).map_err(|_| CliError::InvalidArgument(format!("Invalid amount '{}'.", raw)))
}

fn parse_id(raw: &str) -> CliResult<i32> {
    raw.parse::<i32>()
        .map_err(|_| CliError::InvalidArgument(format!("Invalid id '{}'.", raw)))
}

fn parse_date(raw: &str) -> CliResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
        CliError::InvalidArgument(format!("Invalid date '{}', expected YYYY-MM-DD.", raw))
    })
}

pub mod db_types;
#[cfg(test)]
pub mod memory;
pub mod operations;
pub mod sql_queries;
pub mod store;

pub use db_types::{CreateExpense, Expense};
pub use operations::PgExpenseBackend;
pub use store::ExpenseStore;

use anyhow::Result;
use crate::expenses::db_types::{CreateExpense, Expense};

/// Storage seam behind [`crate::expenses::store::ExpenseStore`].
///
/// Implementations own their connection and leave constraint checking to the
/// engine they wrap.
pub trait ExpenseBackend {
    /// Creates the expense table if it does not exist yet. Must be idempotent.
    fn setup_schema(&mut self) -> Result<()>;

    /// All rows ordered by `created_on`, then `id`.
    fn all(&mut self) -> Result<Vec<Expense>>;

    fn insert(&mut self, expense: &CreateExpense) -> Result<Expense>;

    /// Rows whose memo contains `query`, ignoring case.
    fn search(&mut self, query: &str) -> Result<Vec<Expense>>;

    fn find(&mut self, id: i32) -> Result<Option<Expense>>;

    /// Returns the number of deleted rows.
    fn delete(&mut self, id: i32) -> Result<usize>;

    fn delete_all(&mut self) -> Result<usize>;
}

use anyhow::Result;
use diesel::prelude::*;
use diesel::PgConnection;
use tracing::debug;

use crate::expenses::db_types::{CreateExpense, Expense};
use crate::expenses::sql_queries;
use crate::schema::expenses as ExpensesTable;
use crate::utils::traits::ExpenseBackend;

/// Escapes LIKE wildcards so the query only ever matches as a plain substring.
pub fn like_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');
    for ch in query.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

/// Diesel-backed storage over a single Postgres connection.
pub struct PgExpenseBackend {
    conn: PgConnection,
}

impl PgExpenseBackend {
    pub fn new(conn: PgConnection) -> Self {
        Self { conn }
    }

    #[cfg(test)]
    pub fn connection(&mut self) -> &mut PgConnection {
        &mut self.conn
    }
}

impl ExpenseBackend for PgExpenseBackend {
    fn setup_schema(&mut self) -> Result<()> {
        if sql_queries::setup_schema(&mut self.conn)? {
            debug!("created table {}", sql_queries::EXPENSES_TABLE);
        }
        Ok(())
    }

    fn all(&mut self) -> Result<Vec<Expense>> {
        use crate::schema::expenses::dsl::*;

        let rows = expenses
            .order((created_on.asc(), id.asc()))
            .load::<Expense>(&mut self.conn)?;

        Ok(rows)
    }

    fn insert(&mut self, expense: &CreateExpense) -> Result<Expense> {
        let row = diesel::insert_into(ExpensesTable::table)
            .values(expense)
            .get_result::<Expense>(&mut self.conn)?;

        Ok(row)
    }

    fn search(&mut self, query: &str) -> Result<Vec<Expense>> {
        use crate::schema::expenses::dsl::*;

        let rows = expenses
            .filter(memo.ilike(like_pattern(query)))
            .order((created_on.asc(), id.asc()))
            .load::<Expense>(&mut self.conn)?;

        Ok(rows)
    }

    fn find(&mut self, expense_id: i32) -> Result<Option<Expense>> {
        let row = ExpensesTable::table
            .find(expense_id)
            .first::<Expense>(&mut self.conn)
            .optional()?;

        Ok(row)
    }

    fn delete(&mut self, expense_id: i32) -> Result<usize> {
        let deleted =
            diesel::delete(ExpensesTable::table.find(expense_id)).execute(&mut self.conn)?;

        Ok(deleted)
    }

    fn delete_all(&mut self) -> Result<usize> {
        let deleted = diesel::delete(ExpensesTable::table).execute(&mut self.conn)?;

        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn test_backend() -> PgExpenseBackend {
        let url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| crate::utils::app_config::DEFAULT_DATABASE_URL.to_string());
        let mut conn = PgConnection::establish(&url).unwrap();
        conn.begin_test_transaction().unwrap();
        let mut backend = PgExpenseBackend::new(conn);
        backend.setup_schema().unwrap();
        backend.delete_all().unwrap();
        backend
    }

    fn create(amount: &str, memo: &str, day: u32) -> CreateExpense {
        CreateExpense {
            amount: BigDecimal::from_str(amount).unwrap(),
            memo: memo.to_string(),
            created_on: NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
        }
    }

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("coffee"), "%coffee%");
        assert_eq!(like_pattern("50%"), "%50\\%%");
        assert_eq!(like_pattern("a_b"), "%a\\_b%");
        assert_eq!(like_pattern("c:\\tmp"), "%c:\\\\tmp%");
    }

    #[test]
    #[ignore = "requires a running Postgres with an expenses database"]
    fn test_pg_roundtrip() {
        let mut backend = test_backend();

        let dinner = backend.insert(&create("10", "Dinner", 2)).unwrap();
        let groceries = backend.insert(&create("5.00", "groceries", 1)).unwrap();

        let rows = backend.all().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, groceries.id);
        assert_eq!(rows[1].id, dinner.id);

        let found = backend.search("DIN").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].memo, "Dinner");

        assert_eq!(backend.delete(groceries.id).unwrap(), 1);
        assert!(backend.find(groceries.id).unwrap().is_none());
        assert_eq!(backend.delete_all().unwrap(), 1);
    }

    #[test]
    #[ignore = "requires a running Postgres with an expenses database"]
    fn test_pg_rejects_non_positive_amount() {
        let mut backend = test_backend();

        assert!(backend.insert(&create("0", "free lunch", 1)).is_err());
    }

    #[test]
    #[ignore = "requires a running Postgres with an expenses database"]
    fn test_pg_setup_schema_is_idempotent() {
        let mut backend = test_backend();

        backend.setup_schema().unwrap();
        backend.setup_schema().unwrap();
        assert!(sql_queries::table_exists(backend.connection(), sql_queries::EXPENSES_TABLE).unwrap());
    }
}

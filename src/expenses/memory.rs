use anyhow::{Result, anyhow};
use bigdecimal::BigDecimal;
use std::str::FromStr;

use crate::expenses::db_types::{CreateExpense, Expense};
use crate::utils::traits::ExpenseBackend;

/// In-process stand-in for the Postgres table, used by unit tests.
///
/// Mirrors the parts of the engine the store relies on: `decimal(6, 2)`
/// coercion, the amount check constraint, serial ids that are never reused
/// and list ordering.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    rows: Vec<Expense>,
    next_id: i32,
    pub schema_setups: usize,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    fn sorted(mut rows: Vec<Expense>) -> Vec<Expense> {
        rows.sort_by(|a, b| a.created_on.cmp(&b.created_on).then(a.id.cmp(&b.id)));
        rows
    }
}

impl ExpenseBackend for MemoryBackend {
    fn setup_schema(&mut self) -> Result<()> {
        self.schema_setups += 1;
        Ok(())
    }

    fn all(&mut self) -> Result<Vec<Expense>> {
        Ok(Self::sorted(self.rows.clone()))
    }

    fn insert(&mut self, expense: &CreateExpense) -> Result<Expense> {
        // decimal(6, 2): coerce first, then check precision and the minimum
        let amount = expense.amount.with_scale_round(2, bigdecimal::RoundingMode::HalfUp);
        if amount.abs() >= BigDecimal::from(10_000) {
            return Err(anyhow!("numeric field overflow"));
        }
        if amount < BigDecimal::from_str("0.01")? {
            return Err(anyhow!(
                "new row for relation \"expenses\" violates check constraint \"expenses_amount_check\""
            ));
        }

        self.next_id += 1;
        let row = Expense {
            id: self.next_id,
            amount,
            memo: expense.memo.clone(),
            created_on: expense.created_on,
        };
        self.rows.push(row.clone());
        Ok(row)
    }

    fn search(&mut self, query: &str) -> Result<Vec<Expense>> {
        let needle = query.to_lowercase();
        let matches = self
            .rows
            .iter()
            .filter(|row| row.memo.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        Ok(Self::sorted(matches))
    }

    fn find(&mut self, id: i32) -> Result<Option<Expense>> {
        Ok(self.rows.iter().find(|row| row.id == id).cloned())
    }

    fn delete(&mut self, id: i32) -> Result<usize> {
        let before = self.rows.len();
        self.rows.retain(|row| row.id != id);
        Ok(before - self.rows.len())
    }

    fn delete_all(&mut self) -> Result<usize> {
        let deleted = self.rows.len();
        self.rows.clear();
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn create(amount: &str) -> CreateExpense {
        CreateExpense {
            amount: BigDecimal::from_str(amount).unwrap(),
            memo: "snack".to_string(),
            created_on: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        }
    }

    #[test]
    fn test_amount_is_rounded_before_the_minimum_check() {
        let mut backend = MemoryBackend::new();

        let row = backend.insert(&create("0.005")).unwrap();
        assert_eq!(row.amount, BigDecimal::from_str("0.01").unwrap());
        assert!(backend.insert(&create("0.004")).is_err());
    }

    #[test]
    fn test_amount_precision_limit() {
        let mut backend = MemoryBackend::new();

        assert!(backend.insert(&create("9999.99")).is_ok());
        assert!(backend.insert(&create("9999.995")).is_err());
        assert!(backend.insert(&create("10000")).is_err());
        assert_eq!(backend.len(), 1);
    }
}

use bigdecimal::BigDecimal;

use crate::expenses::db_types::Expense;

pub const SEPARATOR_WIDTH: usize = 50;

/// Format BigDecimal with 2 decimal places
pub fn format_decimal(value: &BigDecimal) -> String {
    let scale = 2;
    let rounded = value.with_scale_round(scale, bigdecimal::RoundingMode::HalfUp);
    rounded.to_string()
}

/// Pluralized line announcing how many expenses follow
pub fn format_count(count: usize) -> String {
    match count {
        0 => "There are no expenses.".to_string(),
        1 => "There is 1 expense.".to_string(),
        n => format!("There are {} expenses.", n),
    }
}

/// One expense as `id | date | amount | memo`
pub fn format_expense_row(expense: &Expense) -> String {
    format!(
        "{:>3} | {:>10} | {:>12} | {}",
        expense.id,
        expense.created_on.format("%Y-%m-%d").to_string(),
        format_decimal(&expense.amount),
        expense.memo
    )
}

pub fn format_separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

pub fn format_total(total: &BigDecimal) -> String {
    format!("Total {:>25}", format_decimal(total))
}

/// Rows, separator and total line for a non-empty result set
pub fn format_expenses(expenses: &[Expense]) -> Vec<String> {
    let mut lines: Vec<String> = expenses.iter().map(format_expense_row).collect();
    let total: BigDecimal = expenses.iter().map(|e| &e.amount).sum();

    lines.push(format_separator());
    lines.push(format_total(&total));
    lines
}

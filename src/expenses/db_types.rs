use crate::schema::expenses as ExpensesTable;
use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use diesel::{Insertable, Queryable};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Queryable)]
#[diesel(table_name = ExpensesTable)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Expense {
    pub id: i32,
    pub amount: BigDecimal,
    pub memo: String,
    pub created_on: NaiveDate,
}

#[derive(Serialize, Deserialize, Debug, Clone, Insertable)]
#[diesel(table_name = ExpensesTable)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CreateExpense {
    pub amount: BigDecimal,
    pub memo: String,
    pub created_on: NaiveDate,
}

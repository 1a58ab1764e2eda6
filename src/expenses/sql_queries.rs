use anyhow::Result;
use diesel::prelude::*;
use diesel::{PgConnection, QueryableByName};
use serde::{Deserialize, Serialize};

pub const EXPENSES_TABLE: &str = "expenses";

const TABLE_EXISTS_QUERY: &str = r"
SELECT COUNT(*) AS count
FROM information_schema.tables
WHERE table_schema = 'public' AND table_name = $1;
";

const CREATE_EXPENSES_TABLE: &str = r"
CREATE TABLE expenses (
    id serial PRIMARY KEY,
    amount decimal(6, 2) NOT NULL CHECK (amount >= 0.01),
    memo text NOT NULL,
    created_on date NOT NULL DEFAULT CURRENT_DATE
);
";

#[derive(Serialize, Deserialize, QueryableByName)]
pub struct TableCount {
    #[diesel(sql_type = diesel::sql_types::BigInt)]
    pub count: i64,
}

pub fn table_exists(conn: &mut PgConnection, table: &str) -> Result<bool> {
    let res = diesel::sql_query(TABLE_EXISTS_QUERY)
        .bind::<diesel::sql_types::Text, _>(table)
        .get_result::<TableCount>(conn)?;

    Ok(res.count > 0)
}

/// Creates the `expenses` table unless the catalog already lists it.
///
/// Returns `true` when the table was created by this call.
pub fn setup_schema(conn: &mut PgConnection) -> Result<bool> {
    if table_exists(conn, EXPENSES_TABLE)? {
        return Ok(false);
    }

    diesel::sql_query(CREATE_EXPENSES_TABLE).execute(conn)?;
    Ok(true)
}

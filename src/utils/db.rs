use anyhow::{Context, Result};
use diesel::{Connection, PgConnection};
use tracing::debug;

pub fn establish_connection(database_url: &str) -> Result<PgConnection> {
    debug!(database_url, "connecting to database");
    let conn = PgConnection::establish(database_url)
        .with_context(|| format!("could not connect to {}", database_url))?;

    Ok(conn)
}

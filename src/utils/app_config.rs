use anyhow::Result;
use diesel::PgConnection;

use crate::utils::db::establish_connection;

/// Local socket, current user, database `expenses`.
pub const DEFAULT_DATABASE_URL: &str = "postgres:///expenses";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
}

impl AppConfig {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
        }
    }

    pub fn connect(&self) -> Result<PgConnection> {
        establish_connection(&self.database_url)
    }
}

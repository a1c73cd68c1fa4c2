//! Database connection management

use std::{str::FromStr, time::Duration};

use sqlx::{
    Sqlite, SqlitePool, Transaction, raw_sql,
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions},
};

/// Schema applied on every start; every statement is idempotent.
const SCHEMA_SQL: &str = include_str!("sql/schema.sql");

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Shared handle to the product store.
#[derive(Debug, Clone)]
pub struct Db {
    pool: SqlitePool,
}

impl Db {
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Begin a read transaction.
    ///
    /// # Errors
    ///
    /// Returns an error when no connection can be acquired or `BEGIN` fails.
    pub async fn begin_transaction(&self) -> Result<Transaction<'static, Sqlite>, sqlx::Error> {
        self.pool.begin().await
    }

    /// Begin a transaction that holds the write lock from its first statement.
    ///
    /// Every unit of work that writes starts here.
    ///
    /// # Errors
    ///
    /// Returns an error when no connection can be acquired or the lock is not
    /// granted within the busy timeout.
    pub async fn begin_write_transaction(
        &self,
    ) -> Result<Transaction<'static, Sqlite>, sqlx::Error> {
        self.pool.begin_with("BEGIN IMMEDIATE").await
    }

    /// Close every pooled connection. Further use of the handle fails.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// Connect to SQLite, creating the database file when it does not exist.
///
/// An in-memory URL is pinned to a single long-lived connection, since every
/// SQLite connection to `:memory:` opens a separate empty database.
///
/// # Errors
///
/// Returns an error if the URL is invalid or the connection cannot be established.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(BUSY_TIMEOUT);

    let pool_options = if database_url.contains(":memory:") {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(max_connections.max(1))
    };

    pool_options.connect_with(options).await
}

/// Create the `products` and `inventory_history` tables if they are missing.
///
/// # Errors
///
/// Returns an error when any schema statement fails.
pub async fn initialise_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    raw_sql(SCHEMA_SQL).execute(pool).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use sqlx::query_scalar;
    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    async fn initialise_schema_is_idempotent() -> TestResult {
        let pool = connect("sqlite::memory:", 1).await?;

        initialise_schema(&pool).await?;
        initialise_schema(&pool).await?;

        let tables: Vec<String> = query_scalar(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' \
             ORDER BY name",
        )
        .fetch_all(&pool)
        .await?;

        assert_eq!(tables, vec!["inventory_history", "products"]);

        Ok(())
    }

    #[tokio::test]
    async fn connections_enforce_foreign_keys() -> TestResult {
        let pool = connect("sqlite::memory:", 1).await?;

        let enabled: i64 = query_scalar("PRAGMA foreign_keys").fetch_one(&pool).await?;

        assert_eq!(enabled, 1);

        Ok(())
    }
}

//! Database setup and initialization.
//!
//! Entry points call [`setup_database`] with the resolved database path. The
//! schema is derived from `absantee_core::schema::ALL_ENTITIES`.

use anyhow::Result;
use absantee_core::ALL_ENTITIES;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode};
#[cfg(any(test, feature = "test-utils"))]
use sqlx::sqlite::SqlitePoolOptions;
use std::path::Path;

use crate::schema::create_table_sql;

/// Sets up the `SQLite` database connection and ensures the schema exists.
///
/// Creates the parent directory and the database file if missing, enables
/// WAL so readers are not blocked by an open unit of work, and creates every
/// configured table.
///
/// # Example
///
/// ```rust,no_run
/// use absantee_db::setup_database;
/// use std::path::Path;
///
/// # async fn example() -> anyhow::Result<()> {
/// let pool = setup_database(Path::new("/path/to/absantee.db")).await?;
/// # Ok(())
/// # }
/// ```
pub async fn setup_database(db_path: &Path) -> Result<SqlitePool> {
    // Ensure parent directory exists
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let pool = SqlitePool::connect_with(
        SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .foreign_keys(true),
    )
    .await?;

    create_schema(&pool).await?;

    tracing::debug!(
        target: "absantee.db",
        path = %db_path.display(),
        tables = ALL_ENTITIES.len(),
        "Database ready"
    );

    Ok(pool)
}

/// Sets up an in-memory `SQLite` database for testing.
///
/// Every connection to `sqlite::memory:` is a separate database, so the pool
/// is limited to a single connection.
#[cfg(any(test, feature = "test-utils"))]
pub async fn setup_test_database() -> Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;
    create_schema(&pool).await?;
    Ok(pool)
}

/// Creates every configured table.
///
/// Safe to call multiple times; all statements use IF NOT EXISTS.
pub(crate) async fn create_schema(pool: &SqlitePool) -> Result<()> {
    for config in ALL_ENTITIES {
        sqlx::query(&create_table_sql(config)).execute(pool).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_setup_test_database() {
        let pool = setup_test_database().await.unwrap();

        // Verify tables exist by querying them
        for table in ["categories", "colaborators"] {
            let (count,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
                .fetch_one(&pool)
                .await
                .unwrap();
            assert_eq!(count, 0);
        }
    }

    #[tokio::test]
    async fn test_setup_database_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("absantee.db");

        let pool = setup_database(&path).await.unwrap();
        sqlx::query("INSERT INTO categories (description, active) VALUES ('Books', 1)")
            .execute(&pool)
            .await
            .unwrap();
        pool.close().await;

        // Reopening keeps existing rows
        let pool = setup_database(&path).await.unwrap();
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM categories")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_check_constraint_enforced_by_store() {
        let pool = setup_test_database().await.unwrap();

        let result = sqlx::query("INSERT INTO categories (description, active) VALUES (?, 1)")
            .bind("x".repeat(101))
            .execute(&pool)
            .await;

        assert!(result.is_err());
    }
}

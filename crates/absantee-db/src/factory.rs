//! Composition utilities for building `AppCore` with `SQLite` backends.
//!
//! This module provides factory functions for wiring up the application
//! with `SQLite` repositories. It is focused purely on construction and
//! should not contain any domain logic.

use sqlx::SqlitePool;
use std::sync::Arc;

use absantee_core::{AppCore, Repos};

use crate::context::DataContext;
use crate::repositories::{SqliteCategoryRepository, SqliteColaboratorRepository};

/// Factory for creating repository instances with `SQLite` backends.
pub struct CoreFactory;

impl CoreFactory {
    /// Build all `SQLite` repositories from a pool.
    ///
    /// Returns a `Repos` struct from `absantee-core` containing
    /// trait-object-wrapped repositories.
    pub fn build_repos(pool: SqlitePool) -> Repos {
        Repos::new(
            Arc::new(SqliteCategoryRepository::new(pool.clone())),
            Arc::new(SqliteColaboratorRepository::new(pool)),
        )
    }

    /// Build a complete `AppCore` instance from a pool.
    ///
    /// ```ignore
    /// let pool = setup_database(&db_path).await?;
    /// let core = CoreFactory::build_app_core(pool);
    /// ```
    pub fn build_app_core(pool: SqlitePool) -> AppCore {
        AppCore::new(Self::build_repos(pool))
    }

    /// Persistence context sharing the same pool as the repositories.
    pub const fn data_context(pool: SqlitePool) -> DataContext {
        DataContext::new(pool)
    }
}

/// Test database helper for integration tests.
///
/// Backed by a file in a temporary directory so that every pooled connection
/// sees the same data. The directory is removed when the `TestDb` is dropped.
#[cfg(any(test, feature = "test-utils"))]
pub struct TestDb {
    pool: SqlitePool,
    dir: tempfile::TempDir,
}

#[cfg(any(test, feature = "test-utils"))]
impl TestDb {
    /// Create a fresh database with the full schema applied.
    pub async fn new() -> anyhow::Result<Self> {
        let dir = tempfile::Builder::new().prefix("absantee-test-").tempdir()?;
        let pool = crate::setup_database(&dir.path().join("absantee.db")).await?;
        Ok(Self { pool, dir })
    }

    /// Get a reference to the pool.
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Path of the backing database file.
    pub fn path(&self) -> std::path::PathBuf {
        self.dir.path().join("absantee.db")
    }

    /// Close the pool and delete the backing directory.
    pub async fn close(self) -> anyhow::Result<()> {
        self.pool.close().await;
        self.dir.close()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use absantee_core::{NewCategory, NewColaborator};

    #[tokio::test]
    async fn test_build_app_core() {
        let db = TestDb::new().await.unwrap();
        let core = CoreFactory::build_app_core(db.pool().clone());

        core.categories()
            .create(NewCategory::active("Books"))
            .await
            .unwrap();
        assert_eq!(core.categories().list().await.unwrap().len(), 1);
        assert!(core.colaborators().list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_context_and_repositories_share_store() {
        let db = TestDb::new().await.unwrap();
        let ctx = CoreFactory::data_context(db.pool().clone());
        let core = CoreFactory::build_app_core(db.pool().clone());

        let mut scope = ctx.open_scope();
        scope
            .add(&NewColaborator {
                name: "Ana".to_string(),
                email: "ana@example.com".to_string(),
                street: "Rua Nova".to_string(),
                postal_code: "4000-001".to_string(),
            })
            .unwrap();
        scope.save_changes().await.unwrap();

        let listed = core.colaborators().list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "Ana");
    }

    #[tokio::test]
    async fn test_close_removes_backing_file() {
        let db = TestDb::new().await.unwrap();
        let path = db.path();
        assert!(path.exists());

        db.close().await.unwrap();
        assert!(!path.exists());
    }
}

//! `SQLite` implementation of the `ColaboratorRepository` trait.

use async_trait::async_trait;
use sqlx::SqlitePool;

use absantee_core::{Colaborator, ColaboratorRepository, NewColaborator, PersistenceError};

use super::{fetch_all, fetch_by_key, insert_row};

/// `SQLite` implementation of the `ColaboratorRepository` trait.
pub struct SqliteColaboratorRepository {
    pool: SqlitePool,
}

impl SqliteColaboratorRepository {
    /// Create a new `SQLite` colaborator repository.
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ColaboratorRepository for SqliteColaboratorRepository {
    async fn list(&self) -> Result<Vec<Colaborator>, PersistenceError> {
        fetch_all(&self.pool).await
    }

    async fn get_by_id(&self, id: i64) -> Result<Colaborator, PersistenceError> {
        fetch_by_key(&self.pool, id).await
    }

    async fn insert(&self, colaborator: &NewColaborator) -> Result<Colaborator, PersistenceError> {
        let id = insert_row(&self.pool, colaborator).await?;
        Ok(colaborator.clone().with_id(id))
    }
}

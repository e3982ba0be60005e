//! Colaborator repository trait definition.

use async_trait::async_trait;

use super::PersistenceError;
use crate::domain::{Colaborator, NewColaborator};

/// Repository for colaborator persistence operations.
#[async_trait]
pub trait ColaboratorRepository: Send + Sync {
    /// List all colaborators in insertion order.
    async fn list(&self) -> Result<Vec<Colaborator>, PersistenceError>;

    /// Get a colaborator by id.
    ///
    /// Returns `Err(PersistenceError::NotFound)` if it doesn't exist.
    async fn get_by_id(&self, id: i64) -> Result<Colaborator, PersistenceError>;

    /// Insert a new colaborator and return it with its assigned id.
    async fn insert(&self, colaborator: &NewColaborator) -> Result<Colaborator, PersistenceError>;
}

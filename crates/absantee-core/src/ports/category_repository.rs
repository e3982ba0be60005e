//! Category repository trait definition.

use async_trait::async_trait;

use super::PersistenceError;
use crate::domain::{Category, NewCategory};

/// Repository for category persistence operations.
///
/// `list` returns categories in insertion order.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// List all categories.
    async fn list(&self) -> Result<Vec<Category>, PersistenceError>;

    /// Get a category by its id.
    ///
    /// Returns `Err(PersistenceError::NotFound)` if it doesn't exist.
    async fn get_by_id(&self, id: i64) -> Result<Category, PersistenceError>;

    /// Insert a new category and return it with its assigned id.
    async fn insert(&self, category: &NewCategory) -> Result<Category, PersistenceError>;

    /// Overwrite an existing category.
    ///
    /// Returns `Err(PersistenceError::NotFound)` if it doesn't exist.
    async fn update(&self, category: &Category) -> Result<(), PersistenceError>;

    /// Delete a category by id.
    ///
    /// Returns `Err(PersistenceError::NotFound)` if it doesn't exist.
    async fn delete(&self, id: i64) -> Result<(), PersistenceError>;
}

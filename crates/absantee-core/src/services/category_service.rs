//! Category service - orchestrates category operations.

use std::sync::Arc;

use crate::domain::{Category, CategoryUpdate, NewCategory};
use crate::ports::{CategoryRepository, CoreError};
use crate::schema::CATEGORY;

/// Service for category operations.
pub struct CategoryService {
    repo: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    /// Create a new category service.
    pub fn new(repo: Arc<dyn CategoryRepository>) -> Self {
        Self { repo }
    }

    /// List all categories.
    pub async fn list(&self) -> Result<Vec<Category>, CoreError> {
        self.repo.list().await.map_err(CoreError::from)
    }

    /// Get a category by id.
    pub async fn get(&self, id: i64) -> Result<Category, CoreError> {
        self.repo.get_by_id(id).await.map_err(CoreError::from)
    }

    /// Validate and store a new category.
    pub async fn create(&self, category: NewCategory) -> Result<Category, CoreError> {
        CATEGORY
            .validate(&category.column_values())
            .map_err(|e| CoreError::Validation(e.to_string()))?;
        Ok(self.repo.insert(&category).await?)
    }

    /// Apply a partial update and return the stored result.
    pub async fn update(&self, id: i64, update: CategoryUpdate) -> Result<Category, CoreError> {
        let mut category = self.repo.get_by_id(id).await?;
        category.apply(update);
        CATEGORY
            .validate(&category.column_values())
            .map_err(|e| CoreError::Validation(e.to_string()))?;
        self.repo.update(&category).await?;
        Ok(category)
    }

    /// Delete a category, returning what was removed.
    pub async fn delete(&self, id: i64) -> Result<Category, CoreError> {
        let category = self.repo.get_by_id(id).await?;
        self.repo.delete(id).await?;
        tracing::debug!(id, "Category deleted");
        Ok(category)
    }
}

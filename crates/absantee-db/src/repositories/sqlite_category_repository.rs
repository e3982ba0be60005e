//! `SQLite` implementation of the `CategoryRepository` trait.

use async_trait::async_trait;
use sqlx::SqlitePool;

use absantee_core::schema::CATEGORY;
use absantee_core::{Category, CategoryRepository, NewCategory, PersistenceError};

use super::{fetch_all, fetch_by_key, insert_row};
use crate::entity::{Entity, bind_values};
use crate::error::map_sqlx;
use crate::schema::{delete_by_key_sql, update_by_key_sql};

/// `SQLite` implementation of the `CategoryRepository` trait.
pub struct SqliteCategoryRepository {
    pool: SqlitePool,
}

impl SqliteCategoryRepository {
    /// Create a new `SQLite` category repository.
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for SqliteCategoryRepository {
    async fn list(&self) -> Result<Vec<Category>, PersistenceError> {
        fetch_all(&self.pool).await
    }

    async fn get_by_id(&self, id: i64) -> Result<Category, PersistenceError> {
        fetch_by_key(&self.pool, id).await
    }

    async fn insert(&self, category: &NewCategory) -> Result<Category, PersistenceError> {
        let id = insert_row(&self.pool, category).await?;
        Ok(Category {
            id,
            description: category.description.clone(),
            active: category.active,
        })
    }

    async fn update(&self, category: &Category) -> Result<(), PersistenceError> {
        let values = category.values();
        CATEGORY.validate(&values)?;

        let sql = update_by_key_sql(&CATEGORY);
        let result = bind_values(sqlx::query(&sql), values)
            .bind(category.id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(PersistenceError::NotFound(format!(
                "Category with ID {}",
                category.id
            )));
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), PersistenceError> {
        let sql = delete_by_key_sql(&CATEGORY);
        let result = sqlx::query(&sql)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(PersistenceError::NotFound(format!("Category with ID {id}")));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup_test_database;

    async fn repo() -> SqliteCategoryRepository {
        SqliteCategoryRepository::new(setup_test_database().await.unwrap())
    }

    #[tokio::test]
    async fn test_crud_round_trip() {
        let repo = repo().await;

        let mut books = repo.insert(&NewCategory::active("Books")).await.unwrap();
        repo.insert(&NewCategory::active("Music")).await.unwrap();

        books.active = false;
        repo.update(&books).await.unwrap();
        assert!(!repo.get_by_id(books.id).await.unwrap().active);

        repo.delete(books.id).await.unwrap();
        let remaining = repo.list().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].description, "Music");
    }

    #[tokio::test]
    async fn test_update_missing_returns_not_found() {
        let repo = repo().await;
        let ghost = Category {
            id: 7,
            description: "Ghost".to_string(),
            active: true,
        };

        assert!(matches!(
            repo.update(&ghost).await,
            Err(PersistenceError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_delete_missing_returns_not_found() {
        let repo = repo().await;
        assert!(matches!(
            repo.delete(7).await,
            Err(PersistenceError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_list_orders_by_insertion() {
        let repo = repo().await;
        for name in ["Zeta", "Alpha", "Mid"] {
            repo.insert(&NewCategory::active(name)).await.unwrap();
        }

        let names: Vec<_> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.description)
            .collect();
        assert_eq!(names, ["Zeta", "Alpha", "Mid"]);
    }
}

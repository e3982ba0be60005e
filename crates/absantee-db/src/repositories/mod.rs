//! Repository implementations using `SQLite`.
//!
//! These implementations encapsulate all SQL and database access. The
//! `SqlitePool` is confined to this crate and never exposed through the port
//! trait signatures. Statements are derived from the entity configuration.

mod sqlite_category_repository;
mod sqlite_colaborator_repository;

pub use sqlite_category_repository::SqliteCategoryRepository;
pub use sqlite_colaborator_repository::SqliteColaboratorRepository;

use absantee_core::PersistenceError;
use sqlx::SqlitePool;

use crate::entity::{Entity, Insertable, bind_values};
use crate::error::map_sqlx;
use crate::schema::{insert_sql, select_all_sql, select_by_key_sql};

/// All rows of `T` in insertion order.
async fn fetch_all<T: Entity>(pool: &SqlitePool) -> Result<Vec<T>, PersistenceError> {
    let sql = select_all_sql(T::config());
    let rows = sqlx::query(&sql).fetch_all(pool).await.map_err(map_sqlx)?;
    rows.iter().map(T::from_row).collect()
}

/// One row of `T` by key, or `NotFound`.
async fn fetch_by_key<T: Entity>(pool: &SqlitePool, id: i64) -> Result<T, PersistenceError> {
    let config = T::config();
    let sql = select_by_key_sql(config);
    let row = sqlx::query(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| PersistenceError::NotFound(format!("{} with ID {id}", config.name)))?;
    T::from_row(&row)
}

/// Insert a row and return its assigned key.
async fn insert_row<N: Insertable>(pool: &SqlitePool, new: &N) -> Result<i64, PersistenceError> {
    let config = N::Entity::config();
    let values = new.values();
    config.validate(&values)?;

    let sql = insert_sql(config);
    let result = bind_values(sqlx::query(&sql), values)
        .execute(pool)
        .await
        .map_err(map_sqlx)?;
    Ok(result.last_insert_rowid())
}

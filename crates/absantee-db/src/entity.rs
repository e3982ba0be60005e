//! Binding between domain types and their storage mapping.

use absantee_core::schema::{CATEGORY, COLABORATOR};
use absantee_core::{
    Category, Colaborator, ColumnValue, EntityConfig, NewCategory, NewColaborator,
    PersistenceError,
};
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::query::Query;
use sqlx::{Row, Sqlite};

use crate::error::map_sqlx;

/// A domain type persisted through a static [`EntityConfig`].
pub trait Entity: Sized + Send + Unpin + 'static {
    /// The storage mapping for this type.
    fn config() -> &'static EntityConfig;

    /// Non-key column values in configuration order.
    fn values(&self) -> Vec<ColumnValue>;

    /// Decode a row selected with [`crate::schema::select_columns`].
    fn from_row(row: &SqliteRow) -> Result<Self, PersistenceError>;
}

/// Data that can be queued for insertion as a row of [`Insertable::Entity`].
pub trait Insertable: Send + Sync {
    type Entity: Entity;

    /// Non-key column values in configuration order.
    fn values(&self) -> Vec<ColumnValue>;
}

impl Entity for Category {
    fn config() -> &'static EntityConfig {
        &CATEGORY
    }

    fn values(&self) -> Vec<ColumnValue> {
        self.column_values()
    }

    fn from_row(row: &SqliteRow) -> Result<Self, PersistenceError> {
        Ok(Self {
            id: row.try_get("id").map_err(map_sqlx)?,
            description: row.try_get("description").map_err(map_sqlx)?,
            active: row.try_get("active").map_err(map_sqlx)?,
        })
    }
}

impl Entity for Colaborator {
    fn config() -> &'static EntityConfig {
        &COLABORATOR
    }

    fn values(&self) -> Vec<ColumnValue> {
        self.column_values()
    }

    fn from_row(row: &SqliteRow) -> Result<Self, PersistenceError> {
        Ok(Self {
            id: row.try_get("id").map_err(map_sqlx)?,
            name: row.try_get("name").map_err(map_sqlx)?,
            email: row.try_get("email").map_err(map_sqlx)?,
            street: row.try_get("street").map_err(map_sqlx)?,
            postal_code: row.try_get("postal_code").map_err(map_sqlx)?,
        })
    }
}

impl Insertable for NewCategory {
    type Entity = Category;

    fn values(&self) -> Vec<ColumnValue> {
        self.column_values()
    }
}

impl Insertable for NewColaborator {
    type Entity = Colaborator;

    fn values(&self) -> Vec<ColumnValue> {
        self.column_values()
    }
}

/// Bind column values to a query in order.
pub(crate) fn bind_values<'q>(
    mut query: Query<'q, Sqlite, SqliteArguments<'q>>,
    values: Vec<ColumnValue>,
) -> Query<'q, Sqlite, SqliteArguments<'q>> {
    for value in values {
        query = match value {
            ColumnValue::Integer(v) => query.bind(v),
            ColumnValue::Text(v) => query.bind(v),
            ColumnValue::Boolean(v) => query.bind(v),
            ColumnValue::Null => query.bind(None::<String>),
        };
    }
    query
}

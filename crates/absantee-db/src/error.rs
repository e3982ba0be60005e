//! Mapping from `sqlx` errors to the core persistence taxonomy.

use absantee_core::PersistenceError;
use sqlx::error::ErrorKind;

/// Convert a `sqlx` error, keeping constraint violations distinguishable.
pub(crate) fn map_sqlx(err: sqlx::Error) -> PersistenceError {
    match err {
        sqlx::Error::RowNotFound => PersistenceError::NotFound("row".to_string()),
        sqlx::Error::Database(ref db) => match db.kind() {
            ErrorKind::UniqueViolation
            | ErrorKind::ForeignKeyViolation
            | ErrorKind::NotNullViolation
            | ErrorKind::CheckViolation => PersistenceError::Constraint(db.message().to_string()),
            _ => PersistenceError::Storage(err.to_string()),
        },
        sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
            PersistenceError::Serialization(err.to_string())
        }
        other => PersistenceError::Storage(other.to_string()),
    }
}

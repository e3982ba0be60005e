//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` types in any signature
//! - Traits are minimal and CRUD-focused for repositories

pub mod category_repository;
pub mod colaborator_repository;

use std::sync::Arc;
use thiserror::Error;

pub use category_repository::CategoryRepository;
pub use colaborator_repository::ColaboratorRepository;

/// Container for all repository trait objects.
///
/// Lives in `absantee-core` so that `AppCore` can accept it without
/// depending on `absantee-db`.
#[derive(Clone)]
pub struct Repos {
    /// Category repository.
    pub categories: Arc<dyn CategoryRepository>,
    /// Colaborator repository.
    pub colaborators: Arc<dyn ColaboratorRepository>,
}

impl Repos {
    /// Create a new Repos container.
    pub fn new(
        categories: Arc<dyn CategoryRepository>,
        colaborators: Arc<dyn ColaboratorRepository>,
    ) -> Self {
        Self {
            categories,
            colaborators,
        }
    }
}

/// Errors raised by the backing store.
///
/// Abstracts away storage implementation details (e.g., sqlx errors).
/// A failed commit never leaves a partially applied change set behind.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Storage backend error (connectivity, I/O, aborted transaction).
    #[error("Storage error: {0}")]
    Storage(String),

    /// A constraint was violated (required column, max length, key).
    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// A stored value could not be decoded.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Core error type for semantic domain errors.
///
/// Adapters should map this to their own error types (HTTP status codes,
/// CLI exit codes).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Persistence operation failed.
    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    /// Validation error (invalid input).
    #[error("Validation error: {0}")]
    Validation(String),
}

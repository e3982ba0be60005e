#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]

pub mod context;
pub mod entity;
mod error;
pub mod factory;
pub mod repositories;
pub mod schema;
pub mod setup;

pub use context::{DataContext, DataScope};
pub use entity::{Entity, Insertable};
pub use factory::CoreFactory;

// Re-export TestDb for integration tests
#[cfg(any(test, feature = "test-utils"))]
pub use factory::TestDb;

pub use repositories::{SqliteCategoryRepository, SqliteColaboratorRepository};

pub use setup::setup_database;
pub use sqlx::SqlitePool;
#[cfg(any(test, feature = "test-utils"))]
pub use setup::setup_test_database;

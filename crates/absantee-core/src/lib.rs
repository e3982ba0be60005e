#![doc = include_str!("../README.md")]

pub mod domain;
pub mod paths;
pub mod ports;
pub mod schema;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    Category, CategoryUpdate, Colaborator, NewCategory, NewColaborator, WEATHER_SUMMARIES,
    WeatherForecast,
};
pub use ports::{
    CategoryRepository, ColaboratorRepository, CoreError, PersistenceError, Repos,
};
pub use schema::{ALL_ENTITIES, ColumnKind, ColumnSpec, ColumnValue, EntityConfig};
pub use services::{AppCore, CategoryService, ColaboratorService, WeatherService};

// Re-export path utilities
pub use paths::{DATA_DIR_ENV, DATABASE_FILE_NAME, PathError, data_root, database_path};

//! Data directory and database path resolution.
//!
//! The data root is `$ABSANTEE_DATA_DIR` when set, otherwise the platform
//! data directory joined with `absantee`.

use std::env;
use std::fs;
use std::path::PathBuf;

use thiserror::Error;

/// Environment variable overriding the data root.
pub const DATA_DIR_ENV: &str = "ABSANTEE_DATA_DIR";

/// File name of the `SQLite` database inside the data root.
pub const DATABASE_FILE_NAME: &str = "absantee.db";

/// Errors that can occur during path resolution.
#[derive(Debug, Error)]
pub enum PathError {
    /// Could not determine the system data directory.
    #[error("Cannot determine system data directory")]
    NoDataDir,

    /// Failed to create a directory.
    #[error("Failed to create directory {path}: {reason}")]
    CreateFailed { path: PathBuf, reason: String },
}

/// Resolve the data root without creating it.
pub fn data_root() -> Result<PathBuf, PathError> {
    if let Some(dir) = env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    dirs::data_dir()
        .map(|d| d.join("absantee"))
        .ok_or(PathError::NoDataDir)
}

/// Get the path to the database file.
///
/// The data root is created if it doesn't exist.
pub fn database_path() -> Result<PathBuf, PathError> {
    let root = data_root()?;

    fs::create_dir_all(&root).map_err(|e| PathError::CreateFailed {
        path: root.clone(),
        reason: e.to_string(),
    })?;

    Ok(root.join(DATABASE_FILE_NAME))
}

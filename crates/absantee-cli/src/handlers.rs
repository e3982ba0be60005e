//! Command handlers.

use std::path::PathBuf;

use absantee_axum::{ServerConfig, start_server};
use absantee_core::database_path;
use absantee_db::setup_database;
use anyhow::Result;

/// Build the server configuration from command-line options.
pub fn server_config(
    host: String,
    port: u16,
    database: Option<PathBuf>,
    allow_origin: Vec<String>,
) -> Result<ServerConfig> {
    let config = match database {
        Some(path) => ServerConfig::new(path),
        None => ServerConfig::with_defaults()?,
    }
    .with_host(host)
    .with_port(port);

    Ok(if allow_origin.is_empty() {
        config
    } else {
        config.with_allowed_origins(allow_origin)
    })
}

/// Run the HTTP server until interrupted.
pub async fn serve(config: ServerConfig) -> Result<()> {
    start_server(config).await
}

/// Create the database schema and report where it lives.
pub async fn init_db(database: Option<PathBuf>) -> Result<PathBuf> {
    let path = match database {
        Some(path) => path,
        None => database_path()?,
    };

    let pool = setup_database(&path).await?;
    pool.close().await;

    tracing::info!(path = %path.display(), "Database initialized");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use absantee_axum::CorsConfig;

    #[test]
    fn test_server_config_from_options() {
        let config = server_config(
            "0.0.0.0".into(),
            8080,
            Some(PathBuf::from("/tmp/absantee.db")),
            vec![],
        )
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.cors, CorsConfig::AllowAll);
        assert_eq!(config.database_path, PathBuf::from("/tmp/absantee.db"));
    }

    #[test]
    fn test_origins_restrict_cors() {
        let config = server_config(
            "127.0.0.1".into(),
            5000,
            Some(PathBuf::from("x.db")),
            vec!["http://localhost:3000".into()],
        )
        .unwrap();

        assert_eq!(
            config.cors,
            CorsConfig::AllowOrigins(vec!["http://localhost:3000".into()])
        );
    }

    #[tokio::test]
    async fn test_init_db_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("absantee.db");

        let created = init_db(Some(path.clone())).await.unwrap();

        assert_eq!(created, path);
        assert!(path.exists());
    }
}

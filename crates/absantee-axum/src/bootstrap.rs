//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the Axum web adapter. All concrete implementations are instantiated here.

use std::path::PathBuf;
use std::sync::Arc;

use absantee_core::AppCore;
use absantee_core::paths::database_path;
use absantee_db::{CoreFactory, DataContext, SqlitePool, setup_database};
use anyhow::{Context, Result};

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 5000;

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port for the HTTP server.
    pub port: u16,
    /// `SQLite` database file.
    pub database_path: PathBuf,
    /// CORS configuration.
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Config for a given database file, listening on `127.0.0.1:5000`.
    pub fn new(database_path: impl Into<PathBuf>) -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            database_path: database_path.into(),
            cors: CorsConfig::default(),
        }
    }

    /// Create config with default paths.
    pub fn with_defaults() -> Result<Self> {
        Ok(Self::new(database_path()?))
    }

    /// Set the bind address.
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the port.
    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }
}

/// Application context for the Axum adapter.
///
/// Holds the core facade and the persistence context. Both share one pool.
pub struct AxumContext {
    /// The core application facade.
    pub core: Arc<AppCore>,
    /// Unit-of-work access to the store.
    pub data: DataContext,
}

impl AxumContext {
    /// Wire every service over an initialized pool.
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self {
            core: Arc::new(CoreFactory::build_app_core(pool.clone())),
            data: CoreFactory::data_context(pool),
        }
    }
}

/// Bootstrap the Axum server with all services.
pub async fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    tracing::info!(
        target: "absantee.paths",
        database_path = %config.database_path.display(),
        "Axum bootstrap resolved paths"
    );

    let pool = setup_database(&config.database_path).await?;
    Ok(AxumContext::from_pool(pool))
}

/// Start the web server and serve until Ctrl-C.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;
    use tracing::info;

    let ctx = bootstrap(&config).await?;
    let pool = ctx.data.pool().clone();
    let app = crate::routes::create_router(ctx, &config.cors);

    let listener = TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", config.host, config.port))?;
    info!("absantee web server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("absantee web server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

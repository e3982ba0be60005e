//! In-process application host with an isolated store.
//!
//! Each [`TestHost`] owns a temporary directory holding its `SQLite` file,
//! a pool over that file, and a server task on an ephemeral port. Nothing is
//! shared between hosts, so tests may run in parallel.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use absantee_axum::{AxumContext, CorsConfig, start_embedded_server};
use absantee_core::AppCore;
use absantee_db::{DataContext, DataScope, SqlitePool, setup_database};
use tempfile::TempDir;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::client::{ClientOptions, TestClient};
use crate::error::HarnessError;

/// File name of the per-host database.
pub const DATABASE_FILE_NAME: &str = "absantee-test.db";

/// A running application instance.
///
/// Call [`TestHost::shutdown`] to stop it and wait for cleanup. If the host
/// is dropped instead (including while a test panics) the server task is
/// cancelled and aborted and the temporary directory is removed.
///
/// Dropping cannot await [`SqlitePool::close`], so the directory is removed
/// while pool connections may still hold the database open. Unix unlinks the
/// open file; on Windows the removal fails and the directory is left behind.
/// Prefer `shutdown` wherever the test can reach it.
pub struct TestHost {
    base_url: String,
    addr: SocketAddr,
    database_path: PathBuf,
    pool: SqlitePool,
    services: ServiceProvider,
    shutdown: CancellationToken,
    server: Option<JoinHandle<()>>,
    dir: Option<TempDir>,
}

impl TestHost {
    /// Start a host with a fresh, empty store.
    pub async fn start() -> Result<Self, HarnessError> {
        crate::init_tracing();

        let dir = tempfile::Builder::new()
            .prefix("absantee-host-")
            .tempdir()
            .map_err(|e| HarnessError::Startup(format!("temporary directory: {e}")))?;
        let database_path = dir.path().join(DATABASE_FILE_NAME);

        let pool = setup_database(&database_path)
            .await
            .map_err(|e| HarnessError::Startup(format!("database: {e:#}")))?;

        let ctx = AxumContext::from_pool(pool.clone());
        let services = ServiceProvider {
            core: Arc::clone(&ctx.core),
            data: ctx.data.clone(),
        };

        let shutdown = CancellationToken::new();
        let server = start_embedded_server(ctx, &CorsConfig::AllowAll, shutdown.clone())
            .await
            .map_err(|e| HarnessError::Startup(format!("server: {e:#}")))?;

        tracing::info!(
            addr = %server.addr,
            database = %database_path.display(),
            "Test host started"
        );

        Ok(Self {
            base_url: server.base_url(),
            addr: server.addr,
            database_path,
            pool,
            services,
            shutdown,
            server: Some(server.handle),
            dir: Some(dir),
        })
    }

    /// Base URL of the running server.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Bound socket address.
    pub const fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Path of this host's database file.
    pub fn database_path(&self) -> &Path {
        &self.database_path
    }

    /// The pool the server reads and writes through.
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create an HTTP client for this host.
    pub fn create_client(&self, options: ClientOptions) -> Result<TestClient, HarnessError> {
        TestClient::new(self.base_url.clone(), options)
    }

    /// The services the running application uses.
    pub const fn services(&self) -> &ServiceProvider {
        &self.services
    }

    /// Stop the server, close the pool and delete the database.
    pub async fn shutdown(mut self) -> Result<(), HarnessError> {
        self.shutdown.cancel();

        if let Some(server) = self.server.take() {
            server
                .await
                .map_err(|e| HarnessError::Shutdown(format!("server task: {e}")))?;
        }

        self.pool.close().await;

        if let Some(dir) = self.dir.take() {
            dir.close()
                .map_err(|e| HarnessError::Shutdown(format!("temporary directory: {e}")))?;
        }

        tracing::info!(addr = %self.addr, "Test host stopped");
        Ok(())
    }
}

impl Drop for TestHost {
    fn drop(&mut self) {
        if let Some(server) = self.server.take() {
            self.shutdown.cancel();
            server.abort();
            tracing::debug!(addr = %self.addr, "Test host dropped without shutdown");
        }
        // Pool connections are released in the background after this
        if let Some(dir) = self.dir.take() {
            if let Err(e) = dir.close() {
                tracing::warn!(error = %e, "Temporary directory not removed");
            }
        }
    }
}

/// Access to the application's services from test code.
#[derive(Clone)]
pub struct ServiceProvider {
    core: Arc<AppCore>,
    data: DataContext,
}

impl ServiceProvider {
    /// Open a scope whose unit of work shares the server's pool.
    pub fn create_scope(&self) -> ServiceScope {
        ServiceScope {
            core: Arc::clone(&self.core),
            data: self.data.open_scope(),
        }
    }
}

/// Scoped services. Uncommitted changes are rolled back when it is dropped.
pub struct ServiceScope {
    core: Arc<AppCore>,
    data: DataScope,
}

impl ServiceScope {
    /// The persistence context of this scope.
    pub fn data(&mut self) -> &mut DataScope {
        &mut self.data
    }

    /// The application facade.
    pub fn core(&self) -> &AppCore {
        &self.core
    }
}

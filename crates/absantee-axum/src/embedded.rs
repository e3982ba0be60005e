//! In-process server on an ephemeral localhost port.
//!
//! Used where the application must run inside another process, such as the
//! integration test harness. The server binds `127.0.0.1:0` and runs on a
//! spawned task until the supplied `CancellationToken` is cancelled.
//!
//! ```ignore
//! let shutdown = CancellationToken::new();
//! let server = start_embedded_server(ctx, &CorsConfig::AllowAll, shutdown.clone()).await?;
//! println!("API available at http://{}", server.addr);
//!
//! shutdown.cancel();
//! server.handle.await?;
//! ```

use std::net::SocketAddr;

use anyhow::Result;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::bootstrap::{AxumContext, CorsConfig};
use crate::routes::create_router;

/// A running embedded server.
#[derive(Debug)]
pub struct EmbeddedServer {
    /// The bound address, with the OS-assigned port.
    pub addr: SocketAddr,
    /// Completes once the server has drained after shutdown.
    pub handle: JoinHandle<()>,
}

impl EmbeddedServer {
    /// Base URL for HTTP clients, without a trailing slash.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

/// Start the application on an ephemeral localhost port.
pub async fn start_embedded_server(
    ctx: AxumContext,
    cors: &CorsConfig,
    shutdown: CancellationToken,
) -> Result<EmbeddedServer> {
    let app = create_router(ctx, cors);

    let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
    let addr = listener.local_addr()?;

    tracing::info!(port = addr.port(), "Starting embedded API server");

    let handle = tokio::spawn(async move {
        let result = axum::serve(listener, app)
            .with_graceful_shutdown(async move { shutdown.cancelled().await })
            .await;
        match result {
            Ok(()) => tracing::info!(port = addr.port(), "Embedded API server stopped"),
            Err(e) => tracing::error!(error = %e, "Embedded API server error"),
        }
    });

    Ok(EmbeddedServer { addr, handle })
}

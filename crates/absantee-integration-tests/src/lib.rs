//! In-process integration harness for the absantee API.
//!
//! A [`TestHost`] runs the full application on an ephemeral localhost port
//! against its own temporary `SQLite` file. Tests drive it through a
//! [`TestClient`] and reset persisted state with [`fixtures::reinitialize`]
//! inside a [`ServiceScope`] that shares the server's pool.
//!
//! ```ignore
//! let host = TestHost::start().await?;
//! {
//!     let mut scope = host.services().create_scope();
//!     fixtures::reinitialize(scope.data()).await?;
//! }
//!
//! let client = host.create_client(ClientOptions::default())?;
//! let colaborators = client.get("/api/colaborator").await?.expect_success()?.json_array()?;
//! assert_eq!(colaborators.len(), 3);
//!
//! host.shutdown().await?;
//! ```

pub mod client;
pub mod error;
pub mod fixtures;
pub mod host;

pub use client::{ClientOptions, TestClient, TestResponse};
pub use error::HarnessError;
pub use host::{ServiceProvider, ServiceScope, TestHost};

/// Install a test-writer tracing subscriber once per process.
///
/// Honors `RUST_LOG`; later calls are no-ops.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,absantee=debug,sqlx=warn")),
        )
        .with_test_writer()
        .try_init();
}

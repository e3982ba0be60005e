//! Subcommand definitions.

use std::path::PathBuf;

use clap::Subcommand;

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Interface to bind
        #[arg(long, env = "ABSANTEE_HOST", default_value = "127.0.0.1")]
        host: String,
        /// Port to serve on
        #[arg(short, long, env = "ABSANTEE_PORT", default_value_t = absantee_axum::bootstrap::DEFAULT_PORT)]
        port: u16,
        /// Database file (defaults to the data directory)
        #[arg(long, env = "ABSANTEE_DATABASE")]
        database: Option<PathBuf>,
        /// Allowed CORS origin; repeat for several. All origins are allowed when omitted.
        #[arg(long = "allow-origin")]
        allow_origin: Vec<String>,
    },

    /// Create the database and its tables, then exit
    InitDb {
        /// Database file (defaults to the data directory)
        #[arg(long, env = "ABSANTEE_DATABASE")]
        database: Option<PathBuf>,
    },
}

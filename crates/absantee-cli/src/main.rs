//! CLI entry point - the composition root.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use absantee_cli::{Cli, Commands, handlers};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before argument parsing so `env` args see them
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    match cli.command {
        Commands::Serve {
            host,
            port,
            database,
            allow_origin,
        } => {
            let config = handlers::server_config(host, port, database, allow_origin)?;
            handlers::serve(config).await
        }
        Commands::InitDb { database } => {
            let path = handlers::init_db(database).await?;
            println!("Database ready at {}", path.display());
            Ok(())
        }
    }
}

//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for the absantee web API.
#[derive(Parser)]
#[command(name = "absantee")]
#[command(about = "Serve the absantee web API")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_serve_args() {
        let cli = Cli::parse_from([
            "absantee",
            "--verbose",
            "serve",
            "--port",
            "8080",
            "--allow-origin",
            "http://localhost:3000",
            "--allow-origin",
            "http://localhost:5173",
        ]);

        assert!(cli.verbose);
        match cli.command {
            Commands::Serve {
                port, allow_origin, ..
            } => {
                assert_eq!(port, 8080);
                assert_eq!(allow_origin.len(), 2);
            }
            Commands::InitDb { .. } => panic!("expected serve"),
        }
    }

    #[test]
    fn test_init_db_args() {
        let cli = Cli::parse_from(["absantee", "init-db", "--database", "/tmp/x.db"]);
        assert!(matches!(
            cli.command,
            Commands::InitDb { database: Some(ref p) } if p.ends_with("x.db")
        ));
    }
}

//! Employee directory service entry point.
//!
//! # Usage
//!
//! ```bash
//! # Start the HTTP server (default command)
//! cargo run -- serve
//!
//! # Apply database migrations and exit
//! cargo run -- migrate
//!
//! # Check database and cache connectivity
//! cargo run -- check
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use employee_directory::config::{self, Config};
use employee_directory::server;
use tracing_subscriber::EnvFilter;

/// Employee CRUD service.
#[derive(Parser)]
#[command(name = "employee-directory")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server
    Serve,

    /// Apply database migrations and exit
    Migrate,

    /// Check database and cache connectivity
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    init_tracing(&config);
    config.print_summary();

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => server::run(config).await,
        Commands::Migrate => server::migrate(config).await,
        Commands::Check => server::check(config).await,
    }
}

/// Installs the global subscriber using `RUST_LOG` and `LOG_FORMAT`.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if config.log_format == "json" {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

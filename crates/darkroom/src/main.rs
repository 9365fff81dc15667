//! Darkroom CLI - In-memory image filter web service.
//!
//! Darkroom serves a small web app: upload an image, pick a filter from a
//! fixed catalog (grayscale, sepia, vintage, glitch, ...), preview the
//! result, and download it. Uploads live in memory for the life of the
//! process.
//!
//! # Usage
//!
//! ```bash
//! # Start the server on the configured address
//! darkroom serve
//!
//! # Override the bind address
//! darkroom serve --host 0.0.0.0 --port 8080
//!
//! # View configuration
//! darkroom config show
//! ```

use clap::{Parser, Subcommand};

use darkroom::{cli, logging};

/// Darkroom - In-memory image filter web service.
#[derive(Parser, Debug)]
#[command(name = "darkroom")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the HTTP server
    Serve(cli::serve::ServeArgs),

    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logging isn't initialized yet, so use eprintln for config warnings.
    let config = match darkroom_core::Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Failed to load config: {e}\n  \
                 Using default configuration. Check your config file with `darkroom config path`."
            );
            darkroom_core::Config::default()
        }
    };
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("Darkroom v{}", darkroom_core::VERSION);

    match cli.command {
        Commands::Serve(args) => cli::serve::execute(args, config).await,
        Commands::Config(args) => cli::config::execute(args).await,
    }
}

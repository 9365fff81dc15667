//! The `darkroom serve` command.

use clap::Args;
use darkroom_core::Config;

use crate::server;

/// Arguments for the `serve` command.
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Bind address (overrides config)
    #[arg(long)]
    pub host: Option<String>,

    /// Bind port (overrides config)
    #[arg(long)]
    pub port: Option<u16>,
}

/// Execute the serve command.
pub async fn execute(args: ServeArgs, mut config: Config) -> anyhow::Result<()> {
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    server::run(config).await
}

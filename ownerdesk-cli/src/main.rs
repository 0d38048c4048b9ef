//! ownerdesk CLI - owner registry service entry point
//!
//! Currently a single subcommand: `serve`, which runs the HTTP server
//! against the configured PostgreSQL database.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use commands::serve::{run_serve, ServeArgs};
use tracing_setup::{init_tracing, TracingConfig};

#[derive(Parser, Debug)]
#[command(name = "ownerdesk", version, about = "Owner registry HTTP service")]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server
    Serve(ServeArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before clap resolves env-backed args
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    init_tracing(&TracingConfig { debug: cli.debug })?;

    match cli.command {
        Command::Serve(args) => run_serve(args).await,
    }
}

//! Storyreel CLI binary.
//!
//! This binary provides command-line access to Storyreel:
//! - Serve the HTTP API
//! - Start stories and generate chapters
//! - Render chapters as slides

use clap::Parser;
use storyreel::{StoryreelConfig, init_logging};

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, run_command};

    // Load .env before reading configuration and API keys
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = StoryreelConfig::load(cli.config.as_deref())?;
    init_logging(cli.verbose, config.logging.json)?;

    run_command(cli.command, config).await
}

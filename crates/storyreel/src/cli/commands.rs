//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Storyreel - serialized AI fiction with chapter summaries and slide rendering
#[derive(Parser, Debug)]
#[command(name = "storyreel")]
#[command(about = "Serialized AI fiction with chapter summaries and slide rendering", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file layered over the defaults
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP API
    Serve {
        /// Socket address to bind, overriding [server] bind
        #[arg(long)]
        bind: Option<String>,
    },

    /// Start a new story
    New {
        /// Story setup as inline JSON or a path to a JSON file
        #[arg(long)]
        setup: String,
    },

    /// Generate the next chapter of a story
    Continue {
        /// Story record filename (e.g. lost_city.json)
        filename: String,

        /// Continuation instruction
        #[arg(long)]
        prompt: Option<String>,
    },

    /// Print a story record as JSON
    Show {
        /// Story record filename
        filename: String,
    },

    /// List stored stories
    List,

    /// Render a chapter as slides
    Slides {
        /// Story record filename
        filename: String,

        /// Chapter number
        chapter: u32,
    },
}

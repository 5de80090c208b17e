//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Memex bookmark exporter
#[derive(Parser, Debug)]
#[command(name = "memex-export")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// API domain (or full base URL) to export from
    #[arg(long, global = true)]
    pub domain: Option<String>,

    /// Resume state file
    #[arg(long, global = true)]
    pub state_file: Option<PathBuf>,

    /// Directory for per-bookmark JSON records
    #[arg(long, global = true)]
    pub json_dir: Option<PathBuf>,

    /// Directory for Markdown notes
    #[arg(long, global = true)]
    pub markdown_dir: Option<PathBuf>,

    /// Directory for the response cache
    #[arg(long, global = true, conflicts_with = "no_cache")]
    pub cache_dir: Option<PathBuf>,

    /// Disable the response cache entirely
    #[arg(long, global = true)]
    pub no_cache: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full export
    Run {
        /// Initial cursor in ms since epoch (overrides START_TIMESTAMP; defaults to now)
        #[arg(long)]
        start_timestamp: Option<i64>,
    },

    /// Verify credentials against the spaces endpoint
    Check,
}

//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Structural JSON schema inference and merging
#[derive(Parser, Debug)]
#[command(name = "jsonschema-gen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Infer a schema from sample documents
    Infer {
        /// Sample files (use '-' for stdin)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Treat each input as NDJSON (one sample per line)
        #[arg(long)]
        ndjson: bool,

        /// Treat each input as a JSON array, one sample per element
        #[arg(long, conflicts_with = "ndjson")]
        each_element: bool,
    },

    /// Merge schema documents into one
    Merge {
        /// Schema files (use '-' for stdin)
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON on one line
    Json,
    /// Pretty-printed JSON
    Pretty,
}

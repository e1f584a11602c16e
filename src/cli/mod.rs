//! CLI module
//!
//! Command-line interface for schema inference and merging.
//!
//! # Commands
//!
//! - `infer` - Infer a schema from sample documents
//! - `merge` - Merge schema documents into one

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;

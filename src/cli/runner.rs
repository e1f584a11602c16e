//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::error::{Error, Result};
use crate::loader::{read_samples, read_schema, SampleFormat};
use crate::schema::{merge_schemas, tree_to_schema, SchemaNode};
use std::path::PathBuf;
use tracing::{debug, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Infer {
                files,
                ndjson,
                each_element,
            } => self.infer(files, *ndjson, *each_element),
            Commands::Merge { files } => self.merge(files),
        }
    }

    /// Infer a schema per sample, then fold the schemas into one
    fn infer(&self, files: &[PathBuf], ndjson: bool, each_element: bool) -> Result<()> {
        let format = if ndjson {
            SampleFormat::Ndjson
        } else if each_element {
            SampleFormat::JsonArray
        } else {
            SampleFormat::Json
        };

        let mut schemas = Vec::new();
        for file in files {
            let samples = read_samples(file, format)?;
            debug!(file = %file.display(), samples = samples.len(), "loaded samples");
            for sample in &samples {
                schemas.push(tree_to_schema(sample)?);
            }
        }

        info!(schemas = schemas.len(), "merging sample schemas");
        self.print(merge_schemas(&schemas)?.as_ref())
    }

    /// Merge schema documents loaded from files
    fn merge(&self, files: &[PathBuf]) -> Result<()> {
        let mut schemas = Vec::new();
        for file in files {
            schemas.push(read_schema(file)?);
        }

        self.print(merge_schemas(&schemas)?.as_ref())
    }

    fn print(&self, schema: Option<&SchemaNode>) -> Result<()> {
        let Some(schema) = schema else {
            return Err(Error::Other("no input, nothing to merge".to_string()));
        };

        let rendered = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(schema)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(schema)?,
        };
        println!("{rendered}");
        Ok(())
    }
}

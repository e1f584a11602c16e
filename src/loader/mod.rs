//! Input loading
//!
//! Parses sample documents and schema documents from files or stdin.
//!
//! # Overview
//!
//! The loader module provides:
//! - `read_samples` - Load an ordered sequence of JSON samples
//! - `read_schema` - Load a schema document in the wire shape
//! - `SampleFormat` - How a sample source maps to individual samples

use crate::error::{Error, Result};
use crate::schema::SchemaNode;
use serde_json::Value;
use std::fs;
use std::io::Read;
use std::path::Path;


/// How a sample source maps to individual samples
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SampleFormat {
    /// One JSON document per source
    #[default]
    Json,
    /// One JSON document per line (blank lines skipped)
    Ndjson,
    /// A top-level JSON array, one sample per element
    JsonArray,
}

/// Load an ordered sequence of samples from a file, or stdin for `-`.
pub fn read_samples(path: &Path, format: SampleFormat) -> Result<Vec<Value>> {
    let body = read_input(path)?;
    parse_samples(&body, format, &path.display().to_string())
}

/// Parse samples from an in-memory body.
pub fn parse_samples(body: &str, format: SampleFormat, source: &str) -> Result<Vec<Value>> {
    match format {
        SampleFormat::Json => {
            let value = serde_json::from_str(body)
                .map_err(|e| Error::invalid_input(source, e.to_string()))?;
            Ok(vec![value])
        }
        SampleFormat::Ndjson => {
            let mut samples = Vec::new();
            for (line_num, line) in body.lines().enumerate() {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let value = serde_json::from_str(line).map_err(|e| {
                    Error::invalid_input(source, format!("line {}: {e}", line_num + 1))
                })?;
                samples.push(value);
            }
            Ok(samples)
        }
        SampleFormat::JsonArray => {
            let value: Value = serde_json::from_str(body)
                .map_err(|e| Error::invalid_input(source, e.to_string()))?;
            match value {
                Value::Array(elements) => Ok(elements),
                _ => Err(Error::invalid_input(source, "expected a top-level JSON array")),
            }
        }
    }
}

/// Load a schema document in the wire shape from a file, or stdin for `-`.
pub fn read_schema(path: &Path) -> Result<SchemaNode> {
    let body = read_input(path)?;
    serde_json::from_str(&body)
        .map_err(|e| Error::invalid_input(path.display().to_string(), e.to_string()))
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut body = String::new();
        std::io::stdin().read_to_string(&mut body)?;
        return Ok(body);
    }
    if !path.exists() {
        return Err(Error::file_not_found(path.display().to_string()));
    }
    Ok(fs::read_to_string(path)?)
}

//! # jsonschema-gen
//!
//! Structural JSON schema inference and merging for sampled documents.
//!
//! Given a set of example documents (API responses, log records), this crate
//! infers a schema per sample and folds them into one schema describing the
//! union of observed shapes, including which fields are present in every
//! sample versus only some.
//!
//! ## Quick Start
//!
//! ```rust
//! use jsonschema_gen::{merge_schemas, tree_to_schema, Result};
//! use serde_json::json;
//!
//! fn main() -> Result<()> {
//!     let samples = [
//!         json!({"id": 1, "name": "Alice"}),
//!         json!({"id": 2, "email": "bob@example.com"}),
//!     ];
//!
//!     let schemas = samples
//!         .iter()
//!         .map(tree_to_schema)
//!         .collect::<Result<Vec<_>>>()?;
//!
//!     // `email` and `name` end up with required: false, `id` stays required
//!     let merged = merge_schemas(&schemas)?.expect("non-empty input");
//!     println!("{}", merged.to_json_pretty());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! samples ──► tree_to_schema (one schema per sample)
//!                   │
//!                   ▼
//!            merge_schemas (left fold, recursive for nested
//!                           objects and array items)
//!                   │
//!                   ▼
//!            SchemaNode  {type, required, properties, items}
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Schema inference and merging
pub mod schema;

/// Sample and schema document loading
pub mod loader;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use schema::{merge_schemas, tree_to_schema, tree_to_schema_required};
pub use schema::{SchemaNode, TypeSet, TypeTag};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

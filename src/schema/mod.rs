//! Schema inference and merging
//!
//! Infers a structural schema from a JSON value tree and merges schemas
//! observed across multiple samples into one schema compatible with all
//! of them.
//!
//! # Features
//!
//! - **Type Inference**: Infers types from JSON values
//! - **Schema Merging**: Left-fold merge of schemas from multiple samples
//! - **Type Unification**: Conflicting types become an ordered type set
//! - **Required Tracking**: Properties absent from some samples are demoted
//! - **Nested Structures**: Objects and array item schemas merge recursively

mod inference;
mod merge;
mod types;

pub use inference::{tree_to_schema, tree_to_schema_required};
pub use merge::merge_schemas;
pub use types::{SchemaNode, TypeSet, TypeTag};

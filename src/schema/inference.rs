//! Schema inference from JSON values

use super::merge::merge_schemas;
use super::types::{SchemaNode, TypeTag};
use crate::error::Result;
use indexmap::IndexMap;
use serde_json::Value;

/// Infer a schema from a single JSON value tree.
///
/// The root node and every freshly inferred property are marked required;
/// merging schemas from multiple samples is what demotes the flag for
/// properties that are absent from some samples.
pub fn tree_to_schema(value: &Value) -> Result<SchemaNode> {
    tree_to_schema_required(value, true)
}

/// Infer a schema, choosing the `required` flag of the root node.
pub fn tree_to_schema_required(value: &Value, required: bool) -> Result<SchemaNode> {
    match value {
        Value::Object(map) => {
            let mut properties = IndexMap::with_capacity(map.len());
            for (key, val) in map {
                properties.insert(key.clone(), tree_to_schema_required(val, true)?);
            }
            Ok(SchemaNode::object(properties, required))
        }
        Value::Array(elements) => {
            let element_schemas = elements
                .iter()
                .map(|element| tree_to_schema_required(element, true))
                .collect::<Result<Vec<_>>>()?;

            // Heterogeneous element schemas collapse into a single item
            // schema; an empty array has no item schema at all.
            let mut items = merge_schemas(&element_schemas)?;
            if let Some(node) = items.as_mut() {
                // Array elements have no name, so presence tracking
                // does not apply to them
                node.required = None;
            }
            Ok(SchemaNode::array(items, required))
        }
        _ => Ok(SchemaNode::leaf(TypeTag::classify(value), required)),
    }
}

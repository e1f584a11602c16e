//! Schema merging
//!
//! Folds an ordered sequence of schemas that describe the same logical
//! position into one schema compatible with all of them.

use super::types::{SchemaNode, TypeTag};
use crate::error::Result;

/// Merge an ordered sequence of schemas into one (left fold).
///
/// The first schema seeds the accumulator and each subsequent schema is
/// merged into it in order. Property iteration order and first-seen type
/// order follow the fold order. Returns `None` for an empty sequence.
/// Inputs are never mutated; the result shares no storage with them.
pub fn merge_schemas(schemas: &[SchemaNode]) -> Result<Option<SchemaNode>> {
    let Some((first, rest)) = schemas.split_first() else {
        return Ok(None);
    };

    let mut merged = first.clone();
    for schema in rest {
        merge_into(&mut merged, schema)?;
    }
    Ok(Some(merged))
}

/// Merge one schema into the accumulator.
fn merge_into(merged: &mut SchemaNode, schema: &SchemaNode) -> Result<()> {
    merged.ty = merged.ty.unify(&schema.ty)?;

    if schema.ty.is(TypeTag::Array) {
        merged.items = match (merged.items.take(), &schema.items) {
            (Some(a), Some(b)) => merge_pair(&a, b)?.map(Box::new),
            (a, b) => a.or_else(|| b.clone()),
        };
        if let Some(items) = merged.items.as_mut() {
            // Stray required flags on item schemas are ignored
            items.required = None;
        }
    } else if schema.ty.is(TypeTag::Object) {
        merge_properties(merged, schema)?;
    }
    // Primitive and null types need no structural reconciliation beyond
    // the unified type designation.

    Ok(())
}

/// Reconcile the property maps of two object schemas.
///
/// Two passes: properties new to the accumulator are copied in with
/// `required` forced to false (they were absent from at least one
/// earlier-merged input), properties present in both are merged
/// recursively, and accumulator properties missing from the incoming
/// schema are demoted to `required: false`. A property demoted once is
/// never promoted back by a later input.
fn merge_properties(merged: &mut SchemaNode, schema: &SchemaNode) -> Result<()> {
    match (&mut merged.properties, &schema.properties) {
        (Some(merged_props), Some(props)) => {
            for (key, prop) in props {
                match merged_props.get(key) {
                    Some(existing) => {
                        if let Some(combined) = merge_pair(existing, prop)? {
                            merged_props.insert(key.clone(), combined);
                        }
                    }
                    None => {
                        let mut prop = prop.clone();
                        prop.required = Some(false);
                        merged_props.insert(key.clone(), prop);
                    }
                }
            }
            for (key, prop) in merged_props.iter_mut() {
                if !props.contains_key(key) {
                    prop.required = Some(false);
                }
            }
        }
        // An object-typed node without a properties map (e.g. a
        // non-standard "custom type" schema) is tolerated: adopt
        // whichever side has one, first wins.
        (missing @ None, Some(props)) => *missing = Some(props.clone()),
        (_, None) => {}
    }
    Ok(())
}

fn merge_pair(a: &SchemaNode, b: &SchemaNode) -> Result<Option<SchemaNode>> {
    merge_schemas(&[a.clone(), b.clone()])
}

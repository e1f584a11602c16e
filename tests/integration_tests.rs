//! Integration tests
//!
//! Tests the full end-to-end flow: sample files → inference → merged schema → wire output

use jsonschema_gen::loader::{read_samples, read_schema, SampleFormat};
use jsonschema_gen::{merge_schemas, tree_to_schema, Error, SchemaNode, TypeSet, TypeTag};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::io::Write;
use tempfile::NamedTempFile;

// ============================================================================
// Inference Pipeline Tests
// ============================================================================

#[test]
fn test_samples_to_merged_schema() {
    let samples = [
        json!({"id": 1, "name": "Alice", "email": "alice@example.com"}),
        json!({"id": 2, "name": "Bob"}),
        json!({"id": null, "name": "Carol", "email": "carol@example.com"}),
    ];

    let schemas = samples
        .iter()
        .map(tree_to_schema)
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    let merged = merge_schemas(&schemas).unwrap().unwrap();

    assert_eq!(
        merged.to_json(),
        json!({
            "type": "object",
            "required": true,
            "properties": {
                "id": {"type": ["number", "null"], "required": true},
                "name": {"type": "string", "required": true},
                "email": {"type": "string", "required": false}
            }
        })
    );
}

#[test]
fn test_nested_structures_survive_the_pipeline() {
    let samples = [
        json!({
            "order": {
                "lines": [{"sku": "a", "qty": 1}],
                "total": 10.0
            }
        }),
        json!({
            "order": {
                "lines": [{"sku": "b", "qty": 2, "discount": 0.1}, {"sku": "c", "qty": 1}]
            }
        }),
    ];

    let schemas = samples
        .iter()
        .map(tree_to_schema)
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    let merged = merge_schemas(&schemas).unwrap().unwrap();

    let order = merged.get_property("order").unwrap();
    assert_eq!(order.required, Some(true));
    // total is missing from the second sample
    assert_eq!(order.get_property("total").unwrap().required, Some(false));

    let lines = order.get_property("lines").unwrap();
    let line = lines.items.as_ref().unwrap();
    assert_eq!(line.required, None);
    assert_eq!(line.get_property("sku").unwrap().required, Some(true));
    // discount only appears on one observed line
    assert_eq!(line.get_property("discount").unwrap().required, Some(false));
}

// ============================================================================
// File Loading Tests
// ============================================================================

#[test]
fn test_infer_from_ndjson_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, r#"{{"id": 1, "tag": "x"}}"#).unwrap();
    writeln!(file, r#"{{"id": 2}}"#).unwrap();

    let samples = read_samples(file.path(), SampleFormat::Ndjson).unwrap();
    let schemas = samples
        .iter()
        .map(tree_to_schema)
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    let merged = merge_schemas(&schemas).unwrap().unwrap();

    assert_eq!(merged.get_property("id").unwrap().required, Some(true));
    assert_eq!(merged.get_property("tag").unwrap().required, Some(false));
}

#[test]
fn test_merge_schema_files() {
    let mut a = NamedTempFile::new().unwrap();
    write!(
        a,
        r#"{{"type": "object", "required": true, "properties": {{"id": {{"type": "number", "required": true}}}}}}"#
    )
    .unwrap();

    let mut b = NamedTempFile::new().unwrap();
    write!(
        b,
        r#"{{"type": "object", "required": true, "properties": {{"id": {{"type": "null", "required": true}}}}}}"#
    )
    .unwrap();

    let schemas = vec![read_schema(a.path()).unwrap(), read_schema(b.path()).unwrap()];
    let merged = merge_schemas(&schemas).unwrap().unwrap();

    assert_eq!(
        merged.get_property("id").unwrap().ty,
        TypeSet::Multiple(vec![TypeTag::Number, TypeTag::Null])
    );
}

#[test]
fn test_schema_file_with_unknown_tag_is_rejected() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"type": "timestamp", "required": true}}"#).unwrap();

    let err = read_schema(file.path()).unwrap_err();
    assert!(matches!(err, Error::InvalidInput { .. }));
    assert!(err.to_string().contains("unknown type tag 'timestamp'"));
}

// ============================================================================
// Wire Shape Tests
// ============================================================================

#[test]
fn test_merged_schema_round_trips_through_wire_shape() {
    let samples = [
        json!({"values": [1, "two"], "flag": true}),
        json!({"values": []}),
    ];

    let schemas = samples
        .iter()
        .map(tree_to_schema)
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    let merged = merge_schemas(&schemas).unwrap().unwrap();

    let wire = serde_json::to_string_pretty(&merged).unwrap();
    let reparsed: SchemaNode = serde_json::from_str(&wire).unwrap();

    assert_eq!(reparsed, merged);

    // Item schemas never expose a required key on the wire
    let items = merged.get_property("values").unwrap().items.as_ref().unwrap();
    assert!(items.to_json().get("required").is_none());
    assert_eq!(
        items.ty,
        TypeSet::Multiple(vec![TypeTag::Number, TypeTag::String])
    );
}

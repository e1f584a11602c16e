//! Schema node types

use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single JSON type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum TypeTag {
    Object,
    Array,
    String,
    Number,
    Boolean,
    Null,
}

impl TypeTag {
    /// Classify a JSON value.
    ///
    /// Total over `serde_json::Value`: the parse boundary already guarantees
    /// there is no temporal or otherwise non-JSON kind to reject here.
    /// Unrepresentable tags are rejected where tags are parsed instead, see
    /// [`TypeTag::from_str`].
    pub fn classify(value: &Value) -> TypeTag {
        match value {
            Value::Null => TypeTag::Null,
            Value::Bool(_) => TypeTag::Boolean,
            Value::Number(_) => TypeTag::Number,
            Value::String(_) => TypeTag::String,
            Value::Array(_) => TypeTag::Array,
            Value::Object(_) => TypeTag::Object,
        }
    }
}

impl std::fmt::Display for TypeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeTag::Object => write!(f, "object"),
            TypeTag::Array => write!(f, "array"),
            TypeTag::String => write!(f, "string"),
            TypeTag::Number => write!(f, "number"),
            TypeTag::Boolean => write!(f, "boolean"),
            TypeTag::Null => write!(f, "null"),
        }
    }
}

impl std::str::FromStr for TypeTag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "object" => Ok(TypeTag::Object),
            "array" => Ok(TypeTag::Array),
            "string" => Ok(TypeTag::String),
            "number" => Ok(TypeTag::Number),
            "boolean" => Ok(TypeTag::Boolean),
            "null" => Ok(TypeTag::Null),
            "date" | "date-time" | "datetime" | "time" => Err(Error::unsupported_type(format!(
                "temporal type tag '{s}' is not modeled"
            ))),
            other => Err(Error::unsupported_type(format!(
                "unknown type tag '{other}'"
            ))),
        }
    }
}

impl TryFrom<String> for TypeTag {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// The type designation of a schema node: a single tag, or the ordered set
/// of tags observed at the same position across merged inputs
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TypeSet {
    Single(TypeTag),
    Multiple(Vec<TypeTag>),
}

// Hand-written so tag errors (notably temporal tags) keep their message;
// a derived untagged enum would collapse them into "did not match any
// variant".
impl<'de> Deserialize<'de> for TypeSet {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Single(String),
            Multiple(Vec<String>),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Single(tag) => tag
                .parse()
                .map(TypeSet::Single)
                .map_err(serde::de::Error::custom),
            Raw::Multiple(tags) => tags
                .into_iter()
                .map(|tag| tag.parse())
                .collect::<Result<Vec<_>>>()
                .map(TypeSet::Multiple)
                .map_err(serde::de::Error::custom),
        }
    }
}

impl TypeSet {
    /// Create a single-tag designation
    pub fn single(tag: TypeTag) -> Self {
        TypeSet::Single(tag)
    }

    /// Check whether this designation is exactly the given single tag
    pub fn is(&self, tag: TypeTag) -> bool {
        matches!(self, TypeSet::Single(t) if *t == tag)
    }

    /// Check whether the given tag was observed
    pub fn contains(&self, tag: TypeTag) -> bool {
        match self {
            TypeSet::Single(t) => *t == tag,
            TypeSet::Multiple(tags) => tags.contains(&tag),
        }
    }

    /// Unify two type designations into one representing "observed as either".
    ///
    /// Two equal single tags stay a single tag; two different single tags
    /// become a two-element set; otherwise the result is the union of both
    /// sides, preserving first-seen order and uniqueness.
    pub fn unify(&self, other: &TypeSet) -> Result<TypeSet> {
        match (self, other) {
            (TypeSet::Single(a), TypeSet::Single(b)) if a == b => Ok(TypeSet::Single(*a)),
            (TypeSet::Single(a), TypeSet::Single(b)) => Ok(TypeSet::Multiple(vec![*a, *b])),
            _ => {
                let mut merged = self.as_tags()?.to_vec();
                for tag in other.as_tags()? {
                    if !merged.contains(tag) {
                        merged.push(*tag);
                    }
                }
                Ok(TypeSet::Multiple(merged))
            }
        }
    }

    /// View the designation as a tag slice.
    ///
    /// An empty set is not a valid designation and cannot be unified.
    fn as_tags(&self) -> Result<&[TypeTag]> {
        match self {
            TypeSet::Single(tag) => Ok(std::slice::from_ref(tag)),
            TypeSet::Multiple(tags) if tags.is_empty() => {
                Err(Error::unsupported_unification("empty type set"))
            }
            TypeSet::Multiple(tags) => Ok(tags),
        }
    }
}

impl From<TypeTag> for TypeSet {
    fn from(tag: TypeTag) -> Self {
        TypeSet::Single(tag)
    }
}

/// One node of an inferred or merged schema tree.
///
/// Wire shape: `type` is a string or an array of strings, `required` is a
/// boolean (absent on array item nodes), `properties` is present on
/// object-typed nodes and `items` on array-typed nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaNode {
    /// Observed type(s) at this position
    #[serde(rename = "type")]
    pub ty: TypeSet,

    /// Whether the position was present in every merged input.
    /// Absent on array item nodes, which have no name to be present under.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,

    /// Nested property schemas, keyed by property name, in first-seen order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, SchemaNode>>,

    /// Merged schema of all observed array elements
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<SchemaNode>>,
}

impl SchemaNode {
    /// Create a leaf node (primitive or null)
    pub fn leaf(tag: TypeTag, required: bool) -> Self {
        Self {
            ty: TypeSet::single(tag),
            required: Some(required),
            properties: None,
            items: None,
        }
    }

    /// Create an object node with the given property schemas
    pub fn object(properties: IndexMap<String, SchemaNode>, required: bool) -> Self {
        Self {
            ty: TypeSet::single(TypeTag::Object),
            required: Some(required),
            properties: Some(properties),
            items: None,
        }
    }

    /// Create an array node with the given (already merged) item schema
    pub fn array(items: Option<SchemaNode>, required: bool) -> Self {
        Self {
            ty: TypeSet::single(TypeTag::Array),
            required: Some(required),
            properties: None,
            items: items.map(Box::new),
        }
    }

    /// Get a property schema by name
    pub fn get_property(&self, name: &str) -> Option<&SchemaNode> {
        self.properties.as_ref()?.get(name)
    }

    /// Check whether a property exists and is required
    pub fn is_required(&self, name: &str) -> bool {
        self.get_property(name)
            .and_then(|p| p.required)
            .unwrap_or(false)
    }

    /// Convert to a JSON value
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or_default()
    }

    /// Convert to a pretty JSON string
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

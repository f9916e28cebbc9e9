use std::borrow::Cow;

use itertools::Either;
use serde_json::{Map, Value};
use tracing::debug;

use super::segment::{self, SegmentKind};
use super::{PathSet, ROOT};

/// A JSON value classified once, so the walk can match exhaustively instead
/// of probing the value's type at every step
#[derive(Debug, Clone, Copy)]
pub enum JsonNode<'a> {
    /// Object with its keys in document order
    Object(&'a Map<String, Value>),
    /// Array with its elements in document order
    Array(&'a [Value]),
    /// String, number or boolean
    Scalar(&'a Value),
    /// `null`
    Null,
}

impl<'a> From<&'a Value> for JsonNode<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::Object(map) => Self::Object(map),
            Value::Array(items) => Self::Array(items),
            Value::Null => Self::Null,
            Value::Bool(_) | Value::Number(_) | Value::String(_) => Self::Scalar(value),
        }
    }
}

impl<'a> JsonNode<'a> {
    /// Own key/value pairs of a container
    ///
    /// Objects yield their keys; arrays yield their indices as keys. Scalars
    /// and `null` have no entries.
    pub fn entries(self) -> impl Iterator<Item = (Cow<'a, str>, &'a Value)> {
        let entries = match self {
            Self::Object(map) => Some(Either::Left(
                map.iter().map(|(key, value)| (Cow::Borrowed(key.as_str()), value)),
            )),
            Self::Array(items) => Some(Either::Right(
                items
                    .iter()
                    .enumerate()
                    .map(|(index, value)| (Cow::Owned(index.to_string()), value)),
            )),
            Self::Scalar(_) | Self::Null => None,
        };
        entries.into_iter().flatten()
    }
}

/// Collect every path addressable in `value`
///
/// Arrays contribute a single `[*]` segment; the elements are walked from that
/// same segment, so an index never appears in a path. Scalars and `null` at
/// the top level yield an empty set.
#[must_use]
pub fn extract_from_object(value: &Value) -> PathSet {
    let mut paths = PathSet::new();
    walk(JsonNode::from(value), ROOT, &mut paths);
    debug!(count = paths.len(), "extracted paths from JSON value");
    paths
}

fn walk(node: JsonNode<'_>, current_path: &str, paths: &mut PathSet) {
    for (key, value) in node.entries() {
        match JsonNode::from(value) {
            JsonNode::Array(items) => {
                let array_path = segment::record(paths, current_path, &key, SegmentKind::Array);
                for item in items {
                    walk(JsonNode::from(item), &array_path, paths);
                }
            },
            child @ JsonNode::Object(_) => {
                let child_path = segment::record(paths, current_path, &key, SegmentKind::Field);
                walk(child, &child_path, paths);
            },
            JsonNode::Scalar(_) | JsonNode::Null => {
                segment::record(paths, current_path, &key, SegmentKind::Field);
            },
        }
    }
}

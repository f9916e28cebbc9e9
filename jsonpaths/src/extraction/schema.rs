use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::segment::{self, SegmentKind};
use super::{PathSet, ROOT};
use crate::json_object::JsonObjectAccess;
use crate::json_schema::{JsonSchemaType, SchemaField};

/// Collect every path declared by a schema's `properties` map
///
/// `properties` must already be dereferenced: a `$ref` left in place is just
/// another keyword here and is never followed.
///
/// A property declared `"type": "array"` with `items` becomes a `[*]` segment
/// and continues into `items.properties`. Any other property continues into its
/// own `properties`, falling back to `items.properties`. A property with
/// neither is a leaf whatever its declared type.
#[must_use]
pub fn extract_from_schema(properties: &Map<String, Value>) -> PathSet {
    let mut paths = PathSet::new();
    walk(properties, ROOT, &mut paths);
    debug!(count = paths.len(), "extracted paths from schema properties");
    paths
}

/// Collect paths from a whole schema document, starting at its top-level
/// `properties`
///
/// A schema without an object-valued `properties` yields an empty set.
#[must_use]
pub fn extract_from_schema_document(schema: &Value) -> PathSet {
    schema.get_properties().map_or_else(
        || {
            debug!("schema has no properties section, nothing to extract");
            PathSet::new()
        },
        extract_from_schema,
    )
}

fn walk(properties: &Map<String, Value>, current_path: &str, paths: &mut PathSet) {
    for (key, schema) in properties {
        if !schema.is_object() {
            warn!(path = %current_path, key = %key, "property schema is not an object, treating as leaf");
        }

        if is_array_schema(schema) {
            let array_path = segment::record(paths, current_path, key, SegmentKind::Array);
            if let Some(item_properties) = schema.get_item_properties() {
                walk(item_properties, &array_path, paths);
            }
        } else {
            let child_path = segment::record(paths, current_path, key, SegmentKind::Field);
            if let Some(nested) = nested_properties(schema) {
                walk(nested, &child_path, paths);
            }
        }
    }
}

fn is_array_schema(schema: &Value) -> bool {
    schema.schema_type() == Some(JsonSchemaType::Array)
        && schema.get_present(SchemaField::Items).is_some()
}

fn nested_properties(schema: &Value) -> Option<&Map<String, Value>> {
    match schema.get_present(SchemaField::Properties) {
        Some(properties) => properties.as_object(),
        None => schema.get_item_properties(),
    }
}

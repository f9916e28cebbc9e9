//! Schema dereferencing
//!
//! The schema walker only ever sees a fully dereferenced schema. Producing one
//! is the job of a [`ReferenceResolver`], called once before extraction.

use error_stack::Report;
use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::json_object::JsonObjectAccess;
use crate::json_schema::SchemaField;

/// Prefix of every reference that points into the same document
const LOCAL_REF_PREFIX: char = '#';

/// Replaces every `$ref` in a schema with the subschema it points at
pub trait ReferenceResolver {
    /// Return a dereferenced copy of `schema`, leaving the input untouched
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReferenceResolution`] when a reference cannot be
    /// followed to a finite target.
    fn resolve(&self, schema: &Value) -> Result<Value>;
}

/// Hands the schema back unchanged, for callers that dereferenced it already
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopResolver;

impl ReferenceResolver for NoopResolver {
    fn resolve(&self, schema: &Value) -> Result<Value> { Ok(schema.clone()) }
}

/// Resolves references local to the document (`#`, `#/$defs/Name`,
/// `#/definitions/Name`, any `#/...` JSON pointer)
///
/// Keywords written next to a `$ref` are laid over the resolved target.
/// Remote references, dangling pointers and cycles are errors: a cyclic schema
/// has no finite dereferenced form.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalRefResolver;

impl ReferenceResolver for LocalRefResolver {
    fn resolve(&self, schema: &Value) -> Result<Value> {
        let mut expanding = Vec::new();
        let resolved = dereference(schema, schema, &mut expanding)?;
        debug!("dereferenced schema");
        Ok(resolved)
    }
}

/// `expanding` holds the references currently being expanded on the way down
/// to `node`
fn dereference(root: &Value, node: &Value, expanding: &mut Vec<String>) -> Result<Value> {
    match node {
        Value::Object(map) => match map.get_field_str(SchemaField::Ref) {
            Some(reference) => expand_reference(root, map, reference, expanding),
            None => dereference_members(root, map, expanding).map(Value::Object),
        },
        Value::Array(items) => items
            .iter()
            .map(|item| dereference(root, item, expanding))
            .collect::<Result<Vec<_>>>()
            .map(Value::Array),
        _ => Ok(node.clone()),
    }
}

fn dereference_members(
    root: &Value,
    map: &Map<String, Value>,
    expanding: &mut Vec<String>,
) -> Result<Map<String, Value>> {
    map.iter()
        .map(|(key, value)| -> Result<(String, Value)> {
            Ok((key.clone(), dereference(root, value, expanding)?))
        })
        .collect()
}

fn expand_reference(
    root: &Value,
    map: &Map<String, Value>,
    reference: &str,
    expanding: &mut Vec<String>,
) -> Result<Value> {
    if expanding.iter().any(|seen| seen == reference) {
        return Err(Report::new(Error::unresolvable(
            reference,
            format!("circular reference via {}", expanding.join(" -> ")),
        )));
    }

    trace!(reference, depth = expanding.len(), "expanding reference");
    let target = lookup(root, reference)?;

    expanding.push(reference.to_string());
    let resolved = dereference(root, target, expanding);
    expanding.pop();
    let resolved = resolved?;

    let mut siblings = map.clone();
    siblings.shift_remove(SchemaField::Ref.as_ref());
    if siblings.is_empty() {
        return Ok(resolved);
    }

    let siblings = dereference_members(root, &siblings, expanding)?;
    match resolved {
        Value::Object(mut merged) => {
            merged.extend(siblings);
            Ok(Value::Object(merged))
        },
        _ => Ok(Value::Object(siblings)),
    }
}

fn lookup<'a>(root: &'a Value, reference: &str) -> Result<&'a Value> {
    let fragment = reference.strip_prefix(LOCAL_REF_PREFIX).ok_or_else(|| {
        Report::new(Error::unresolvable(
            reference,
            "only references local to the document are supported",
        ))
    })?;

    let pointer = urlencoding::decode(fragment)
        .map_err(|error| Report::new(Error::unresolvable(reference, error)))?;

    root.pointer(&pointer)
        .ok_or_else(|| Report::new(Error::unresolvable(reference, "pointer has no target")))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, reason = "tests unwrap on known-good fixtures")]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_resolves_defs_and_definitions() {
        let schema = json!({
            "$defs": {"point": {"type": "object", "properties": {"x": {"type": "number"}}}},
            "definitions": {"name": {"type": "string"}},
            "properties": {
                "origin": {"$ref": "#/$defs/point"},
                "label": {"$ref": "#/definitions/name"}
            }
        });
        let resolved = LocalRefResolver.resolve(&schema).unwrap();
        assert_eq!(
            resolved["properties"]["origin"],
            json!({"type": "object", "properties": {"x": {"type": "number"}}})
        );
        assert_eq!(resolved["properties"]["label"], json!({"type": "string"}));
    }

    #[test]
    fn test_input_is_not_mutated() {
        let schema = json!({"$defs": {"s": {"type": "string"}}, "properties": {"a": {"$ref": "#/$defs/s"}}});
        let before = schema.clone();
        LocalRefResolver.resolve(&schema).unwrap();
        assert_eq!(schema, before);
    }

    #[test]
    fn test_chained_and_nested_references() {
        let schema = json!({
            "$defs": {
                "alias": {"$ref": "#/$defs/item"},
                "item": {"type": "object", "properties": {"tags": {"type": "array", "items": {"$ref": "#/$defs/tag"}}}},
                "tag": {"type": "string"}
            },
            "properties": {"entry": {"$ref": "#/$defs/alias"}}
        });
        let resolved = LocalRefResolver.resolve(&schema).unwrap();
        assert_eq!(
            resolved["properties"]["entry"]["properties"]["tags"]["items"],
            json!({"type": "string"})
        );
    }

    #[test]
    fn test_sibling_keywords_override_target() {
        let schema = json!({
            "$defs": {"base": {"type": "string", "description": "base"}},
            "properties": {"a": {"$ref": "#/$defs/base", "description": "override"}}
        });
        let resolved = LocalRefResolver.resolve(&schema).unwrap();
        assert_eq!(
            resolved["properties"]["a"],
            json!({"type": "string", "description": "override"})
        );
    }

    #[test]
    fn test_escaped_pointer_tokens() {
        let schema = json!({
            "$defs": {"a/b": {"type": "integer"}, "with space": {"type": "boolean"}},
            "properties": {
                "slash": {"$ref": "#/$defs/a~1b"},
                "space": {"$ref": "#/$defs/with%20space"}
            }
        });
        let resolved = LocalRefResolver.resolve(&schema).unwrap();
        assert_eq!(resolved["properties"]["slash"], json!({"type": "integer"}));
        assert_eq!(resolved["properties"]["space"], json!({"type": "boolean"}));
    }

    #[test]
    fn test_property_named_ref_is_kept() {
        let schema = json!({"properties": {"$ref": {"type": "string"}}});
        let resolved = LocalRefResolver.resolve(&schema).unwrap();
        assert_eq!(resolved, schema);
    }

    #[test]
    fn test_cycle_is_reported() {
        let schema = json!({
            "$defs": {"node": {"properties": {"next": {"$ref": "#/$defs/node"}}}},
            "properties": {"head": {"$ref": "#/$defs/node"}}
        });
        let report = LocalRefResolver.resolve(&schema).unwrap_err();
        assert!(matches!(report.current_context(), Error::ReferenceResolution(_)));
        assert!(report.current_context().to_string().contains("circular"));
    }

    #[test]
    fn test_remote_and_dangling_references_fail() {
        for reference in ["https://example.com/schema.json", "#/$defs/missing"] {
            let schema = json!({"properties": {"a": {"$ref": reference}}});
            let report = LocalRefResolver.resolve(&schema).unwrap_err();
            assert!(
                matches!(report.current_context(), Error::ReferenceResolution(_)),
                "{reference}"
            );
        }
    }

    #[test]
    fn test_noop_resolver_passes_through() {
        let schema = json!({"properties": {"a": {"$ref": "#/nowhere"}}});
        assert_eq!(NoopResolver.resolve(&schema).unwrap(), schema);
    }
}

//! # jsonpaths
//!
//! Extracts the set of distinct JSONPath expressions addressable within a JSON
//! document, or declared by the `properties` of a JSON Schema, and renders that
//! set as a flat list, as its leaves only, or as an indented tree.
//!
//! Paths use a restricted dot notation: `$` for the root, `.key` per object
//! key, and a `[*]` suffix on a key whose value is an array.
//!
//! ```
//! use jsonpaths::{PathTree, extract_from_object};
//! use serde_json::json;
//!
//! let paths = extract_from_object(&json!({"a": 1, "b": {"c": [{"d": 2}]}}));
//! assert_eq!(paths.into_vec(), vec!["$.a", "$.b", "$.b.c[*]", "$.b.c[*].d"]);
//!
//! let tree = PathTree::new(["$.a", "$.a.b", "$.c"]);
//! assert_eq!(tree.render(), "├── a\n│   └── b\n└── c\n");
//! ```

mod error;
mod extraction;
mod json_object;
mod json_schema;
mod output;
mod resolver;
mod tree;

pub use error::{Error, Result};
pub use extraction::{
    ARRAY_MARKER, JsonNode, PathSet, ROOT, SEPARATOR, SegmentKind, extract_from_object,
    extract_from_schema, extract_from_schema_document,
};
pub use json_object::JsonObjectAccess;
pub use json_schema::{JsonSchemaType, SchemaField};
pub use output::{Command, Extraction, OutputFormat, PathSource, parse_document};
pub use resolver::{LocalRefResolver, NoopResolver, ReferenceResolver};
pub use tree::{PathNode, PathTree};

//! Path extraction
//!
//! Two walkers produce the same kind of [`PathSet`]:
//! - [`extract_from_object`] follows the literal data of a JSON value
//! - [`extract_from_schema`] follows the `properties`/`items` vocabulary of an already dereferenced
//!   JSON Schema
//!
//! Both share the segment bookkeeping in [`segment`], but keep their own
//! branching rules: an array is detected by value in one and by declared
//! `type` in the other.

mod object;
mod path_set;
mod schema;
mod segment;

pub use object::{JsonNode, extract_from_object};
pub use path_set::PathSet;
pub use schema::{extract_from_schema, extract_from_schema_document};
pub use segment::SegmentKind;

/// Root marker every extracted path starts with
pub const ROOT: &str = "$";

/// Separator between object-key segments
pub const SEPARATOR: char = '.';

/// Suffix marking a segment whose value is an array
pub const ARRAY_MARKER: &str = "[*]";

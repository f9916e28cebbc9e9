//! JSON Schema vocabulary used by the schema walker and the reference resolver
//!
//! Keywords are kept as enums so the walkers never compare against
//! hardcoded strings.

use strum::{AsRefStr, Display, EnumString};

/// JSON schema type names as they appear in a schema's `type` keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum JsonSchemaType {
    /// `"object"`
    Object,
    /// `"array"`
    Array,
    /// `"string"`
    String,
    /// `"number"`
    Number,
    /// `"integer"`
    Integer,
    /// `"boolean"`
    Boolean,
    /// `"null"`
    Null,
}

/// Schema keyword names
///
/// Type-safe field names for the parts of JSON Schema this crate reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "camelCase")]
pub enum SchemaField {
    /// The items field for array types
    Items,
    /// The properties field for object types
    Properties,
    /// The $ref field for type references
    #[strum(serialize = "$ref")]
    Ref,
    /// The type field
    Type,
}

//! Extension trait for keyword-typed access into JSON Schema nodes

use serde_json::{Map, Value};

use crate::json_schema::{JsonSchemaType, SchemaField};

/// Extension trait for type-safe JSON field access
pub trait JsonObjectAccess {
    /// Get field value using any type that can be a string reference
    #[must_use]
    fn get_field<T: AsRef<str>>(&self, field: T) -> Option<&Value>;

    /// Get field value as string
    #[must_use]
    fn get_field_str<T: AsRef<str>>(&self, field: T) -> Option<&str>;

    /// Get a schema keyword only when it carries a usable value
    ///
    /// `null` and `false` count as absent, matching how an `items: false` or
    /// `properties: null` schema is read in practice.
    #[must_use]
    fn get_present(&self, field: SchemaField) -> Option<&Value> {
        self.get_field(field)
            .filter(|value| !matches!(value, Value::Null | Value::Bool(false)))
    }

    /// Get Properties field as a Map
    #[must_use]
    fn get_properties(&self) -> Option<&Map<String, Value>> {
        self.get_field(SchemaField::Properties)
            .and_then(Value::as_object)
    }

    /// Get the `properties` map of this node's `items` schema
    #[must_use]
    fn get_item_properties(&self) -> Option<&Map<String, Value>> {
        self.get_present(SchemaField::Items)
            .and_then(Value::get_properties)
    }

    /// Parse the `type` keyword when it is a single known type name
    #[must_use]
    fn schema_type(&self) -> Option<JsonSchemaType> {
        self.get_field_str(SchemaField::Type)
            .and_then(|name| name.parse().ok())
    }
}

impl JsonObjectAccess for Value {
    fn get_field<T: AsRef<str>>(&self, field: T) -> Option<&Self> {
        self.get(field.as_ref())
    }

    fn get_field_str<T: AsRef<str>>(&self, field: T) -> Option<&str> {
        self.get(field.as_ref()).and_then(Self::as_str)
    }
}

impl JsonObjectAccess for Map<String, Value> {
    fn get_field<T: AsRef<str>>(&self, field: T) -> Option<&Value> {
        self.get(field.as_ref())
    }

    fn get_field_str<T: AsRef<str>>(&self, field: T) -> Option<&str> {
        self.get(field.as_ref()).and_then(Value::as_str)
    }
}

//! Declared field schema for analysis request parameters.
//!
//! The schema is a static list of `(name, type, required)` entries rather than
//! anything derived from the descriptor at runtime, so validation and
//! presentation share one source of truth for what a legal field is.

use serde_json::Value;

/// Expected primitive type of a request field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// Free-form or catalog identifier.
    String,
    /// Whole number. JSON floats do not qualify.
    Integer,
}

impl FieldType {
    /// Stable name used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Integer => "integer",
        }
    }

    /// Whether a raw JSON value matches this type.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            FieldType::String => value.is_string(),
            FieldType::Integer => value.is_i64() || value.is_u64(),
        }
    }
}

/// Runtime type name of a raw JSON value, for mismatch reporting.
pub fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "float",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// One field of the declared request schema.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Parameter name in the raw mapping.
    pub name: &'static str,
    /// Expected primitive type.
    pub field_type: FieldType,
    /// Whether the field must be present in the raw mapping.
    pub required: bool,
}

/// Canonical request schema, in presentation order.
pub const REQUEST_FIELDS: [FieldSpec; 6] = [
    FieldSpec {
        name: "analysis_type",
        field_type: FieldType::String,
        required: true,
    },
    FieldSpec {
        name: "data_type",
        field_type: FieldType::String,
        required: true,
    },
    FieldSpec {
        name: "data_subtype",
        field_type: FieldType::String,
        required: false,
    },
    FieldSpec {
        name: "country",
        field_type: FieldType::String,
        required: true,
    },
    FieldSpec {
        name: "year",
        field_type: FieldType::Integer,
        required: true,
    },
    FieldSpec {
        name: "climatic_year",
        field_type: FieldType::Integer,
        required: true,
    },
];

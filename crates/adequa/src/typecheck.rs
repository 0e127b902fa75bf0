//! Generic runtime type checking of raw parameter mappings.

use indexmap::IndexMap;
use serde_json::Value;

use crate::error::{AdequaError, Result};
use crate::schema::{FieldType, value_type_name};

/// Check every field present in both mappings against its expected type.
///
/// Fields declared in `expected` but absent from `values` are skipped:
/// absence is never a type violation here (required-field checks belong to the
/// schema owner). Fields in `values` with no declared type are ignored. The
/// `context` label names the parameter group in error messages, since these
/// report on user-authored configuration.
pub fn check_param_types(
    values: &IndexMap<String, Value>,
    expected: &IndexMap<&str, FieldType>,
    context: &str,
) -> Result<()> {
    for (field, field_type) in expected {
        let Some(value) = values.get(*field) else {
            continue;
        };
        if !field_type.matches(value) {
            return Err(AdequaError::TypeMismatch {
                field: (*field).to_string(),
                expected: field_type.name(),
                actual: value_type_name(value),
                context: context.to_string(),
            });
        }
    }
    Ok(())
}

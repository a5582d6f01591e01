//! JSON emitter.
//!
//! The document is an array of objects, one per row, with keys in
//! declaration order:
//!
//! ```text
//! [{"id": 1, "name": "Ada"},
//! {"id": 2, "name": "Alan"}]
//! ```

use crate::EmitError;
use rowgen_core::{FieldDeclaration, Row, Value};
use serde_json::json;

/// Wrapper for JSON values.
#[derive(Debug, Clone)]
pub struct JsonValue(pub serde_json::Value);

impl JsonValue {
    pub fn into_inner(self) -> serde_json::Value {
        self.0
    }
}

impl From<&Value> for JsonValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Int(i) => JsonValue(json!(*i)),
            Value::Text(s) => JsonValue(json!(s)),
            // Dates and UUIDs are rendered as strings
            Value::Date(_) | Value::Uuid(_) => JsonValue(json!(value.to_string())),
        }
    }
}

/// Emit rows as a JSON array.
pub fn emit(rows: &[Row], fields: &[FieldDeclaration]) -> Result<String, EmitError> {
    let objects = rows
        .iter()
        .map(|row| emit_object(row, fields))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(format!("[{}]", objects.join(",\n")))
}

fn emit_object(row: &Row, fields: &[FieldDeclaration]) -> Result<String, EmitError> {
    let members = fields
        .iter()
        .map(|field| -> Result<String, EmitError> {
            let key = serde_json::to_string(field.name())?;
            let value = match row.get(field.name()) {
                Some(value) => JsonValue::from(value).into_inner(),
                None => serde_json::Value::Null,
            };
            Ok(format!("{key}: {}", serde_json::to_string(&value)?))
        })
        .collect::<Result<Vec<_>, EmitError>>()?;

    Ok(format!("{{{}}}", members.join(", ")))
}

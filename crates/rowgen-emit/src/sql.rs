//! SQL emitter.
//!
//! One statement per row, statements separated by `\n`:
//!
//! ```text
//! INSERT INTO Table_Name (id, name) VALUES (1, 'Ada');
//! ```

use crate::EscapeMode;
use rowgen_core::{FieldDeclaration, Row, Value};

/// Render a value as a SQL literal.
///
/// Integers are bare; text, dates and UUIDs are single-quoted.
pub fn sql_literal(value: &Value, escape: EscapeMode) -> String {
    if !value.is_string_like() {
        return value.to_string();
    }

    let text = value.to_string();
    match escape {
        EscapeMode::Raw => format!("'{text}'"),
        EscapeMode::Escaped => format!("'{}'", text.replace('\'', "''")),
    }
}

/// Emit rows as `INSERT` statements.
pub fn emit(
    rows: &[Row],
    fields: &[FieldDeclaration],
    table_name: &str,
    escape: EscapeMode,
) -> String {
    let columns = fields
        .iter()
        .map(|f| f.name())
        .collect::<Vec<_>>()
        .join(", ");

    rows.iter()
        .map(|row| {
            let values = fields
                .iter()
                .map(|field| match row.get(field.name()) {
                    Some(value) => sql_literal(value, escape),
                    None => "NULL".to_string(),
                })
                .collect::<Vec<_>>()
                .join(", ");
            format!("INSERT INTO {table_name} ({columns}) VALUES ({values});")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

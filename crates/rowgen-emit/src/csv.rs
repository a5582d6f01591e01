//! CSV emitter.
//!
//! The first line holds the field names; each following line holds one
//! row's values in field order. Lines are separated by `\n` with no trailing
//! newline.

use crate::{EmitError, EscapeMode};
use ::csv::{QuoteStyle, Terminator, WriterBuilder};
use rowgen_core::{FieldDeclaration, Row};

/// Emit rows as CSV.
pub fn emit(
    rows: &[Row],
    fields: &[FieldDeclaration],
    escape: EscapeMode,
) -> Result<String, EmitError> {
    match escape {
        EscapeMode::Raw => Ok(emit_raw(rows, fields)),
        EscapeMode::Escaped => emit_escaped(rows, fields),
    }
}

fn header(fields: &[FieldDeclaration]) -> Vec<String> {
    fields.iter().map(|f| f.name().to_string()).collect()
}

/// Convert a row to a CSV record (vector of strings) in field order.
fn row_to_record(row: &Row, fields: &[FieldDeclaration]) -> Vec<String> {
    fields
        .iter()
        .map(|field| {
            row.get(field.name())
                .map(ToString::to_string)
                .unwrap_or_default()
        })
        .collect()
}

fn emit_raw(rows: &[Row], fields: &[FieldDeclaration]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(header(fields).join(","));
    lines.extend(rows.iter().map(|row| row_to_record(row, fields).join(",")));
    lines.join("\n")
}

fn emit_escaped(rows: &[Row], fields: &[FieldDeclaration]) -> Result<String, EmitError> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .quote_style(QuoteStyle::Necessary)
        .from_writer(Vec::new());

    writer.write_record(header(fields))?;
    for row in rows {
        writer.write_record(row_to_record(row, fields))?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    let mut text = String::from_utf8(bytes)?;
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}

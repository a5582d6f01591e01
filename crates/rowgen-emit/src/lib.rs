//! Document emitters for rowgen.
//!
//! Each emitter is a pure function from generated rows and their field
//! declarations to a complete text document:
//!
//! - [`json::emit`] - array of objects, rows separated by `,\n`
//! - [`csv::emit`] - header line plus one line per row
//! - [`sql::emit`] - one `INSERT INTO ... VALUES (...);` statement per row
//!
//! Emitters never perform I/O; persisting the [`Document`] is the caller's job.
//!
//! # Escaping
//!
//! JSON output is always valid JSON. CSV and SQL output default to
//! [`EscapeMode::Raw`], which writes values verbatim: embedded commas,
//! newlines or single quotes are not escaped. [`EscapeMode::Escaped`] quotes
//! CSV fields per RFC 4180 and doubles single quotes in SQL literals.

pub mod csv;
pub mod json;
pub mod sql;

use rowgen_core::{FieldDeclaration, OutputFormat, Row};

/// Table name used in SQL statements unless configured otherwise.
pub const DEFAULT_TABLE_NAME: &str = "Table_Name";

/// Errors that can occur while emitting a document.
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV writer error.
    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),

    /// IO error while flushing an in-memory writer.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Emitted bytes were not valid UTF-8.
    #[error("Invalid UTF-8 in document: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// How CSV and SQL emitters treat delimiters and quotes inside values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EscapeMode {
    /// Write values verbatim.
    #[default]
    Raw,
    /// Quote CSV fields where needed and double single quotes in SQL.
    Escaped,
}

/// Options shared by the emitters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    /// Table name for SQL statements.
    pub table_name: String,
    /// Escaping for CSV and SQL output.
    pub escape: EscapeMode,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            table_name: DEFAULT_TABLE_NAME.to_string(),
            escape: EscapeMode::Raw,
        }
    }
}

impl EmitOptions {
    pub fn with_table_name(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = table_name.into();
        self
    }

    pub fn with_escape(mut self, escape: EscapeMode) -> Self {
        self.escape = escape;
        self
    }
}

/// A fully serialized document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    format: OutputFormat,
    text: String,
}

impl Document {
    pub fn new(format: OutputFormat, text: String) -> Self {
        Self { format, text }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_inner(self) -> String {
        self.text
    }

    /// Size in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Emit `rows` in the given format.
pub fn emit(
    format: OutputFormat,
    rows: &[Row],
    fields: &[FieldDeclaration],
    options: &EmitOptions,
) -> Result<Document, EmitError> {
    let text = match format {
        OutputFormat::Json => json::emit(rows, fields)?,
        OutputFormat::Csv => csv::emit(rows, fields, options.escape)?,
        OutputFormat::Sql => sql::emit(rows, fields, &options.table_name, options.escape),
    };
    Ok(Document::new(format, text))
}

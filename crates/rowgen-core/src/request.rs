//! Generation requests.

use crate::field::{DeclarationError, FieldDeclaration};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Error returned when a generation request cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    /// A field declaration is invalid
    #[error(transparent)]
    Declaration(#[from] DeclarationError),

    /// Two declarations share a name
    #[error("Duplicate field name: {0}")]
    DuplicateField(String),

    /// The request declares no fields
    #[error("Request must declare at least one field")]
    NoFields,

    /// The output name is empty
    #[error("Output name must not be empty")]
    EmptyOutputName,
}

/// Target document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Csv,
    Sql,
}

impl OutputFormat {
    /// File extension appended to the output name.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Sql => "sql",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// A validated request to generate one document.
///
/// Field names are unique and kept in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    format: OutputFormat,
    output_name: String,
    row_count: u64,
    fields: Vec<FieldDeclaration>,
    seed: Option<u64>,
}

impl GenerationRequest {
    pub fn new(
        format: OutputFormat,
        output_name: impl Into<String>,
        row_count: u64,
        fields: Vec<FieldDeclaration>,
    ) -> Result<Self, RequestError> {
        let output_name = output_name.into();
        if output_name.trim().is_empty() {
            return Err(RequestError::EmptyOutputName);
        }
        if fields.is_empty() {
            return Err(RequestError::NoFields);
        }

        let mut seen = HashSet::with_capacity(fields.len());
        for field in &fields {
            if !seen.insert(field.name()) {
                return Err(RequestError::DuplicateField(field.name().to_string()));
            }
        }

        Ok(Self {
            format,
            output_name,
            row_count,
            fields,
            seed: None,
        })
    }

    /// Seed the random source for reproducible values.
    ///
    /// Identifier values still come from the shared counter.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn output_name(&self) -> &str {
        &self.output_name
    }

    /// Output file name including the format extension.
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.output_name, self.format.extension())
    }

    pub fn row_count(&self) -> u64 {
        self.row_count
    }

    pub fn fields(&self) -> &[FieldDeclaration] {
        &self.fields
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

//! Request files and field specs.
//!
//! A request file is YAML:
//!
//! ```yaml
//! format: csv
//! output: users
//! rows: 100
//! seed: 42            # optional
//! table_name: users   # optional, SQL only
//! escape: false       # optional
//! fields:
//!   - { name: id, type: ID }
//!   - { name: age, type: AGE, min: 18, max: 30 }
//! ```
//!
//! On the command line a field is written `name:TYPE` or `name:TYPE:min:max`.

use rowgen_core::{
    DeclarationError, FieldDeclaration, FieldType, GenerationRequest, OutputFormat,
    ParseFieldTypeError, RequestError,
};
use rowgen_emit::{EmitOptions, EscapeMode};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Errors that can occur while loading or resolving a request.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error reading the request file
    #[error("Failed to read request file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Malformed `name:TYPE[:min:max]` spec
    #[error("Invalid field spec '{0}': expected name:TYPE or name:TYPE:min:max")]
    InvalidFieldSpec(String),

    #[error(transparent)]
    UnknownFieldType(#[from] ParseFieldTypeError),

    #[error(transparent)]
    Declaration(#[from] DeclarationError),

    #[error(transparent)]
    Request(#[from] RequestError),

    /// A required setting was given neither in the file nor on the command line
    #[error("Missing {0}: set it in the request file or on the command line")]
    Missing(&'static str),
}

/// Request file contents before validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RequestFile {
    /// Output format
    pub format: Option<OutputFormat>,

    /// Output base name (the extension is appended)
    pub output: Option<String>,

    /// Number of rows to generate
    pub rows: Option<u64>,

    /// Random seed for reproducible values
    pub seed: Option<u64>,

    /// Table name for SQL output
    pub table_name: Option<String>,

    /// Escape delimiters and quotes in CSV/SQL output
    #[serde(default)]
    pub escape: bool,

    /// Field declarations in column order
    #[serde(default)]
    pub fields: Vec<FieldDeclaration>,
}

impl RequestFile {
    /// Parse a request from YAML text.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a request file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    /// Validate into settings for one generation run.
    pub fn into_settings(self, out_dir: PathBuf) -> Result<GenerateSettings, ConfigError> {
        let format = self.format.ok_or(ConfigError::Missing("format"))?;
        let output = self.output.ok_or(ConfigError::Missing("output"))?;
        let rows = self.rows.ok_or(ConfigError::Missing("rows"))?;

        let mut request = GenerationRequest::new(format, output, rows, self.fields)?;
        if let Some(seed) = self.seed {
            request = request.with_seed(seed);
        }

        let mut options = EmitOptions::default();
        if let Some(table_name) = self.table_name {
            options = options.with_table_name(table_name);
        }
        if self.escape {
            options = options.with_escape(EscapeMode::Escaped);
        }

        Ok(GenerateSettings {
            request,
            options,
            out_dir,
        })
    }
}

/// Everything needed for one generation run.
#[derive(Debug, Clone)]
pub struct GenerateSettings {
    pub request: GenerationRequest,
    pub options: EmitOptions,
    pub out_dir: PathBuf,
}

/// Parse `name:TYPE` or `name:TYPE:min:max`.
pub fn parse_field_spec(spec: &str) -> Result<FieldDeclaration, ConfigError> {
    let parts: Vec<&str> = spec.split(':').map(str::trim).collect();
    let invalid = || ConfigError::InvalidFieldSpec(spec.to_string());

    let (name, field_type, min, max) = match parts.as_slice() {
        [name, field_type] => (*name, *field_type, 0, 0),
        [name, field_type, min, max] => (
            *name,
            *field_type,
            min.parse::<i64>().map_err(|_| invalid())?,
            max.parse::<i64>().map_err(|_| invalid())?,
        ),
        _ => return Err(invalid()),
    };

    let field_type: FieldType = field_type.parse()?;
    Ok(FieldDeclaration::new(name, field_type, min, max)?)
}

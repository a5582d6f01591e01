//! CLI argument definitions for the generate command.

use crate::config::{parse_field_spec, ConfigError, GenerateSettings, RequestFile};
use clap::{Args, ValueEnum};
use rowgen_core::OutputFormat;
use std::path::PathBuf;

/// Output format as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Json,
    Csv,
    Sql,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Csv => OutputFormat::Csv,
            FormatArg::Sql => OutputFormat::Sql,
        }
    }
}

/// Arguments for `rowgen generate`.
///
/// Flags override values from the request file; `--field` flags replace the
/// file's field list entirely.
#[derive(Args, Clone, Debug)]
pub struct GenerateArgs {
    /// Path to a YAML request file
    #[arg(long, short = 'r')]
    pub request: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Number of rows to generate
    #[arg(long)]
    pub rows: Option<u64>,

    /// Output base name; the format extension is appended
    #[arg(long, short = 'o')]
    pub output: Option<String>,

    /// Directory to write the document to
    #[arg(long, env = "ROWGEN_OUT_DIR", default_value = ".")]
    pub out_dir: PathBuf,

    /// Random seed for reproducible values (identifiers still continue the shared counter)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Table name for SQL output
    #[arg(long, env = "ROWGEN_TABLE_NAME")]
    pub table_name: Option<String>,

    /// Quote CSV fields and escape single quotes in SQL literals
    #[arg(long)]
    pub escape: bool,

    /// Field declaration, repeatable (e.g. `id:ID`, `age:AGE:18:30`)
    #[arg(long = "field", value_name = "NAME:TYPE[:MIN:MAX]")]
    pub fields: Vec<String>,
}

impl GenerateArgs {
    /// Merge the request file (if any) with the flags and validate.
    pub fn into_settings(self) -> Result<GenerateSettings, ConfigError> {
        let mut file = match &self.request {
            Some(path) => RequestFile::from_file(path)?,
            None => RequestFile::default(),
        };

        if let Some(format) = self.format {
            file.format = Some(format.into());
        }
        if let Some(rows) = self.rows {
            file.rows = Some(rows);
        }
        if let Some(output) = self.output {
            file.output = Some(output);
        }
        if let Some(seed) = self.seed {
            file.seed = Some(seed);
        }
        if let Some(table_name) = self.table_name {
            file.table_name = Some(table_name);
        }
        if self.escape {
            file.escape = true;
        }
        if !self.fields.is_empty() {
            file.fields = self
                .fields
                .iter()
                .map(|spec| parse_field_spec(spec))
                .collect::<Result<_, _>>()?;
        }

        file.into_settings(self.out_dir)
    }
}

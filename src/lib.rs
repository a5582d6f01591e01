//! rowgen library
//!
//! Generates synthetic tabular data from an ordered list of field
//! declarations and writes it as JSON, CSV or SQL insert statements.
//!
//! # Crates
//!
//! - `rowgen_core` - field types, declarations, values and requests
//! - `rowgen_generator` - field registry, value generators, record builder
//! - `rowgen_emit` - JSON / CSV / SQL emitters
//!
//! This crate adds the request-file loader ([`config`]), CLI arguments
//! ([`args`]), the persistence adapter ([`persist`]) and the
//! [`GenerationService`] tying them together.
//!
//! # CLI Usage
//!
//! ```bash
//! # From a request file
//! rowgen generate --request users.yaml
//!
//! # Entirely from flags
//! rowgen generate --format csv --rows 100 --output users \
//!   --field id:ID --field name:FULLNAME --field age:AGE:18:30
//!
//! # List field types
//! rowgen field-types
//! ```
//!
//! # Example
//!
//! ```no_run
//! use rowgen::{FileSink, GenerationService};
//! use rowgen_core::{FieldDeclaration, FieldType, GenerationRequest, OutputFormat};
//!
//! let request = GenerationRequest::new(
//!     OutputFormat::Json,
//!     "people",
//!     10,
//!     vec![
//!         FieldDeclaration::unbounded("id", FieldType::Id).unwrap(),
//!         FieldDeclaration::unbounded("email", FieldType::Email).unwrap(),
//!     ],
//! )
//! .unwrap();
//!
//! let service = GenerationService::new(FileSink::new("."));
//! let outcome = service.process(&request).unwrap();
//! println!("Wrote {}", outcome.path.display());
//! ```

pub mod args;
pub mod config;
pub mod persist;
pub mod service;

pub use args::{FormatArg, GenerateArgs};
pub use config::{parse_field_spec, ConfigError, GenerateSettings, RequestFile};
pub use persist::{DocumentSink, FileSink, PersistenceError};
pub use service::{GenerateError, GenerateMetrics, GenerateOutcome, GenerationService};

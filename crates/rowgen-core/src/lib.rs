//! Core types for the rowgen synthetic data generator.
//!
//! This crate provides the foundational types shared by the generator,
//! the format emitters and the CLI:
//!
//! - [`FieldType`] - The closed set of synthetic value kinds
//! - [`FieldDeclaration`] - A validated (name, type, min, max) column declaration
//! - [`Value`] / [`Row`] - Generated values and ordered rows
//! - [`GenerationRequest`] - A validated request to generate a document
//!
//! # Architecture
//!
//! ```text
//! rowgen-core (this crate)
//!    │
//!    ├─── rowgen-generator  (registry, value generators, record builder)
//!    │
//!    ├─── rowgen-emit       (JSON / CSV / SQL documents)
//!    │
//!    └─── rowgen            (request files, persistence, CLI)
//! ```
//!
//! # Example
//!
//! ```rust
//! use rowgen_core::{FieldDeclaration, FieldType};
//!
//! let age = FieldDeclaration::new("age", FieldType::Age, 18, 30).unwrap();
//! assert!(age.field_type().requires_range());
//!
//! // Ranges are validated at construction time
//! assert!(FieldDeclaration::new("age", FieldType::Age, 10, 5).is_err());
//! ```

pub mod field;
pub mod request;
pub mod values;

// Re-exports for convenience
pub use field::{DeclarationError, FieldDeclaration, FieldType, ParseFieldTypeError};
pub use request::{GenerationRequest, OutputFormat, RequestError};
pub use values::{Row, Value};

//! Value generators and record materialization for rowgen.
//!
//! This crate provides the [`FieldRegistry`] mapping every
//! [`FieldType`](rowgen_core::FieldType) to its value generator, and the
//! [`RecordBuilder`] which turns an ordered list of field declarations into
//! rows.
//!
//! # Architecture
//!
//! ```text
//! [FieldDeclaration]
//!        │
//!        ▼
//! ┌─────────────────────┐
//! │   RecordBuilder     │
//! │                     │
//! │  - registry         │──── FieldType → Generator
//! │  - ids (shared)     │──── Arc<IdCounter>
//! │  - rng (injected)   │
//! └─────────┬───────────┘
//!           │
//!           ▼
//!     Row { (name, Value)... }
//! ```
//!
//! # Example
//!
//! ```rust
//! use rowgen_core::{FieldDeclaration, FieldType, Value};
//! use rowgen_generator::{IdCounter, RecordBuilder};
//! use std::sync::Arc;
//!
//! let fields = vec![
//!     FieldDeclaration::unbounded("id", FieldType::Id).unwrap(),
//!     FieldDeclaration::new("age", FieldType::Age, 18, 30).unwrap(),
//! ];
//!
//! let mut builder = RecordBuilder::seeded(42, Arc::new(IdCounter::new()));
//! let rows = builder.build(&fields, 2).unwrap();
//!
//! assert_eq!(rows[0].get("id"), Some(&Value::Int(1)));
//! assert_eq!(rows[1].get("id"), Some(&Value::Int(2)));
//! ```
//!
//! # Range conventions
//!
//! - `AGE`, `RANDOM_INT` - integer in `[min, max)`
//! - `WORDS`, `POST_TITLE` - word count in `[min, max)`
//! - `PARAGRAPHS`, `POST_BODY` - paragraph count in `[min, max)`
//! - `LETTERS` - string length in `[min, max)`
//!
//! An empty range (`min == max`) yields `min`.

pub mod builder;
pub mod counter;
pub mod generators;
pub mod registry;

// Re-exports for convenience
pub use builder::{GeneratorError, RecordBuilder};
pub use counter::IdCounter;
pub use generators::{GenContext, Generator};
pub use registry::{FieldRegistry, RegistryError};

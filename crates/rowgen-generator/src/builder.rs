//! Record builder: materializes rows from field declarations.

use crate::counter::IdCounter;
use crate::generators::{GenContext, Generator};
use crate::registry::{FieldRegistry, RegistryError};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use rowgen_core::{FieldDeclaration, Row};
use std::sync::Arc;

/// Upper bound on rows reserved up front; larger builds grow as they go.
const MAX_PREALLOCATED_ROWS: u64 = 64 * 1024;

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// A declared field type has no generator
    #[error("Cannot generate field '{field}': {source}")]
    Registry {
        field: String,
        #[source]
        source: RegistryError,
    },
}

/// Builds rows by invoking each field's generator in declaration order.
///
/// The random source is owned by the builder; the identifier counter is
/// shared with every other builder holding the same `Arc`.
pub struct RecordBuilder<R = StdRng> {
    registry: FieldRegistry,
    ids: Arc<IdCounter>,
    rng: R,
    rows_built: u64,
}

impl RecordBuilder<StdRng> {
    /// Builder using the standard registry and an entropy-seeded RNG.
    pub fn from_entropy(ids: Arc<IdCounter>) -> Self {
        Self::new(FieldRegistry::standard(), ids, StdRng::from_entropy())
    }

    /// Builder using the standard registry and a seeded RNG.
    ///
    /// The same seed yields the same non-identifier values.
    pub fn seeded(seed: u64, ids: Arc<IdCounter>) -> Self {
        Self::new(FieldRegistry::standard(), ids, StdRng::seed_from_u64(seed))
    }
}

impl<R: RngCore> RecordBuilder<R> {
    pub fn new(registry: FieldRegistry, ids: Arc<IdCounter>, rng: R) -> Self {
        Self {
            registry,
            ids,
            rng,
            rows_built: 0,
        }
    }

    /// Build `row_count` rows.
    ///
    /// Every field's generator is resolved before the first row is produced,
    /// so a registry miss fails without consuming any identifiers.
    pub fn build(
        &mut self,
        fields: &[FieldDeclaration],
        row_count: u64,
    ) -> Result<Vec<Row>, GeneratorError> {
        let generators = self.resolve(fields)?;

        let mut rows = Vec::with_capacity(initial_capacity(row_count));
        for _ in 0..row_count {
            rows.push(self.generate_row(fields, &generators));
        }

        Ok(rows)
    }

    /// Build a single row.
    pub fn next_row(&mut self, fields: &[FieldDeclaration]) -> Result<Row, GeneratorError> {
        let generators = self.resolve(fields)?;
        Ok(self.generate_row(fields, &generators))
    }

    /// Total rows produced by this builder.
    pub fn rows_built(&self) -> u64 {
        self.rows_built
    }

    pub fn ids(&self) -> &Arc<IdCounter> {
        &self.ids
    }

    pub fn registry(&self) -> &FieldRegistry {
        &self.registry
    }

    fn resolve(&self, fields: &[FieldDeclaration]) -> Result<Vec<Generator>, GeneratorError> {
        fields
            .iter()
            .map(|field| {
                self.registry
                    .lookup(field.field_type())
                    .map_err(|source| GeneratorError::Registry {
                        field: field.name().to_string(),
                        source,
                    })
            })
            .collect()
    }

    fn generate_row(&mut self, fields: &[FieldDeclaration], generators: &[Generator]) -> Row {
        let mut ctx = GenContext::new(&mut self.rng, &self.ids);
        let mut row = Row::with_capacity(fields.len());

        for (field, generate) in fields.iter().zip(generators) {
            let value = generate(&mut ctx, field.min(), field.max());
            row.push(field.name(), value);
        }

        self.rows_built += 1;
        row
    }
}

fn initial_capacity(row_count: u64) -> usize {
    usize::try_from(row_count.min(MAX_PREALLOCATED_ROWS)).unwrap_or(0)
}

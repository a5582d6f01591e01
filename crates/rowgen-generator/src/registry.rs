//! Field registry: field type → value generator.

use crate::generators::{generator_for, Generator};
use rowgen_core::FieldType;
use std::collections::HashMap;
use std::fmt;

/// Error type for registry lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// No generator is registered for the type
    #[error("Unknown field type: {0} has no registered generator")]
    UnknownFieldType(FieldType),
}

/// Maps each registered [`FieldType`] to its [`Generator`].
#[derive(Clone)]
pub struct FieldRegistry {
    generators: HashMap<FieldType, Generator>,
}

impl FieldRegistry {
    /// Registry with a generator for every field type.
    pub fn standard() -> Self {
        Self::with_types(FieldType::ALL)
    }

    /// Registry restricted to the given types.
    pub fn with_types(types: impl IntoIterator<Item = FieldType>) -> Self {
        let generators = types
            .into_iter()
            .map(|field_type| (field_type, generator_for(field_type)))
            .collect();
        Self { generators }
    }

    /// Get the generator for a field type.
    pub fn lookup(&self, field_type: FieldType) -> Result<Generator, RegistryError> {
        self.generators
            .get(&field_type)
            .copied()
            .ok_or(RegistryError::UnknownFieldType(field_type))
    }

    /// Whether the type's generator consumes `(min, max)`.
    pub fn requires_range(&self, field_type: FieldType) -> bool {
        field_type.requires_range()
    }

    pub fn contains(&self, field_type: FieldType) -> bool {
        self.generators.contains_key(&field_type)
    }

    /// Registered types in declaration order.
    pub fn types(&self) -> Vec<FieldType> {
        FieldType::ALL
            .into_iter()
            .filter(|t| self.contains(*t))
            .collect()
    }
}

impl Default for FieldRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for FieldRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRegistry")
            .field("types", &self.types())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_registers_everything() {
        let registry = FieldRegistry::standard();

        for field_type in FieldType::ALL {
            assert!(registry.lookup(field_type).is_ok(), "{field_type} missing");
        }
        assert_eq!(registry.types(), FieldType::ALL.to_vec());
    }

    #[test]
    fn test_lookup_miss() {
        let registry = FieldRegistry::with_types([FieldType::Id, FieldType::Email]);

        assert!(registry.lookup(FieldType::Id).is_ok());
        assert_eq!(
            registry.lookup(FieldType::Age).err(),
            Some(RegistryError::UnknownFieldType(FieldType::Age))
        );
        assert_eq!(registry.types(), vec![FieldType::Id, FieldType::Email]);
    }

    #[test]
    fn test_requires_range() {
        let registry = FieldRegistry::standard();

        assert!(registry.requires_range(FieldType::Age));
        assert!(registry.requires_range(FieldType::PostBody));
        assert!(registry.requires_range(FieldType::Letters));
        assert!(!registry.requires_range(FieldType::Id));
        assert!(!registry.requires_range(FieldType::Paragraph));
        assert!(!registry.requires_range(FieldType::Date));
    }
}

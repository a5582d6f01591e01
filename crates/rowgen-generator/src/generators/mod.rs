//! Individual value generators for each field type.
//!
//! Each module exposes functions generic over the random source; the
//! dispatch table in [`generator_for`] adapts them to the uniform
//! [`Generator`] signature used by the registry.

pub mod corpus;
pub mod date;
pub mod geo;
pub mod numeric;
pub mod person;
pub mod text;
pub mod uuid;

use crate::counter::IdCounter;
use rand::RngCore;
use rowgen_core::{FieldType, Value};

/// Per-call generation state: the injected random source and the shared
/// identifier counter.
pub struct GenContext<'a> {
    rng: &'a mut dyn RngCore,
    ids: &'a IdCounter,
}

impl<'a> GenContext<'a> {
    pub fn new(rng: &'a mut dyn RngCore, ids: &'a IdCounter) -> Self {
        Self { rng, ids }
    }

    /// The random source.
    pub fn rng(&mut self) -> &mut dyn RngCore {
        &mut *self.rng
    }

    /// The identifier counter.
    pub fn ids(&self) -> &IdCounter {
        self.ids
    }
}

/// A value generator: `(context, min, max) -> Value`.
///
/// Generators for types that do not require a range ignore `min` and `max`.
pub type Generator = fn(&mut GenContext<'_>, i64, i64) -> Value;

/// Get the generator for a field type.
pub fn generator_for(field_type: FieldType) -> Generator {
    match field_type {
        FieldType::Id => |ctx, _, _| numeric::generate_id(ctx.ids()),

        FieldType::Uuid => |ctx, _, _| uuid::generate_uuid_v4(&mut ctx.rng()),

        FieldType::BookTitle => |ctx, _, _| text::generate_book_title(&mut ctx.rng()),

        FieldType::BookAuthor => |ctx, _, _| text::generate_book_author(&mut ctx.rng()),

        FieldType::PostTitle | FieldType::Words => {
            |ctx, min, max| text::generate_words(&mut ctx.rng(), min, max)
        }

        FieldType::PostBody | FieldType::Paragraphs => {
            |ctx, min, max| text::generate_paragraphs(&mut ctx.rng(), min, max)
        }

        FieldType::FirstName => |ctx, _, _| person::generate_first_name(&mut ctx.rng()),

        FieldType::LastName => |ctx, _, _| person::generate_last_name(&mut ctx.rng()),

        FieldType::Username => |ctx, _, _| person::generate_username(&mut ctx.rng()),

        FieldType::FullName => |ctx, _, _| person::generate_full_name(&mut ctx.rng()),

        FieldType::BloodGroup => |ctx, _, _| person::generate_blood_group(&mut ctx.rng()),

        FieldType::Email => |ctx, _, _| person::generate_email(&mut ctx.rng()),

        FieldType::Gender => |ctx, _, _| person::generate_gender(&mut ctx.rng()),

        FieldType::Phone => |ctx, _, _| person::generate_phone(&mut ctx.rng()),

        FieldType::Date => |ctx, _, _| date::generate_date(&mut ctx.rng(), date::max_year()),

        FieldType::CountryCode => |ctx, _, _| geo::generate_country_code(&mut ctx.rng()),

        FieldType::CountryZipCode => |ctx, _, _| geo::generate_zip_code(&mut ctx.rng()),

        FieldType::Capital => |ctx, _, _| geo::generate_capital(&mut ctx.rng()),

        FieldType::Word => |ctx, _, _| text::generate_word(&mut ctx.rng()),

        FieldType::Paragraph => |ctx, _, _| text::generate_paragraph(&mut ctx.rng()),

        FieldType::Age | FieldType::RandomInt => {
            |ctx, min, max| numeric::generate_int_range(&mut ctx.rng(), min, max)
        }

        FieldType::Letters => |ctx, min, max| text::generate_letters(&mut ctx.rng(), min, max),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn generate(field_type: FieldType, min: i64, max: i64) -> Value {
        let mut rng = StdRng::seed_from_u64(42);
        let ids = IdCounter::new();
        let mut ctx = GenContext::new(&mut rng, &ids);
        generator_for(field_type)(&mut ctx, min, max)
    }

    #[test]
    fn test_every_type_generates() {
        for field_type in FieldType::ALL {
            let value = generate(field_type, 1, 4);
            match field_type {
                FieldType::Id | FieldType::Age | FieldType::RandomInt => {
                    assert!(matches!(value, Value::Int(_)), "{field_type}: {value:?}")
                }
                FieldType::Uuid => assert!(matches!(value, Value::Uuid(_))),
                FieldType::Date => assert!(matches!(value, Value::Date(_))),
                _ => assert!(matches!(value, Value::Text(_)), "{field_type}: {value:?}"),
            }
        }
    }

    #[test]
    fn test_id_generator_uses_counter() {
        let mut rng = StdRng::seed_from_u64(1);
        let ids = IdCounter::starting_at(41);
        let mut ctx = GenContext::new(&mut rng, &ids);
        let generate_id = generator_for(FieldType::Id);

        assert_eq!(generate_id(&mut ctx, 0, 0), Value::Int(41));
        assert_eq!(generate_id(&mut ctx, 0, 0), Value::Int(42));
    }

    #[test]
    fn test_deterministic_generation() {
        for field_type in FieldType::ALL {
            assert_eq!(generate(field_type, 2, 6), generate(field_type, 2, 6));
        }
    }
}

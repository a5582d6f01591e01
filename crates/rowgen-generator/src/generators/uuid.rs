//! UUID value generator.

use rand::Rng;
use rowgen_core::Value;
use uuid::Builder;

/// Random version-4 UUID drawn from the injected random source, so seeded
/// builds repeat their UUIDs.
pub fn generate_uuid_v4<R: Rng>(rng: &mut R) -> Value {
    let bytes: [u8; 16] = rng.gen();
    Value::Uuid(Builder::from_random_bytes(bytes).into_uuid())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use uuid::{Uuid, Variant};

    fn as_uuid(value: Value) -> Uuid {
        match value {
            Value::Uuid(uuid) => uuid,
            other => panic!("Expected Uuid value, got {other:?}"),
        }
    }

    #[test]
    fn test_version_and_variant_bits() {
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..100 {
            let uuid = as_uuid(generate_uuid_v4(&mut rng));
            assert_eq!(uuid.get_version_num(), 4);
            assert_eq!(uuid.get_variant(), Variant::RFC4122);
        }
    }

    #[test]
    fn test_canonical_text_form() {
        let mut rng = StdRng::seed_from_u64(3);
        let text = generate_uuid_v4(&mut rng).to_string();

        assert_eq!(text.len(), 36);
        assert_eq!(text, text.to_ascii_lowercase());
        let groups: Vec<usize> = text.split('-').map(str::len).collect();
        assert_eq!(groups, vec![8, 4, 4, 4, 12]);
        assert_eq!(&text[14..15], "4");
    }

    #[test]
    fn test_seeded_sequence_repeats() {
        let draw = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..5).map(|_| generate_uuid_v4(&mut rng)).collect::<Vec<_>>()
        };

        assert_eq!(draw(11), draw(11));
        assert_ne!(draw(11), draw(12));
    }
}

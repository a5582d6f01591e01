//! Geography value generators.

use super::corpus::COUNTRIES;
use fake::faker::address::en::ZipCode;
use fake::Fake;
use rand::seq::SliceRandom;
use rand::Rng;
use rowgen_core::Value;

/// ISO 3166-1 alpha-3 country code.
pub fn generate_country_code<R: Rng>(rng: &mut R) -> Value {
    let code = COUNTRIES.choose(rng).map(|(code, _)| *code).unwrap_or_default();
    Value::Text(code.to_string())
}

/// Capital city, drawn independently of any country code in the same row.
pub fn generate_capital<R: Rng>(rng: &mut R) -> Value {
    let capital = COUNTRIES
        .choose(rng)
        .map(|(_, capital)| *capital)
        .unwrap_or_default();
    Value::Text(capital.to_string())
}

pub fn generate_zip_code<R: Rng>(rng: &mut R) -> Value {
    Value::Text(ZipCode().fake_with_rng(rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_country_code_from_corpus() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            let Value::Text(code) = generate_country_code(&mut rng) else {
                panic!("Expected Text value");
            };
            assert!(COUNTRIES.iter().any(|(c, _)| *c == code));
        }
    }

    #[test]
    fn test_capital_from_corpus() {
        let mut rng = StdRng::seed_from_u64(42);
        let Value::Text(capital) = generate_capital(&mut rng) else {
            panic!("Expected Text value");
        };
        assert!(COUNTRIES.iter().any(|(_, c)| *c == capital));
    }

    #[test]
    fn test_zip_code_has_digits() {
        let mut rng = StdRng::seed_from_u64(42);
        let Value::Text(zip) = generate_zip_code(&mut rng) else {
            panic!("Expected Text value");
        };
        assert!(zip.chars().any(|c| c.is_ascii_digit()));
    }
}

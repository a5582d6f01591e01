//! Person-related value generators: names, contact details, gender and
//! blood group.

use super::corpus::{BLOOD_GROUPS, EMAIL_DOMAINS, GENDERS};
use fake::faker::internet::en::Username;
use fake::faker::name::en::{FirstName, LastName, Name};
use fake::faker::phone_number::en::CellNumber;
use fake::Fake;
use rand::seq::SliceRandom;
use rand::Rng;
use rowgen_core::Value;

/// Pick one entry of a non-empty corpus.
pub(crate) fn pick<R: Rng>(rng: &mut R, pool: &[&str]) -> String {
    pool.choose(rng).copied().unwrap_or_default().to_string()
}

pub fn generate_first_name<R: Rng>(rng: &mut R) -> Value {
    Value::Text(FirstName().fake_with_rng(rng))
}

pub fn generate_last_name<R: Rng>(rng: &mut R) -> Value {
    Value::Text(LastName().fake_with_rng(rng))
}

pub fn generate_full_name<R: Rng>(rng: &mut R) -> Value {
    Value::Text(Name().fake_with_rng(rng))
}

pub fn generate_username<R: Rng>(rng: &mut R) -> Value {
    Value::Text(Username().fake_with_rng(rng))
}

/// `<username>@<domain>` with the domain chosen uniformly.
pub fn generate_email<R: Rng>(rng: &mut R) -> Value {
    let username: String = Username().fake_with_rng(rng);
    let domain = pick(rng, EMAIL_DOMAINS);
    Value::Text(format!("{username}@{domain}"))
}

/// `MALE` or `FEMALE`, uniformly.
pub fn generate_gender<R: Rng>(rng: &mut R) -> Value {
    Value::Text(pick(rng, GENDERS))
}

pub fn generate_phone<R: Rng>(rng: &mut R) -> Value {
    Value::Text(CellNumber().fake_with_rng(rng))
}

pub fn generate_blood_group<R: Rng>(rng: &mut R) -> Value {
    Value::Text(pick(rng, BLOOD_GROUPS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn text(value: Value) -> String {
        match value {
            Value::Text(s) => s,
            other => panic!("Expected Text value, got {other:?}"),
        }
    }

    #[test]
    fn test_email_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut domains = std::collections::HashSet::new();

        for _ in 0..200 {
            let email = text(generate_email(&mut rng));
            let (user, domain) = email.split_once('@').expect("email contains @");
            assert!(!user.is_empty());
            assert!(EMAIL_DOMAINS.contains(&domain), "unexpected domain {domain}");
            domains.insert(domain.to_string());
        }

        assert_eq!(domains.len(), 2);
    }

    #[test]
    fn test_gender_values() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();

        for _ in 0..100 {
            let gender = text(generate_gender(&mut rng));
            assert!(gender == "MALE" || gender == "FEMALE");
            seen.insert(gender);
        }

        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_blood_group_from_corpus() {
        let mut rng = StdRng::seed_from_u64(42);
        let group = text(generate_blood_group(&mut rng));
        assert!(BLOOD_GROUPS.contains(&group.as_str()));
    }

    #[test]
    fn test_names_not_empty() {
        let mut rng = StdRng::seed_from_u64(42);
        assert!(!text(generate_first_name(&mut rng)).is_empty());
        assert!(!text(generate_last_name(&mut rng)).is_empty());
        assert!(text(generate_full_name(&mut rng)).contains(' '));
        assert!(!text(generate_username(&mut rng)).is_empty());
        assert!(!text(generate_phone(&mut rng)).is_empty());
    }
}

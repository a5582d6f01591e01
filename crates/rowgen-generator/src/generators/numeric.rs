//! Numeric value generators.

use crate::counter::IdCounter;
use rand::Rng;
use rowgen_core::Value;

/// Draw an integer from `[min, max)`, or `min` when the range is empty.
pub fn draw_in<R: Rng>(rng: &mut R, min: i64, max: i64) -> i64 {
    if min >= max {
        min
    } else {
        rng.gen_range(min..max)
    }
}

/// Draw a count from `[min, max)`, clamped at zero.
pub fn draw_count<R: Rng>(rng: &mut R, min: i64, max: i64) -> usize {
    usize::try_from(draw_in(rng, min, max)).unwrap_or(0)
}

/// Generate a random integer in `[min, max)`.
pub fn generate_int_range<R: Rng>(rng: &mut R, min: i64, max: i64) -> Value {
    Value::Int(draw_in(rng, min, max))
}

/// Take the next identifier from the shared counter.
pub fn generate_id(ids: &IdCounter) -> Value {
    Value::Int(i64::try_from(ids.next_id()).unwrap_or(i64::MAX))
}

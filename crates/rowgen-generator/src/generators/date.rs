//! Calendar date generator.

use chrono::{Datelike, NaiveDate, Utc};
use rand::Rng;
use rowgen_core::Value;

/// Earliest year a generated date can fall in.
pub const MIN_YEAR: i32 = 1900;

/// Latest year a generated date can fall in: the year before the current one.
pub fn max_year() -> i32 {
    Utc::now().year() - 1
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in the given month (1-12).
pub fn last_day_of_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Generate a date with year in `[MIN_YEAR, max_year]`, month in `[1, 12]`
/// and day in `[1, last day of that month]`, all inclusive.
pub fn generate_date<R: Rng>(rng: &mut R, max_year: i32) -> Value {
    let year = rng.gen_range(MIN_YEAR..=max_year.max(MIN_YEAR));
    let month = rng.gen_range(1..=12);
    let day = rng.gen_range(1..=last_day_of_month(year, month));

    Value::Date(NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default())
}

//! Property tests for the Easter computation.

use proptest::prelude::*;

use gregorian_easter::{
    EARLIEST_EASTER, EasterDate, EasterError, LATEST_EASTER, MAX_EASTER_YEAR, MIN_EASTER_YEAR,
    compute, easter_date, euclidean_remainder,
};

/// Day of week in the proleptic Gregorian calendar, 0 for Sunday
/// (Sakamoto's method).
fn weekday(year: i32, month: u8, day: u8) -> i64 {
    const OFFSETS: [i64; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];
    let y = i64::from(year) - i64::from(month < 3);
    (y + y / 4 - y / 100 + y / 400 + OFFSETS[usize::from(month - 1)] + i64::from(day)) % 7
}

fn valid_year() -> impl Strategy<Value = i32> {
    prop_oneof![
        MIN_EASTER_YEAR..=10_000,
        MIN_EASTER_YEAR..=MAX_EASTER_YEAR,
        (MAX_EASTER_YEAR - 1_000)..=MAX_EASTER_YEAR,
    ]
}

fn invalid_year() -> impl Strategy<Value = i32> {
    prop_oneof![
        i32::MIN..MIN_EASTER_YEAR,
        (MAX_EASTER_YEAR + 1)..=i32::MAX,
        Just(1582),
        Just(i32::MIN),
        Just(i32::MAX),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 512,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every computable year yields a day of March or April within bounds.
    #[test]
    fn property_month_and_day_in_range(year in valid_year()) {
        let (month, day) = compute(year).unwrap();
        match month {
            3 => prop_assert!((1..=31).contains(&day), "March {}", day),
            4 => prop_assert!((1..=30).contains(&day), "April {}", day),
            _ => prop_assert!(false, "month {} for year {}", month, year),
        }
    }

    /// PROPERTY: Easter lies between March 22 and April 25 inclusive.
    #[test]
    fn property_within_easter_window(year in valid_year()) {
        let date = compute(year).unwrap();
        prop_assert!(EARLIEST_EASTER <= date && date <= LATEST_EASTER, "{:?} for {}", date, year);
    }

    /// PROPERTY: Easter is always a Sunday.
    #[test]
    fn property_is_sunday(year in valid_year()) {
        let (month, day) = compute(year).unwrap();
        prop_assert_eq!(weekday(year, month, day), 0, "{}-{:02}-{:02}", year, month, day);
    }

    /// PROPERTY: years outside the domain are rejected with the year echoed back.
    #[test]
    fn property_invalid_years_rejected(year in invalid_year()) {
        prop_assert_eq!(compute(year), Err(EasterError::InvalidYear { year }));
        prop_assert!(easter_date(year).is_err());
    }

    /// PROPERTY: the computation is deterministic.
    #[test]
    fn property_deterministic(year in valid_year()) {
        prop_assert_eq!(compute(year), compute(year));
    }

    /// PROPERTY: the typed and untyped entry points agree, and the
    /// rendered date parses back to the same value.
    #[test]
    fn property_typed_matches_untyped(year in valid_year()) {
        let date = easter_date(year).unwrap();
        prop_assert_eq!((date.month(), date.day()), compute(year).unwrap());

        let parsed: EasterDate = date.to_string().parse().unwrap();
        prop_assert_eq!(parsed, date);
    }

    /// PROPERTY: the euclidean remainder lies in `0..divisor` and differs from
    /// the dividend by a multiple of the divisor.
    #[test]
    fn property_euclidean_remainder(dividend in any::<i32>(), divisor in 1..=1_000i32) {
        let r = euclidean_remainder(dividend, divisor);
        prop_assert!((0..divisor).contains(&r));
        prop_assert_eq!((i64::from(dividend) - i64::from(r)) % i64::from(divisor), 0);
    }
}

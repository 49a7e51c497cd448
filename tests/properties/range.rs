//! Property tests for year ranges.

use proptest::prelude::*;

use gregorian_easter::{EasterRange, MAX_EASTER_YEAR, MIN_EASTER_YEAR, easter_date};

fn span() -> impl Strategy<Value = (i32, i32)> {
    (MIN_EASTER_YEAR..=MAX_EASTER_YEAR, 0..64i32)
        .prop_map(|(start, len)| (start, start.saturating_add(len).min(MAX_EASTER_YEAR)))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a range yields exactly one date per year, in order, matching
    /// the single-year computation.
    #[test]
    fn property_range_matches_single_years((start, end) in span()) {
        let range = EasterRange::from_years(start, end).unwrap();
        let dates: Vec<_> = range.iter().collect();

        prop_assert_eq!(dates.len(), range.year_count());
        for (date, year) in dates.iter().zip(start..=end) {
            prop_assert_eq!(*date, easter_date(year).unwrap());
        }
    }

    /// PROPERTY: iterating backwards yields the same dates reversed.
    #[test]
    fn property_range_reverse((start, end) in span()) {
        let range = EasterRange::from_years(start, end).unwrap();
        let mut forward: Vec<_> = range.iter().collect();
        let backward: Vec<_> = range.iter().rev().collect();

        forward.reverse();
        prop_assert_eq!(forward, backward);
    }

    /// PROPERTY: the rendered range parses back to itself.
    #[test]
    fn property_range_display_parses((start, end) in span()) {
        let range = EasterRange::from_years(start, end).unwrap();
        let parsed: EasterRange = range.to_string().parse().unwrap();
        prop_assert_eq!(parsed, range);
    }
}

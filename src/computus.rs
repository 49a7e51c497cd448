//! Lilius/Clavius computation of Gregorian Easter Sunday.
//!
//! Follows D. Knuth, *The Art of Computer Programming* vol. 1, 1.3.2,
//! algorithm E. Every step is plain integer arithmetic on positive operands,
//! except the epact which goes through [`euclidean_remainder`].

use crate::consts::{APRIL, CENTURY, DAYS_IN_MARCH, EQUINOX_DAY, MARCH, METONIC_CYCLE, SYNODIC_MONTH, WEEK};
use crate::{EasterError, Year};
use tracing::trace;

/// Remainder of the euclidean division of `dividend` by a positive `divisor`.
///
/// The `%` operator truncates towards zero, so it yields a negative remainder
/// for a negative dividend. The result here always lies in `0..divisor`.
#[inline]
pub const fn euclidean_remainder(dividend: i32, divisor: i32) -> i32 {
    debug_assert!(divisor > 0);
    let r = dividend % divisor;
    if r < 0 { r + divisor } else { r }
}

/// Position of the year in the 19-year Metonic cycle, in `1..=19`
pub(crate) const fn golden_number(year: i32) -> i32 {
    year % METONIC_CYCLE + 1
}

pub(crate) const fn century(year: i32) -> i32 {
    year / CENTURY + 1
}

/// Number of leap years dropped so far: one every century except every
/// fourth one. Offset so the 16th century gives 0.
pub(crate) const fn leap_year_correction(century: i32) -> i32 {
    3 * century / 4 - 12
}

/// Correction for the Metonic cycle not being exactly 19 years
pub(crate) const fn metonic_correction(century: i32) -> i32 {
    (8 * century + 5) / 25 - 5
}

/// Unreduced weekday number (0 for Sunday) of March 21.
///
/// Five days are gained every four years, minus one per dropped leap year.
/// `5 * 1583 / 4 % 7 == 4` is the weekday of March 31, 1583, ten days after
/// March 21. Positive over the whole domain: it exceeds `497 * year / 400`.
pub(crate) const fn march_weekday(year: i32, leap_correction: i32) -> i32 {
    5 * year / 4 - leap_correction - 10
}

/// Age of the ecclesiastical moon on January 1, in `0..30`, before the
/// 24/25 adjustment.
pub(crate) const fn epact(golden: i32, leap_correction: i32, metonic_correction: i32) -> i32 {
    euclidean_remainder(
        11 * golden + 20 + metonic_correction - leap_correction,
        SYNODIC_MONTH,
    )
}

/// Epact 24 always, and epact 25 in the second half of the Metonic cycle,
/// would place the full moon on a date the cycle already used; shift them by one.
pub(crate) const fn adjusted_epact(epact: i32, golden: i32) -> i32 {
    if (epact == 25 && golden > 11) || epact == 24 {
        epact + 1
    } else {
        epact
    }
}

/// Day of March (counting from 1, may run into April) of the ecclesiastical
/// full moon falling on or just after March 21. In `21..=50`.
pub(crate) const fn paschal_full_moon(epact: i32) -> i32 {
    let n = 44 - epact;
    if n < EQUINOX_DAY { n + SYNODIC_MONTH } else { n }
}

/// First Sunday strictly after day `full_moon` of March.
///
/// `(weekday + full_moon) % 7` is the weekday of the full moon; both operands
/// are positive so `%` is the mathematical remainder.
pub(crate) const fn following_sunday(weekday: i32, full_moon: i32) -> i32 {
    full_moon + WEEK - (weekday + full_moon) % WEEK
}

/// Easter Sunday of a validated year as `(month, day)`.
pub(crate) fn month_day(year: Year) -> (u8, u8) {
    let year = year.get();

    let g = golden_number(year);
    let c = century(year);
    let x = leap_year_correction(c);
    let z = metonic_correction(c);
    let d = march_weekday(year, x);
    let e = adjusted_epact(epact(g, x, z), g);
    let full_moon = paschal_full_moon(e);
    let n = following_sunday(d, full_moon);

    trace!(year, golden = g, epact = e, full_moon, sunday = n, "computed easter");

    // n is within 22..=56
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let n = n as u8;
    if n <= DAYS_IN_MARCH {
        (MARCH, n)
    } else {
        (APRIL, n - DAYS_IN_MARCH)
    }
}

/// Computes the Gregorian Easter Sunday of `year` as `(month, day)`.
///
/// `month` is 3 (March) or 4 (April).
///
/// # Errors
/// Returns `EasterError::InvalidYear` if `year` is outside
/// `MIN_EASTER_YEAR..=MAX_EASTER_YEAR`.
pub fn compute(year: i32) -> Result<(u8, u8), EasterError> {
    let year = Year::new(year)?;
    Ok(month_day(year))
}

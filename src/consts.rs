/// First year with a Gregorian Easter date.
/// The calendar was instituted in October 1582 and Easter falls in March or
/// April, so 1583 is the first year the computation applies to.
pub const MIN_EASTER_YEAR: i32 = 1583;

/// Last year for which the computation is carried out.
/// Theoretical only (the rules may change before then); it keeps `5 * year`
/// within `i32`.
pub const MAX_EASTER_YEAR: i32 = i32::MAX / 5;

/// Month number for March
pub const MARCH: u8 = 3;
/// Month number for April
pub const APRIL: u8 = 4;

/// Days in March, the split point between March and April results
pub const DAYS_IN_MARCH: u8 = 31;
/// Days in April
pub const DAYS_IN_APRIL: u8 = 30;

/// Earliest possible Easter Sunday (March 22)
pub const EARLIEST_EASTER: (u8, u8) = (MARCH, 22);
/// Latest possible Easter Sunday (April 25)
pub const LATEST_EASTER: (u8, u8) = (APRIL, 25);

/// Length of the Metonic cycle in years
pub(crate) const METONIC_CYCLE: i32 = 19;
/// Years per century
pub(crate) const CENTURY: i32 = 100;
/// Epacts are counted modulo a 30-day synodic month
pub(crate) const SYNODIC_MONTH: i32 = 30;
/// Days per week
pub(crate) const WEEK: i32 = 7;
/// Day of March of the ecclesiastical vernal equinox
pub(crate) const EQUINOX_DAY: i32 = 21;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Range separator (ISO 8601 interval format)
pub const RANGE_SEPARATOR: char = '/';

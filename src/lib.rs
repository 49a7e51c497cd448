//! Gregorian Easter Sunday dates, computed with the Lilius/Clavius algorithm.
//!
//! ```
//! use gregorian_easter::{easter_date, compute};
//!
//! assert_eq!(compute(2024), Ok((3, 31)));
//! assert_eq!(easter_date(2025).unwrap().to_string(), "2025-04-20");
//! ```

mod computus;
mod consts;
mod prelude;
mod range;
mod types;

pub use computus::{compute, euclidean_remainder};
pub use consts::*;
pub use range::{EasterRange, RangeError, YearIter};
pub use types::{Day, EasterMonth, Year};

use crate::prelude::*;
use std::str::FromStr;

/// Error returned when Easter cannot be computed for a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum EasterError {
    /// Year outside `MIN_EASTER_YEAR..=MAX_EASTER_YEAR`.
    #[error("Invalid year: {year} (must be {}-{})", MIN_EASTER_YEAR, MAX_EASTER_YEAR)]
    InvalidYear { year: i32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid month: {_0} (Easter falls in March or April)")]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {month:02}")]
    InvalidDay { month: u8, day: u8 },
    #[display(fmt = "{date} is not Easter Sunday (Easter of that year is {easter})")]
    NotEaster { date: String, easter: EasterDate },
    #[display(fmt = "{_0}")]
    Easter(EasterError),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Easter(err) => Some(err),
            _ => None,
        }
    }
}

impl From<EasterError> for ParseError {
    fn from(err: EasterError) -> Self {
        Self::Easter(err)
    }
}

/// Easter Sunday of a given year.
///
/// Can only be obtained from the computation (or by parsing a string that
/// the computation agrees with), so every value is a real Easter date.
/// Orders chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.number()", "day.get()")]
pub struct EasterDate {
    year:  Year,
    month: EasterMonth,
    day:   Day,
}

/// Computes Easter Sunday of `year`.
///
/// # Errors
/// Returns `EasterError::InvalidYear` if `year` is outside
/// `MIN_EASTER_YEAR..=MAX_EASTER_YEAR`.
pub fn easter_date(year: i32) -> Result<EasterDate, EasterError> {
    Year::new(year).map(EasterDate::for_year)
}

impl EasterDate {
    /// Easter Sunday of an already validated year
    pub fn for_year(year: Year) -> Self {
        let (month, day) = computus::month_day(year);
        let month = match month {
            MARCH => EasterMonth::March,
            _ => EasterMonth::April,
        };
        // 22..=31 in March, 1..=25 in April
        let day = Day::from_computed(day);
        Self { year, month, day }
    }

    /// Returns the year
    pub const fn year(&self) -> i32 {
        self.year.get()
    }

    /// Returns the month number (3 or 4)
    pub const fn month(&self) -> u8 {
        self.month.number()
    }

    /// Returns the day of month
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn year_typed(&self) -> Year {
        self.year
    }

    pub const fn month_typed(&self) -> EasterMonth {
        self.month
    }

    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Converts to plain integers: (year, month, day)
    pub const fn to_tuple(self) -> (i32, u8, u8) {
        (self.year(), self.month(), self.day())
    }
}

impl From<Year> for EasterDate {
    fn from(year: Year) -> Self {
        Self::for_year(year)
    }
}

impl FromStr for EasterDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(format!(
                "expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, got {trimmed}"
            )));
        };

        let year = Year::new(parse_number::<i32>(year)?)?;
        let month = EasterMonth::new(parse_number::<u8>(month)?)?;
        let day = Day::new(parse_number::<u8>(day)?, month)?;

        let easter = Self::for_year(year);
        if easter.month != month || easter.day != day {
            return Err(ParseError::NotEaster {
                date: trimmed.to_owned(),
                easter,
            });
        }
        Ok(easter)
    }
}

fn parse_number<T: FromStr>(s: &str) -> Result<T, ParseError> {
    s.parse::<T>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

impl serde::Serialize for EasterDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for EasterDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

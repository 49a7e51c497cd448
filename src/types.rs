use crate::consts::{APRIL, DAYS_IN_APRIL, DAYS_IN_MARCH, MARCH, MAX_EASTER_YEAR, MIN_EASTER_YEAR};
use crate::prelude::*;
use crate::{EasterError, ParseError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// A year for which a Gregorian Easter date can be computed,
/// guaranteed to be in the range `MIN_EASTER_YEAR..=MAX_EASTER_YEAR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Year(i32);

impl Year {
    /// Smallest computable year
    pub const MIN: Self = Self(MIN_EASTER_YEAR);
    /// Largest computable year
    pub const MAX: Self = Self(MAX_EASTER_YEAR);

    /// Creates a new Year, validating that it lies within the computable domain
    ///
    /// # Errors
    /// Returns `EasterError::InvalidYear` if the value is below `MIN_EASTER_YEAR`
    /// or above `MAX_EASTER_YEAR`.
    pub fn new(value: i32) -> Result<Self, EasterError> {
        if !(MIN_EASTER_YEAR..=MAX_EASTER_YEAR).contains(&value) {
            return Err(EasterError::InvalidYear { year: value });
        }
        Ok(Self(value))
    }

    /// Returns the year value as i32
    #[inline]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for Year {
    type Error = EasterError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for i32 {
    fn from(year: Year) -> Self {
        year.0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The two months Easter Sunday can fall in
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum EasterMonth {
    #[display(fmt = "March")]
    March,
    #[display(fmt = "April")]
    April,
}

impl EasterMonth {
    /// Creates an `EasterMonth` from its month number
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` unless the value is 3 or 4.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        match value {
            MARCH => Ok(Self::March),
            APRIL => Ok(Self::April),
            _ => Err(ParseError::InvalidMonth(value)),
        }
    }

    /// Month number (3 or 4)
    #[inline]
    pub const fn number(self) -> u8 {
        match self {
            Self::March => MARCH,
            Self::April => APRIL,
        }
    }

    /// Number of days in the month
    pub const fn days(self) -> u8 {
        match self {
            Self::March => DAYS_IN_MARCH,
            Self::April => DAYS_IN_APRIL,
        }
    }
}

impl TryFrom<u8> for EasterMonth {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EasterMonth> for u8 {
    fn from(month: EasterMonth) -> Self {
        month.number()
    }
}

/// A day of March or April.
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating it against the length of `month`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the value is 0 or past the end of the month.
    pub fn new(value: u8, month: EasterMonth) -> Result<Self, ParseError> {
        let invalid = || ParseError::InvalidDay {
            month: month.number(),
            day:   value,
        };
        let non_zero = NonZeroU8::new(value).ok_or_else(invalid)?;
        if value > month.days() {
            return Err(invalid());
        }
        Ok(Self(non_zero))
    }

    /// Day produced by the Easter computation, which is never 0
    pub(crate) const fn from_computed(value: u8) -> Self {
        debug_assert!(value != 0);
        Self(NonZeroU8::MIN.saturating_add(value - 1))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

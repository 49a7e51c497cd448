use std::{iter::FusedIterator, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{EasterDate, EasterError, RANGE_SEPARATOR, Year, prelude::*};

/// An inclusive span of years, iterated as the Easter date of each year.
/// The start year must be less than or equal to the end year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct EasterRange {
    start: Year,
    end:   Year,
}

/// Error type for year range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Start year is after end year.
    #[error("Invalid year range: start ({start}) is after end ({end})")]
    InvalidRange { start: Year, end: Year },

    /// One of the years cannot be computed.
    #[error(transparent)]
    Easter(#[from] EasterError),

    /// Invalid range format.
    #[error("Invalid range format: {0}")]
    InvalidFormat(String),
}

impl EasterRange {
    /// Creates a new year range with validation.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if start > end.
    pub fn new(start: Year, end: Year) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a range from raw years, validating both ends.
    ///
    /// # Errors
    /// Returns `RangeError::Easter` if either year is outside the computable
    /// domain, or `RangeError::InvalidRange` if start > end.
    pub fn from_years(start: i32, end: i32) -> Result<Self, RangeError> {
        Self::new(Year::new(start)?, Year::new(end)?)
    }

    /// Returns the first year of the range
    pub const fn start(&self) -> Year {
        self.start
    }

    /// Returns the last year of the range
    pub const fn end(&self) -> Year {
        self.end
    }

    /// Number of years (and Easter dates) in the range, always at least 1
    #[allow(clippy::cast_sign_loss)]
    pub const fn year_count(&self) -> usize {
        // start <= end
        (self.end.get() - self.start.get()) as usize + 1
    }

    /// Checks if the range covers the given year
    pub fn contains(&self, year: i32) -> bool {
        (self.start.get()..=self.end.get()).contains(&year)
    }

    /// Iterates over the Easter date of every year in the range, in order
    pub const fn iter(&self) -> YearIter {
        YearIter {
            front: self.start.get(),
            back:  self.end.get(),
        }
    }
}

/// Iterator over the Easter dates of an [`EasterRange`].
#[derive(Debug, Clone)]
pub struct YearIter {
    front: i32,
    back:  i32,
}

impl YearIter {
    #[allow(clippy::cast_sign_loss)]
    const fn remaining(&self) -> usize {
        if self.front > self.back {
            0
        } else {
            (self.back - self.front) as usize + 1
        }
    }
}

impl Iterator for YearIter {
    type Item = EasterDate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front > self.back {
            return None;
        }
        let year = Year::new(self.front).ok()?;
        self.front += 1;
        Some(EasterDate::for_year(year))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for YearIter {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front > self.back {
            return None;
        }
        let year = Year::new(self.back).ok()?;
        self.back -= 1;
        Some(EasterDate::for_year(year))
    }
}

impl ExactSizeIterator for YearIter {}

impl FusedIterator for YearIter {}

impl IntoIterator for EasterRange {
    type Item = EasterDate;
    type IntoIter = YearIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &EasterRange {
    type Item = EasterDate;
    type IntoIter = YearIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromStr for EasterRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        let Some((start_str, end_str)) = trimmed.split_once(RANGE_SEPARATOR) else {
            return Err(RangeError::InvalidFormat(format!(
                "No range separator found (expected '{RANGE_SEPARATOR}'): {s}"
            )));
        };
        if end_str.contains(RANGE_SEPARATOR) {
            return Err(RangeError::InvalidFormat(format!(
                "Too many '{RANGE_SEPARATOR}' separators: expected 1 in {s}"
            )));
        }

        let parse = |part: &str| {
            part.trim()
                .parse::<i32>()
                .map_err(|_| RangeError::InvalidFormat(part.trim().to_owned()))
        };
        Self::from_years(parse(start_str)?, parse(end_str)?)
    }
}

impl Serialize for EasterRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for EasterRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

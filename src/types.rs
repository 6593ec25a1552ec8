use crate::consts::{MAX_CENTURY, MAX_REFERENCE_YEAR, MIN_REFERENCE_YEAR, YEARS_PER_CENTURY};
use crate::options::OptionsError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A two-digit century prefix, guaranteed to be in the range `0..=MAX_CENTURY` (0..=99)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Century(u8);

impl Century {
    /// Creates a new Century, validating that it fits in two digits
    ///
    /// # Errors
    /// Returns `OptionsError::InvalidCentury` if the value is > `MAX_CENTURY`.
    pub const fn new(value: u8) -> Result<Self, OptionsError> {
        if value > MAX_CENTURY {
            return Err(OptionsError::InvalidCentury(value));
        }
        Ok(Self(value))
    }

    /// Century of a full year in `0..=9999`
    pub(crate) fn of_year(year: u16) -> Self {
        debug_assert!(year <= MAX_REFERENCE_YEAR);
        Self(u8::try_from(year / YEARS_PER_CENTURY).unwrap_or(MAX_CENTURY))
    }

    /// Returns the century value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Century {
    type Error = OptionsError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Century> for u8 {
    fn from(century: Century) -> Self {
        century.0
    }
}

impl fmt::Display for Century {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

/// The year century inference counts back from, guaranteed to be in the
/// range `MIN_REFERENCE_YEAR..=MAX_REFERENCE_YEAR` (200..=9999).
///
/// The lower bound keeps a `+` divider, which goes back another hundred
/// years, inside a non-negative century.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct ReferenceYear(u16);

impl ReferenceYear {
    /// Creates a new `ReferenceYear`
    ///
    /// # Errors
    /// Returns `OptionsError::InvalidReferenceYear` if the value is outside
    /// `MIN_REFERENCE_YEAR..=MAX_REFERENCE_YEAR`.
    pub const fn new(value: u16) -> Result<Self, OptionsError> {
        if value < MIN_REFERENCE_YEAR || value > MAX_REFERENCE_YEAR {
            return Err(OptionsError::InvalidReferenceYear(value));
        }
        Ok(Self(value))
    }

    #[inline]
    pub const fn get(self) -> u16 {
        self.0
    }
}

impl TryFrom<u16> for ReferenceYear {
    type Error = OptionsError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ReferenceYear> for u16 {
    fn from(year: ReferenceYear) -> Self {
        year.0
    }
}

impl fmt::Display for ReferenceYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

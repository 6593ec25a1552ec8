mod calendar;
mod consts;
mod luhn;
mod options;
mod parser;
mod prelude;
mod types;

pub use calendar::{is_leap_year, valid_date};
pub use consts::*;
pub use luhn::luhn;
pub use options::{CenturyRule, Options, OptionsError};
pub use parser::Divider;
pub use types::{Century, ReferenceYear};

use chrono::{Datelike, Local, NaiveDate};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A Swedish personal identity number ("personnummer") or coordination
/// number ("samordningsnummer").
///
/// Construction never fails: input that does not look like a number yields
/// an empty value whose [`valid`](Self::valid) is `false`. Use
/// [`try_parse`](Self::try_parse) or [`FromStr`] to get the reason instead.
/// Derived queries on an invalid value are computed but meaningless.
///
/// Equality and hashing cover the number as written, divider included, but
/// not the serial policy it was parsed under.
#[derive(Debug, Clone, Copy)]
pub struct Personnummer {
    century: u8,
    year: u8,
    month: u8,
    day: u8,
    serial: u16,
    control: u8,
    divider: Divider,
    matched: bool,
    reject_zero_serial: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Input does not have the `[CC]YYMMDD[-+]NNNC` shape.
    #[error("Invalid personal identity number format: {0:?}")]
    InvalidFormat(String),

    /// Checked a value built from input that did not parse.
    #[error("No personal identity number was parsed")]
    Unparsed,

    /// Birth date (coordination offset removed) does not exist.
    #[error("Invalid birth date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u8, day: u8 },

    /// Serial `000` while [`Options::reject_zero_serial`] is set.
    #[error("Serial number 000 is not allowed")]
    ZeroSerial,

    /// Control digit does not match the Luhn checksum.
    #[error("Invalid control digit {found} (expected {expected})")]
    InvalidChecksum { expected: u8, found: u8 },
}

impl Default for Personnummer {
    fn default() -> Self {
        Self {
            century: DEFAULT_CENTURY,
            year: 0,
            month: 0,
            day: 0,
            serial: 0,
            control: 0,
            divider: Divider::Absent,
            matched: false,
            reject_zero_serial: false,
        }
    }
}

impl Personnummer {
    /// Parses `input` with default [`Options`]. Unparseable input gives the
    /// empty, invalid value.
    pub fn new(input: &str) -> Self {
        Self::parse_with(input, &Options::default())
    }

    /// Same as [`Personnummer::new`].
    pub fn parse(input: &str) -> Self {
        Self::new(input)
    }

    /// Parses `input` with the given options. Unparseable input gives the
    /// empty, invalid value.
    pub fn parse_with(input: &str, options: &Options) -> Self {
        Self::try_parse_with(input, options).unwrap_or_else(|_| Self {
            reject_zero_serial: options.reject_zero_serial,
            ..Self::default()
        })
    }

    /// Parses `input` with default [`Options`].
    ///
    /// # Errors
    /// Returns `ParseError::InvalidFormat` if the input does not have the
    /// shape of a personal identity number. Calendar and checksum errors are
    /// reported by [`check`](Self::check), not here.
    pub fn try_parse(input: &str) -> Result<Self, ParseError> {
        Self::try_parse_with(input, &Options::default())
    }

    /// Parses `input` with the given options.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidFormat` if the input does not have the
    /// shape of a personal identity number.
    pub fn try_parse_with(input: &str, options: &Options) -> Result<Self, ParseError> {
        let Some(parts) = parser::split(input) else {
            tracing::debug!(
                len = input.len(),
                "input is not shaped like a personal identity number"
            );
            return Err(ParseError::InvalidFormat(input.to_owned()));
        };

        let century = parts.century.unwrap_or_else(|| {
            options
                .century
                .century_for(parts.year, parts.divider)
                .get()
        });

        Ok(Self {
            century,
            year: parts.year,
            month: parts.month,
            day: parts.day,
            serial: parts.serial,
            control: parts.control.unwrap_or(0),
            divider: parts.divider,
            matched: true,
            reject_zero_serial: options.reject_zero_serial,
        })
    }

    /// Explains why the number is invalid, if it is.
    ///
    /// # Errors
    /// Returns the first failing rule: `Unparsed`, `InvalidDate`,
    /// `ZeroSerial`, `InvalidChecksum`.
    pub fn check(&self) -> Result<(), ParseError> {
        let result = self.check_rules();
        if let Err(err) = &result {
            tracing::debug!(error = %err, "personal identity number failed validation");
        }
        result
    }

    fn check_rules(&self) -> Result<(), ParseError> {
        if !self.matched {
            return Err(ParseError::Unparsed);
        }

        let (year, month, day) = (self.year(), self.month, self.birth_day());
        if !valid_date(year, month, day) {
            return Err(ParseError::InvalidDate { year, month, day });
        }

        if self.reject_zero_serial && self.serial == 0 {
            return Err(ParseError::ZeroSerial);
        }

        let expected = self.checksum();
        if expected != self.control {
            return Err(ParseError::InvalidChecksum {
                expected,
                found: self.control,
            });
        }

        Ok(())
    }

    /// Whether the number is well formed, has a real birth date and a
    /// matching control digit. It says nothing about whether the number was
    /// ever issued.
    pub fn valid(&self) -> bool {
        self.check().is_ok()
    }

    /// Luhn control digit computed from the date and serial.
    ///
    /// Coordination numbers are checksummed over the actual day of birth,
    /// so `800161-329` and `800101-329` share a control digit.
    pub fn checksum(&self) -> u8 {
        let digits = format!(
            "{:02}{:02}{:02}{:03}",
            self.year,
            self.month,
            self.birth_day(),
            self.serial
        );
        luhn(&digits)
    }

    /// Two-digit century, parsed or inferred.
    pub const fn century(&self) -> u8 {
        self.century
    }

    /// Full birth year.
    pub fn year(&self) -> i32 {
        i32::from(self.century) * 100 + i32::from(self.year)
    }

    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Day field as written, including the coordination offset.
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Day of month of the birth date, coordination offset removed.
    pub const fn birth_day(&self) -> u8 {
        self.day % COORDINATION_OFFSET
    }

    pub const fn serial(&self) -> u16 {
        self.serial
    }

    pub const fn control(&self) -> u8 {
        self.control
    }

    pub const fn divider(&self) -> Divider {
        self.divider
    }

    /// Birth date, or `None` if it is not a real date.
    pub fn date_of_birth(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(
            self.year(),
            u32::from(self.month),
            u32::from(self.birth_day()),
        )
    }

    /// Completed years of age on `reference`.
    pub fn age_at(&self, reference: NaiveDate) -> i32 {
        let years = reference.year() - self.year();
        let birthday = (u32::from(self.month), u32::from(self.birth_day()));
        if (reference.month(), reference.day()) < birthday {
            years - 1
        } else {
            years
        }
    }

    /// Completed years of age today, by the local clock.
    pub fn get_age(&self) -> i32 {
        self.age_at(Local::now().date_naive())
    }

    pub const fn is_coordination_number(&self) -> bool {
        self.day > COORDINATION_OFFSET
    }

    /// The last serial digit is even for women.
    pub const fn is_female(&self) -> bool {
        (self.serial % 10) % 2 == 0
    }

    pub const fn is_male(&self) -> bool {
        !self.is_female()
    }

    /// Renders `[CC]YYMMDD-NNNC`. The divider is always `-` and the day is
    /// written as registered, coordination offset included.
    pub fn format(&self, long_format: bool) -> String {
        self.render(long_format, HYPHEN_DIVIDER)
    }

    fn render(&self, long_format: bool, divider: impl fmt::Display) -> String {
        let short = format!(
            "{:02}{:02}{:02}{divider}{:03}{}",
            self.year, self.month, self.day, self.serial, self.control
        );
        if long_format {
            format!("{:02}{short}", self.century)
        } else {
            short
        }
    }

    #[allow(clippy::type_complexity)]
    const fn key(&self) -> (u8, u8, u8, u8, u16, u8, Divider, bool) {
        (
            self.century,
            self.year,
            self.month,
            self.day,
            self.serial,
            self.control,
            self.divider,
            self.matched,
        )
    }
}

impl PartialEq for Personnummer {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Personnummer {}

impl Hash for Personnummer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for Personnummer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(true))
    }
}

impl FromStr for Personnummer {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_parse(s)
    }
}

impl TryFrom<&str> for Personnummer {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_parse(value)
    }
}

impl serde::Serialize for Personnummer {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        // keeps the parsed divider so the value reads back unchanged
        self.check().map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&self.render(true, self.divider))
    }
}

impl<'de> serde::Deserialize<'de> for Personnummer {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let pnr = Self::try_parse(&s).map_err(serde::de::Error::custom)?;
        pnr.check().map_err(serde::de::Error::custom)?;
        Ok(pnr)
    }
}

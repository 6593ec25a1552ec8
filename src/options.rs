use serde::{Deserialize, Serialize};

use crate::DEFAULT_CENTURY;
use crate::consts::YEARS_PER_CENTURY;
use crate::parser::Divider;
use crate::types::{Century, ReferenceYear};

/// Error type for out-of-range configuration values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OptionsError {
    #[error("Invalid century: {0} (must be 0-{max})", max = crate::MAX_CENTURY)]
    InvalidCentury(u8),

    #[error(
        "Invalid reference year: {0} (must be {min}-{max})",
        min = crate::MIN_REFERENCE_YEAR,
        max = crate::MAX_REFERENCE_YEAR
    )]
    InvalidReferenceYear(u16),
}

/// How a short-form number (no century digits) gets its century.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CenturyRule {
    /// Always use this century.
    Fixed(Century),
    /// Pick the most recent century that puts the birth year at or before
    /// `reference_year`, going back another hundred years for a `+` divider.
    FromDivider { reference_year: ReferenceYear },
}

impl Default for CenturyRule {
    fn default() -> Self {
        Self::Fixed(Century::of_year(u16::from(DEFAULT_CENTURY) * YEARS_PER_CENTURY))
    }
}

impl CenturyRule {
    /// # Errors
    /// Returns `OptionsError::InvalidCentury` for more than two digits.
    pub const fn fixed(century: u8) -> Result<Self, OptionsError> {
        match Century::new(century) {
            Ok(century) => Ok(Self::Fixed(century)),
            Err(err) => Err(err),
        }
    }

    /// # Errors
    /// Returns `OptionsError::InvalidReferenceYear` if the year is outside
    /// `MIN_REFERENCE_YEAR..=MAX_REFERENCE_YEAR`.
    pub const fn from_divider(reference_year: u16) -> Result<Self, OptionsError> {
        match ReferenceYear::new(reference_year) {
            Ok(reference_year) => Ok(Self::FromDivider { reference_year }),
            Err(err) => Err(err),
        }
    }

    /// Century for a two-digit `year` written with `divider`.
    pub fn century_for(self, year: u8, divider: Divider) -> Century {
        match self {
            Self::Fixed(century) => century,
            Self::FromDivider { reference_year } => {
                // at least one full century left after a `+`
                let latest = if divider == Divider::Plus {
                    reference_year.get() - YEARS_PER_CENTURY
                } else {
                    reference_year.get()
                };
                let year = u16::from(year) % YEARS_PER_CENTURY;
                let start = latest - latest % YEARS_PER_CENTURY;
                let full = if year <= latest % YEARS_PER_CENTURY {
                    start + year
                } else {
                    start - YEARS_PER_CENTURY + year
                };
                Century::of_year(full)
            }
        }
    }
}

/// Parsing configuration.
///
/// Deserializes from a partial table, so a host application can embed it in
/// its own configuration file and only spell out what differs from
/// [`Options::default`]. Out-of-range centuries and reference years are
/// rejected while deserializing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    pub century: CenturyRule,
    /// Treat serial `000` as invalid. Off by default.
    pub reject_zero_serial: bool,
}

impl Options {
    pub fn with_century(mut self, century: CenturyRule) -> Self {
        self.century = century;
        self
    }

    pub fn with_reject_zero_serial(mut self, reject: bool) -> Self {
        self.reject_zero_serial = reject;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MAX_REFERENCE_YEAR, MIN_REFERENCE_YEAR};

    fn century(rule: CenturyRule, year: u8, divider: Divider) -> u8 {
        rule.century_for(year, divider).get()
    }

    #[test]
    fn test_fixed_ignores_divider() {
        let rule = CenturyRule::default();
        assert_eq!(century(rule, 13, Divider::Plus), 19);
        assert_eq!(century(rule, 13, Divider::Hyphen), 19);
        assert_eq!(century(CenturyRule::fixed(20).unwrap(), 5, Divider::Absent), 20);
    }

    #[test]
    fn test_fixed_bounds() {
        assert!(CenturyRule::fixed(0).is_ok());
        assert!(CenturyRule::fixed(99).is_ok());
        assert_eq!(
            CenturyRule::fixed(200),
            Err(OptionsError::InvalidCentury(200))
        );
    }

    #[test]
    fn test_from_divider() {
        let rule = CenturyRule::from_divider(2024).unwrap();
        assert_eq!(century(rule, 90, Divider::Hyphen), 19);
        assert_eq!(century(rule, 24, Divider::Hyphen), 20);
        assert_eq!(century(rule, 25, Divider::Absent), 19);
        assert_eq!(century(rule, 0, Divider::Absent), 20);
        assert_eq!(century(rule, 13, Divider::Plus), 19);
        assert_eq!(century(rule, 24, Divider::Plus), 19);
        assert_eq!(century(rule, 25, Divider::Plus), 18);
    }

    #[test]
    fn test_from_divider_at_the_limits() {
        let earliest = CenturyRule::from_divider(MIN_REFERENCE_YEAR).unwrap();
        assert_eq!(century(earliest, 99, Divider::Plus), 0);
        assert_eq!(century(earliest, 0, Divider::Plus), 1);
        assert_eq!(century(earliest, 99, Divider::Hyphen), 1);

        let latest = CenturyRule::from_divider(MAX_REFERENCE_YEAR).unwrap();
        assert_eq!(century(latest, 99, Divider::Hyphen), 99);
        assert_eq!(century(latest, 0, Divider::Plus), 98);

        assert_eq!(
            CenturyRule::from_divider(MIN_REFERENCE_YEAR - 1),
            Err(OptionsError::InvalidReferenceYear(199))
        );
        assert_eq!(
            CenturyRule::from_divider(30000),
            Err(OptionsError::InvalidReferenceYear(30000))
        );
    }

    #[test]
    fn test_builder() {
        let options = Options::default()
            .with_century(CenturyRule::fixed(20).unwrap())
            .with_reject_zero_serial(true);
        assert_eq!(options.century, CenturyRule::fixed(20).unwrap());
        assert!(options.reject_zero_serial);
    }

    #[test]
    fn test_serde_defaults() {
        let options: Options = serde_json::from_str("{}").unwrap();
        assert_eq!(options, Options::default());

        let options: Options = serde_json::from_str(r#"{"reject_zero_serial": true}"#).unwrap();
        assert_eq!(options.century, CenturyRule::fixed(19).unwrap());
        assert!(options.reject_zero_serial);

        let options: Options =
            serde_json::from_str(r#"{"century": {"from_divider": {"reference_year": 2024}}}"#)
                .unwrap();
        assert_eq!(options.century, CenturyRule::from_divider(2024).unwrap());
    }

    #[test]
    fn test_serde_rejects_out_of_range() {
        let cases = [
            r#"{"century": {"fixed": 200}}"#,
            r#"{"century": {"fixed": 100}}"#,
            r#"{"century": {"from_divider": {"reference_year": -2147483648}}}"#,
            r#"{"century": {"from_divider": {"reference_year": 30000}}}"#,
            r#"{"century": {"from_divider": {"reference_year": 199}}}"#,
        ];
        for json in cases {
            let result: Result<Options, _> = serde_json::from_str(json);
            assert!(result.is_err(), "{json} should be rejected");
        }
    }
}

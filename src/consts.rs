/// Added to the day of month to form a coordination number ("samordningsnummer")
pub const COORDINATION_OFFSET: u8 = 60;

/// Century assumed for short-form numbers when nothing else is known
pub const DEFAULT_CENTURY: u8 = 19;

/// Largest two-digit century prefix
pub const MAX_CENTURY: u8 = 99;

/// Years in a century, for splitting a full year into century and year
pub(crate) const YEARS_PER_CENTURY: u16 = 100;

/// Earliest reference year accepted for century inference
pub const MIN_REFERENCE_YEAR: u16 = 200;
/// Latest reference year accepted for century inference
pub const MAX_REFERENCE_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Longest month of the year
pub const MAX_DAY: u8 = 31;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Divider written between birth date and serial for people under 100
pub const HYPHEN_DIVIDER: char = '-';
/// Divider written between birth date and serial for people aged 100 or more
pub const PLUS_DIVIDER: char = '+';

/// Digits in the date part of a short-form number (YYMMDD)
pub(crate) const SHORT_DATE_DIGITS: usize = 6;
/// Digits in the date part of a long-form number (CCYYMMDD)
pub(crate) const LONG_DATE_DIGITS: usize = 8;
/// Digits in the birth serial
pub(crate) const SERIAL_DIGITS: usize = 3;

use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_DAY, MAX_MONTH, MIN_DAY,
};

pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Checks that `year-month-day` is a real Gregorian date.
///
/// The day must already have the coordination offset removed; a raw
/// coordination day such as 61 is rejected here.
pub const fn valid_date(year: i32, month: u8, day: u8) -> bool {
    if month < 1 || month > MAX_MONTH {
        return false;
    }

    if day < MIN_DAY || day > MAX_DAY {
        return false;
    }

    // 30-day months and February
    if day == MAX_DAY && DAYS_IN_MONTH[month as usize] < MAX_DAY {
        return false;
    }

    if month == FEBRUARY && day > DAYS_IN_MONTH[FEBRUARY as usize] {
        return day == FEBRUARY_DAYS_LEAP && is_leap_year(year);
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    #[test]
    fn test_valid_dates() {
        let cases = [(1990, 1, 1), (1990, 1, 31), (1990, 2, 28), (2016, 2, 29), (2020, 4, 30)];
        for (y, m, d) in cases {
            assert!(valid_date(y, m, d), "{y}-{m:02}-{d:02} should be valid");
        }
    }

    #[test]
    fn test_invalid_dates() {
        let cases = [
            (1990, 13, 1),
            (1990, 0, 1),
            (1990, 1, 0),
            (1990, 1, 32),
            (2017, 2, 29),
            (2016, 2, 30),
            (2020, 4, 31),
            (2020, 6, 31),
            (2020, 9, 31),
            (2020, 11, 31),
        ];
        for (y, m, d) in cases {
            assert!(!valid_date(y, m, d), "{y}-{m:02}-{d:02} should be invalid");
        }
    }

    #[test]
    fn test_coordination_day_is_not_a_date() {
        assert!(!valid_date(1980, 1, 61));
    }

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year: i32,
            is_leap: bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year: 2020,
                is_leap: true,
                description: "divisible by 4",
            },
            TestCase {
                year: 2021,
                is_leap: false,
                description: "not divisible by 4",
            },
            TestCase {
                year: 1900,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2100,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2000,
                is_leap: true,
                description: "divisible by 400",
            },
            TestCase {
                year: 1600,
                is_leap: true,
                description: "divisible by 400",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({})",
                case.year,
                case.description,
            );
        }
    }

    proptest! {
        /// Agrees with chrono for every month and day in a wide year window.
        #[test]
        fn agrees_with_chrono(year in 1000i32..3000, month in 0u8..=14, day in 0u8..=33) {
            let reference =
                NaiveDate::from_ymd_opt(year, u32::from(month), u32::from(day)).is_some();
            prop_assert_eq!(valid_date(year, month, day), reference);
        }

        /// February 29th exists exactly in Gregorian leap years.
        #[test]
        fn leap_day_follows_gregorian_rule(year in 1i32..10_000) {
            let leap = year % 400 == 0 || (year % 100 != 0 && year % 4 == 0);
            prop_assert_eq!(valid_date(year, 2, 29), leap);
        }
    }
}

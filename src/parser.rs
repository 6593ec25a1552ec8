//! Splits a personal identity number into its raw fields.
//!
//! Accepts `[CC]YYMMDD[-+]NNN[C]`: an optional century, the birth date, an
//! optional divider, the three-digit serial and an optional control digit.
//! Without a divider the digit count alone decides which optional parts are
//! present (11 or 12 digits carry a century, an even count carries a control
//! digit).

use serde::{Deserialize, Serialize};

use crate::consts::{
    HYPHEN_DIVIDER, LONG_DATE_DIGITS, PLUS_DIVIDER, SERIAL_DIGITS, SHORT_DATE_DIGITS,
};
use crate::prelude::*;

/// Separator between the birth date and the serial.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Divider {
    /// `-`, the person is younger than 100
    #[display(fmt = "-")]
    Hyphen,
    /// `+`, the person has turned 100
    #[display(fmt = "+")]
    Plus,
    /// No divider in the input
    #[default]
    #[display(fmt = "")]
    Absent,
}

impl Divider {
    fn from_char(c: char) -> Option<Self> {
        match c {
            HYPHEN_DIVIDER => Some(Self::Hyphen),
            PLUS_DIVIDER => Some(Self::Plus),
            _ => None,
        }
    }
}

/// Raw fields of a matched input, before any century rule is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parts {
    pub century: Option<u8>,
    pub year: u8,
    pub month: u8,
    pub day: u8,
    pub serial: u16,
    pub control: Option<u8>,
    pub divider: Divider,
}

/// Decomposes `input`, or returns `None` if it does not have the expected shape.
pub fn split(input: &str) -> Option<Parts> {
    let (date, divider, tail) = match input.find([HYPHEN_DIVIDER, PLUS_DIVIDER]) {
        Some(at) => {
            let divider = input[at..].chars().next().and_then(Divider::from_char)?;
            (&input[..at], divider, &input[at + 1..])
        }
        None => {
            // century and control digit only go together with 12 digits
            let date_len = if input.len() >= LONG_DATE_DIGITS + SERIAL_DIGITS {
                LONG_DATE_DIGITS
            } else {
                SHORT_DATE_DIGITS
            };
            let at = date_len.min(input.len());
            if !input.is_char_boundary(at) {
                return None;
            }
            (&input[..at], Divider::Absent, &input[at..])
        }
    };

    if !all_digits(date) || !all_digits(tail) {
        return None;
    }
    if date.len() != SHORT_DATE_DIGITS && date.len() != LONG_DATE_DIGITS {
        return None;
    }
    if tail.len() != SERIAL_DIGITS && tail.len() != SERIAL_DIGITS + 1 {
        return None;
    }

    let (century, date) = if date.len() == LONG_DATE_DIGITS {
        (Some(number(&date[..2])), &date[2..])
    } else {
        (None, date)
    };
    let control = tail.get(SERIAL_DIGITS..).filter(|c| !c.is_empty()).map(number);

    Some(Parts {
        century: century.map(narrow),
        year: narrow(number(&date[0..2])),
        month: narrow(number(&date[2..4])),
        day: narrow(number(&date[4..6])),
        serial: number(&tail[..SERIAL_DIGITS]),
        control: control.map(narrow),
        divider,
    })
}

fn all_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

/// Value of an all-digit slice of at most three digits
fn number(digits: &str) -> u16 {
    digits
        .bytes()
        .fold(0, |acc, b| acc * 10 + u16::from(b - b'0'))
}

/// Two-digit fields always fit in a byte
fn narrow(value: u16) -> u8 {
    u8::try_from(value).unwrap_or(u8::MAX)
}

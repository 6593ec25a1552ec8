/// Computes the Luhn check digit for a string of ASCII digits.
///
/// The first digit sits in a doubled position, so for the nine digits of
/// `YYMMDDNNN` this yields the tenth digit of a personal identity number.
/// Callers must only pass ASCII digits.
///
/// # Panics
/// Panics in debug builds if `digits` contains anything but ASCII digits.
/// Release builds never panic; such input yields an unspecified digit.
pub fn luhn(digits: &str) -> u8 {
    debug_assert!(
        digits.bytes().all(|b| b.is_ascii_digit()),
        "luhn input must be ASCII digits: {digits:?}"
    );

    let sum = digits
        .bytes()
        .map(|b| b.wrapping_sub(b'0') % 10)
        .zip([true, false].into_iter().cycle())
        .fold(0u8, |sum, (digit, doubled)| {
            let digit = if doubled {
                let twice = digit * 2;
                if twice > 9 { twice - 9 } else { twice }
            } else {
                digit
            };
            (sum + digit) % 10
        });

    (10 - sum) % 10
}

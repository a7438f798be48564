use std::ops::RangeInclusive;

use crate::error::{NumError, NumResult};

/// Digit counts accepted as a payment card number.
pub const CARD_LENGTHS: RangeInclusive<usize> = 13..=19;

/// Luhn checksum of a card number given as a plain digit string.
///
/// Malformed input (empty, non-digits, or a length outside
/// [`CARD_LENGTHS`]) is an error; a well-formed number with a bad checksum
/// is `Ok(false)`.
pub fn luhn_valid(number: &str) -> NumResult<bool> {
    if number.is_empty() {
        return Err(NumError::InvalidCardNumber("number is empty".into()));
    }
    if !number.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NumError::InvalidCardNumber(
            "number must contain only digits".into(),
        ));
    }
    if !CARD_LENGTHS.contains(&number.len()) {
        return Err(NumError::InvalidCardNumber(format!(
            "{} digits, expected {} to {}",
            number.len(),
            CARD_LENGTHS.start(),
            CARD_LENGTHS.end()
        )));
    }

    let sum: u32 = number
        .bytes()
        .rev()
        .map(|b| u32::from(b - b'0'))
        .enumerate()
        .map(|(i, d)| match (i % 2 == 1, d * 2) {
            (true, doubled) if doubled > 9 => doubled - 9,
            (true, doubled) => doubled,
            (false, _) => d,
        })
        .sum();
    Ok(sum % 10 == 0)
}

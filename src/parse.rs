use log::trace;

use crate::bigint::BigInt;
use crate::chunks::iter_digit_chunks;
use crate::error::ParseError;
use crate::limb::{Limb, DIGITS_PER_LIMB};

/// Parses a decimal digit sequence into a [`BigInt`].
///
/// Only `'0'..='9'` are accepted; signs, whitespace and separators are
/// rejected rather than skipped. Leading zeros are allowed and dropped, so
/// `"007"` and `"7"` parse to the same value.
pub fn parse(input: &str) -> Result<BigInt, ParseError> {
    if input.is_empty() {
        return Err(ParseError::empty());
    }
    if let Some(pos) = input.bytes().position(|b| !b.is_ascii_digit()) {
        return Err(ParseError::invalid_digit(pos));
    }

    let significant = input.trim_start_matches('0');
    let mut limbs = Vec::with_capacity(significant.len() / DIGITS_PER_LIMB + 1);
    // Every byte is an ASCII digit from here on.
    for chunk in iter_digit_chunks(significant) {
        let limb = chunk
            .iter()
            .fold(0, |acc: Limb, &b| acc * 10 + Limb::from(b - b'0'));
        limbs.push(limb);
    }
    // all zeros
    if limbs.is_empty() {
        limbs.push(0);
    }

    trace!("parsed {} digits into {} limbs", input.len(), limbs.len());
    Ok(BigInt::from_normalized(limbs))
}

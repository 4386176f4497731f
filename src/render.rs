use std::fmt::{self, Write};

use log::trace;

use crate::bigint::BigInt;
use crate::limb::{Limb, DIGITS_PER_LIMB};

/// Renders a [`BigInt`] as canonical decimal digits.
///
/// The output has no leading zeros; zero renders as `"0"`.
pub fn render(value: &BigInt) -> String {
    let digits = value.to_string();
    trace!(
        "rendered {} limbs into {} digits",
        value.len(),
        digits.len()
    );
    digits
}

/// Writes the limbs most significant first. The top limb is written as is,
/// every limb below it is zero-padded to a full digit group.
pub(crate) fn write_digits<W: Write>(limbs: &[Limb], out: &mut W) -> fmt::Result {
    let Some((top, rest)) = limbs.split_last() else {
        return out.write_char('0');
    };
    write!(out, "{}", top)?;
    for limb in rest.iter().rev() {
        write!(out, "{:0width$}", limb, width = DIGITS_PER_LIMB)?;
    }
    Ok(())
}

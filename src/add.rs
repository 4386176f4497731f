use std::cmp;

use log::trace;

use crate::bigint::BigInt;
use crate::limb::BASE;

/// Adds two big integers limb-by-limb and returns the sum as a new value.
///
/// Neither operand is modified, so `add(&x, &x)` doubles `x`. The shorter
/// operand reads as 0 past its last limb. A carry out of the top limb opens
/// one extra limb.
pub fn add(a: &BigInt, b: &BigInt) -> BigInt {
    let result_size = cmp::max(a.len(), b.len());
    let mut sum = Vec::with_capacity(result_size + 1);
    let mut carry = 0;

    for i in 0..result_size {
        // At most 2 * (BASE - 1) + 1, which fits in a limb.
        let s = a.limb(i) + b.limb(i) + carry;
        if s >= BASE {
            sum.push(s - BASE);
            carry = 1;
        } else {
            sum.push(s);
            carry = 0;
        }
    }

    // Write any remaining carry.
    if carry > 0 {
        sum.push(carry);
    }

    trace!(
        "added {} + {} limbs into {} limbs",
        a.len(),
        b.len(),
        sum.len()
    );
    BigInt::from_normalized(sum)
}

//! Limb representation shared by the parser, the adder and the renderer.
//!
//! A limb holds `DIGITS_PER_LIMB` decimal digits, so the limb base is a power
//! of ten. Two full limbs plus a carry still fit in a `Limb`:
//! `2 * (10^18 - 1) + 1 < 2^64`.

/// One "digit" of a big integer in base `BASE`.
pub type Limb = u64;

/// Number of decimal digits stored in one limb.
pub const DIGITS_PER_LIMB: usize = 18;

/// The limb base, `10^DIGITS_PER_LIMB`.
pub const BASE: Limb = power_of_ten(DIGITS_PER_LIMB);

/// Returns 10^n. `n` must not exceed 19.
pub const fn power_of_ten(n: usize) -> Limb {
    let mut r: Limb = 1;
    let mut i = 0;
    while i < n {
        r *= 10;
        i += 1;
    }
    r
}

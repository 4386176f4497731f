use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

use num_bigint::BigUint;
use num_traits::Zero;

use crate::add::add;
use crate::error::{LimbError, ParseError};
use crate::limb::{Limb, BASE, DIGITS_PER_LIMB};
use crate::parse::parse;
use crate::render::write_digits;

/// A non-negative integer of arbitrary size.
///
/// Stored as limbs in base `10^18`, least significant limb first. There is
/// always at least one limb, every limb is below [`BASE`], and the most
/// significant limb is non-zero unless the value is zero (a single `0`
/// limb). The limb count is the length of the vector, so it can never drift
/// out of sync with the storage.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    limbs: Vec<Limb>,
}

impl BigInt {
    pub fn zero() -> Self {
        BigInt { limbs: vec![0] }
    }

    /// Builds a value from limbs given least significant first.
    ///
    /// Zero limbs at the top are dropped and an empty vector means zero.
    /// Fails if any limb is not below [`BASE`].
    pub fn from_limbs(mut limbs: Vec<Limb>) -> Result<Self, LimbError> {
        if let Some((index, &value)) = limbs.iter().enumerate().find(|&(_, &l)| l >= BASE) {
            return Err(LimbError { index, value });
        }
        trim_high_zeros(&mut limbs);
        Ok(BigInt { limbs })
    }

    /// Wraps limbs that already hold the invariants.
    pub(crate) fn from_normalized(limbs: Vec<Limb>) -> Self {
        debug_assert!(!limbs.is_empty());
        debug_assert!(limbs.iter().all(|&l| l < BASE));
        debug_assert!(limbs.len() == 1 || limbs[limbs.len() - 1] != 0);
        BigInt { limbs }
    }

    /// Number of limbs, always at least one.
    // never empty, so there is no `is_empty`
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.limbs.len()
    }

    pub fn limbs(&self) -> &[Limb] {
        &self.limbs
    }

    /// The limb at `index`, or 0 past the most significant limb.
    #[inline]
    pub fn limb(&self, index: usize) -> Limb {
        self.limbs.get(index).copied().unwrap_or(0)
    }

    pub fn is_zero(&self) -> bool {
        self.limbs == [0]
    }

    /// Number of decimal digits in the rendered value.
    pub fn digit_count(&self) -> usize {
        let top = self.limbs[self.limbs.len() - 1];
        let top_digits = if top == 0 {
            1
        } else {
            top.ilog10() as usize + 1
        };
        (self.limbs.len() - 1) * DIGITS_PER_LIMB + top_digits
    }
}

/// Drops zero limbs above the most significant non-zero one, keeping at least one.
pub(crate) fn trim_high_zeros(limbs: &mut Vec<Limb>) {
    while limbs.len() > 1 && limbs[limbs.len() - 1] == 0 {
        limbs.pop();
    }
    if limbs.is_empty() {
        limbs.push(0);
    }
}

impl Default for BigInt {
    fn default() -> Self {
        BigInt::zero()
    }
}

impl From<u64> for BigInt {
    fn from(n: u64) -> Self {
        if n < BASE {
            BigInt::from_normalized(vec![n])
        } else {
            BigInt::from_normalized(vec![n % BASE, n / BASE])
        }
    }
}

impl FromStr for BigInt {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.width().is_none() && !f.sign_plus() {
            return write_digits(&self.limbs, f);
        }
        let mut digits = String::with_capacity(self.digit_count());
        write_digits(&self.limbs, &mut digits)?;
        f.pad_integral(true, "", &digits)
    }
}

impl Add<&BigInt> for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: &BigInt) -> BigInt {
        add(self, rhs)
    }
}

impl Add<&BigInt> for BigInt {
    type Output = BigInt;

    fn add(self, rhs: &BigInt) -> BigInt {
        add(&self, rhs)
    }
}

impl Add for BigInt {
    type Output = BigInt;

    fn add(self, rhs: BigInt) -> BigInt {
        add(&self, &rhs)
    }
}

impl AddAssign<&BigInt> for BigInt {
    fn add_assign(&mut self, rhs: &BigInt) {
        *self = add(self, rhs);
    }
}

impl AddAssign for BigInt {
    fn add_assign(&mut self, rhs: BigInt) {
        *self = add(self, &rhs);
    }
}

impl Sum for BigInt {
    fn sum<I: Iterator<Item = BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::zero(), |acc, x| add(&acc, &x))
    }
}

impl<'a> Sum<&'a BigInt> for BigInt {
    fn sum<I: Iterator<Item = &'a BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::zero(), |acc, x| add(&acc, x))
    }
}

impl Zero for BigInt {
    fn zero() -> Self {
        BigInt::zero()
    }

    fn is_zero(&self) -> bool {
        BigInt::is_zero(self)
    }
}

impl From<&BigInt> for BigUint {
    fn from(value: &BigInt) -> Self {
        let base = BigUint::from(BASE);
        value
            .limbs
            .iter()
            .rev()
            .fold(BigUint::zero(), |acc, &limb| acc * &base + limb)
    }
}

impl From<&BigUint> for BigInt {
    fn from(value: &BigUint) -> Self {
        // Little-endian decimal digits, grouped into limbs.
        let digits = value.to_radix_le(10);
        let mut limbs: Vec<Limb> = digits
            .chunks(DIGITS_PER_LIMB)
            .map(|group| {
                group
                    .iter()
                    .rev()
                    .fold(0, |limb, &d| limb * 10 + Limb::from(d))
            })
            .collect();
        trim_high_zeros(&mut limbs);
        BigInt::from_normalized(limbs)
    }
}

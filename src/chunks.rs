use crate::limb::DIGITS_PER_LIMB;

/// Walks a digit sequence in limb-sized groups, least significant group first.
///
/// Every group except possibly the last one holds exactly `DIGITS_PER_LIMB`
/// digits; the last group holds whatever is left at the front of the input.
pub struct DigitChunks<'a> {
    digits: &'a [u8],
}

impl<'a> DigitChunks<'a> {
    pub fn new(digits: &'a [u8]) -> Self {
        DigitChunks { digits }
    }
}

impl<'a> Iterator for DigitChunks<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        if self.digits.is_empty() {
            return None;
        }
        let split = self.digits.len().saturating_sub(DIGITS_PER_LIMB);
        let (rest, chunk) = self.digits.split_at(split);
        self.digits = rest;
        Some(chunk)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.digits.len().div_ceil(DIGITS_PER_LIMB);
        (n, Some(n))
    }
}

impl ExactSizeIterator for DigitChunks<'_> {}

/// Iterates over the given digits in limb-sized groups.
pub fn iter_digit_chunks(digits: &str) -> DigitChunks<'_> {
    DigitChunks::new(digits.as_bytes())
}

//! Base-10 decoding: every limb carries exactly 19 decimal digits.

use crate::mpt::source::LimbSource;
use crate::mpt::types::error::Result;
use crate::mpt::types::models::DECIMAL_DIGITS_PER_LIMB;

/// Splits a limb into its 19 low decimal digits.
///
/// Index 0 holds the least significant digit, index 18 the most significant.
pub fn decompose(limb: u64) -> [u8; DECIMAL_DIGITS_PER_LIMB] {
    let mut digits = [0u8; DECIMAL_DIGITS_PER_LIMB];
    let mut rest = limb;
    for digit in digits.iter_mut() {
        *digit = (rest % 10) as u8;
        rest /= 10;
    }
    digits
}

/// Streams decimal digits out of successive limbs.
#[derive(Debug, Clone)]
pub struct DecimalDecoder {
    digits: [u8; DECIMAL_DIGITS_PER_LIMB],
    /// Undelivered digits of the current limb; the next one is at `remaining - 1`.
    remaining: usize,
    /// Digits dropped from the first limb only.
    leading_skip: usize,
}

impl DecimalDecoder {
    pub fn new(leading_skip: u32) -> Self {
        Self {
            digits: [0; DECIMAL_DIGITS_PER_LIMB],
            remaining: 0,
            leading_skip: leading_skip as usize,
        }
    }

    pub fn next_digit<S: LimbSource + ?Sized>(&mut self, source: &mut S) -> Result<Option<u8>> {
        if self.remaining == 0 {
            let Some(limb) = source.next_limb()? else {
                return Ok(None);
            };
            self.digits = decompose(limb);
            self.remaining = DECIMAL_DIGITS_PER_LIMB - self.leading_skip;
            self.leading_skip = 0;
        }
        self.remaining -= 1;
        Ok(Some(self.digits[self.remaining]))
    }
}

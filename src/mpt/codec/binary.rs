//! Power-of-two decoding: digits are fixed-width bit groups.
//!
//! Bits are taken from the most significant end of each limb. When the group
//! width does not divide 64 (bases 8 and 32), a digit can span the boundary
//! between two limbs; the unused low bits of one limb are carried in front of
//! the next.

use crate::mpt::source::LimbSource;
use crate::mpt::types::error::Result;
use crate::mpt::types::models::LIMB_BITS;

#[derive(Debug, Clone)]
pub struct BinaryDecoder {
    /// Undelivered bits, right-aligned; only the low `available` bits are valid.
    bits: u128,
    available: u32,
    exp: u32,
    mask: u128,
    /// Bits dropped from the first limb only.
    leading_skip: u32,
}

impl BinaryDecoder {
    /// Creates a decoder for base `2^exp` that drops `leading_skip` bits from
    /// the first limb.
    pub fn new(exp: u32, leading_skip: u32) -> Self {
        Self {
            bits: 0,
            available: 0,
            exp,
            mask: (1u128 << exp) - 1,
            leading_skip,
        }
    }

    pub fn next_digit<S: LimbSource + ?Sized>(&mut self, source: &mut S) -> Result<Option<u8>> {
        while self.available < self.exp {
            // A trailing group shorter than one digit is never emitted.
            let Some(limb) = source.next_limb()? else {
                return Ok(None);
            };
            self.bits = (self.bits << LIMB_BITS) | limb as u128;
            self.available += LIMB_BITS - self.leading_skip;
            self.leading_skip = 0;
            self.bits &= (1u128 << self.available) - 1;
        }
        self.available -= self.exp;
        let digit = (self.bits >> self.available) & self.mask;
        self.bits &= (1u128 << self.available) - 1;
        Ok(Some(digit as u8))
    }
}

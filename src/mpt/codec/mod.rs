//! Codec layer turning limbs into digits.
//!
//! # Submodules
//!
//! - [`decimal`][]: base 10, 19 digits per limb
//! - [`binary`][]: bases 2, 4, 8, 16 and 32, as bit groups

pub mod binary;
pub mod decimal;

use super::source::LimbSource;
use super::types::error::Result;
use super::types::models::DigitBase;

use binary::BinaryDecoder;
use decimal::DecimalDecoder;

/// Per-base digit decoder of a reader session.
#[derive(Debug, Clone)]
pub enum LimbDecoder {
    Decimal(DecimalDecoder),
    Binary(BinaryDecoder),
}

impl LimbDecoder {
    /// Creates the decoder for `base`, dropping `leading_skip` position units
    /// (digits for base 10, bits otherwise) from the first limb.
    pub fn new(base: DigitBase, leading_skip: u32) -> Self {
        match base {
            DigitBase::Decimal => Self::Decimal(DecimalDecoder::new(leading_skip)),
            DigitBase::PowerOfTwo { exp } => Self::Binary(BinaryDecoder::new(exp, leading_skip)),
        }
    }

    /// Produces the next digit, or `None` once the source runs dry.
    pub fn next_digit<S: LimbSource + ?Sized>(&mut self, source: &mut S) -> Result<Option<u8>> {
        match self {
            Self::Decimal(decoder) => decoder.next_digit(source),
            Self::Binary(decoder) => decoder.next_digit(source),
        }
    }
}

//! Mapping from a digit position to a limb inside the mantissa array.

use log::debug;

use crate::mpt::types::{
    error::{MptError, Result},
    models::{DigitBase, MptHeader, StartPosition},
};

/// Locates the limb holding the zero-based digit `position`.
///
/// For power-of-two bases the position is first scaled to a bit offset.
/// The first digit after the radix point lives in the limb at file index
/// `limb_count - exponent - 1`; each further limb's worth of digits moves one
/// index toward the start of the array.
///
/// # Errors
/// Returns [`MptError::PositionOutOfRange`] when the position falls before
/// file index 0.
pub fn locate(header: &MptHeader, base: DigitBase, position: u64) -> Result<StartPosition> {
    let out_of_range = || MptError::PositionOutOfRange {
        position,
        limb_count: header.limb_count,
        exponent: header.exponent,
    };

    let units = position
        .checked_mul(base.units_per_digit())
        .ok_or_else(out_of_range)?;
    let per_limb = base.units_per_limb();

    let fraction_limbs = header.limb_count as i128 - header.exponent as i128;
    let limb_index = fraction_limbs - (units / per_limb) as i128;
    if limb_index <= 0 {
        return Err(out_of_range());
    }

    let start = StartPosition {
        limb_index: limb_index as u64,
        leading_skip: (units % per_limb) as u32,
    };
    debug!(
        "Position {} in {}: limb index {}, leading skip {}",
        position, base, start.limb_index, start.leading_skip
    );
    Ok(start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mpt::types::models::NumberType;

    fn header(limb_count: u64, exponent: i64) -> MptHeader {
        MptHeader {
            limb_count,
            allocated_limb_count: limb_count,
            number_type: NumberType::Float,
            is_negative: false,
            stored_base: 0,
            exponent,
        }
    }

    #[test]
    fn first_digit_sits_below_the_exponent_limbs() {
        let start = locate(&header(10, 3), DigitBase::Decimal, 0).unwrap();
        assert_eq!(start, StartPosition { limb_index: 7, leading_skip: 0 });
    }

    #[test]
    fn decimal_positions_step_by_nineteen() {
        let h = header(10, 0);
        assert_eq!(
            locate(&h, DigitBase::Decimal, 18).unwrap(),
            StartPosition { limb_index: 10, leading_skip: 18 }
        );
        assert_eq!(
            locate(&h, DigitBase::Decimal, 19).unwrap(),
            StartPosition { limb_index: 9, leading_skip: 0 }
        );
        assert_eq!(
            locate(&h, DigitBase::Decimal, 19 * 9 + 4).unwrap(),
            StartPosition { limb_index: 1, leading_skip: 4 }
        );
        assert!(locate(&h, DigitBase::Decimal, 19 * 10).is_err());
    }

    #[test]
    fn binary_positions_are_scaled_to_bits() {
        let h = header(2, 0);
        let hex = DigitBase::PowerOfTwo { exp: 4 };
        assert_eq!(
            locate(&h, hex, 17).unwrap(),
            StartPosition { limb_index: 1, leading_skip: 4 }
        );
        assert!(locate(&h, hex, 32).is_err());
    }

    #[test]
    fn exponent_beyond_limbs_is_out_of_range() {
        assert!(matches!(
            locate(&header(2, 2), DigitBase::Decimal, 0),
            Err(MptError::PositionOutOfRange { position: 0, limb_count: 2, exponent: 2 })
        ));
    }

    #[test]
    fn overflowing_bit_offset_is_out_of_range() {
        let bin = DigitBase::PowerOfTwo { exp: 5 };
        assert!(locate(&header(u64::MAX, 0), bin, u64::MAX).is_err());
    }

    #[test]
    fn extreme_header_values_do_not_wrap() {
        let start = locate(&header(u64::MAX, 0), DigitBase::Decimal, 0).unwrap();
        assert_eq!(start.limb_index, u64::MAX);
        assert!(locate(&header(0, i64::MAX), DigitBase::Decimal, 0).is_err());
    }
}

//! Core data structures for the MPT file format and reader configuration.
//!
//! This module defines the fundamental types used throughout the library:
//! - Format constants and the parsed file header
//! - Output base selection
//! - Reader options and the computed start position

use super::error::{MptError, Result};

/// Magic tag at offset 0 of every MPT file.
pub const MAGIC: [u8; 8] = *b"MPT\x01FILE";

/// Size of the on-disk header region. Limbs start right after it.
pub const HEADER_SIZE: u64 = 4096;

/// Number of bytes occupied by the logical header fields.
pub const HEADER_FIELDS_LEN: usize = 56;

/// Width of a single mantissa limb in bytes.
pub const LIMB_BYTES: u64 = 8;

/// Default capacity of the limb buffer (8 MiB of limbs).
pub const MAX_BUFFER_LIMBS: usize = 1024 * 1024;

/// Decimal digits stored per limb: 10^19 <= 2^64 < 10^20.
pub const DECIMAL_DIGITS_PER_LIMB: usize = 19;

/// Bits in a limb.
pub const LIMB_BITS: u32 = 64;

/// Largest power-of-two base accepted by the reader ('0'-'9' then 'A'-'V').
pub const MAX_BINARY_BASE: u32 = 32;

/// Kind of number stored in an MPT file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberType {
    /// Arbitrary-precision integer (`mpz`).
    Integer,
    /// Binary-point floating value (`mpf`), the only readable kind.
    Float,
    Unknown(u64),
}

impl From<u64> for NumberType {
    fn from(value: u64) -> Self {
        match value {
            1 => Self::Integer,
            2 => Self::Float,
            other => Self::Unknown(other),
        }
    }
}

impl From<NumberType> for u64 {
    fn from(value: NumberType) -> Self {
        match value {
            NumberType::Integer => 1,
            NumberType::Float => 2,
            NumberType::Unknown(other) => other,
        }
    }
}

/// Parsed header of an MPT file.
///
/// Only `limb_count` and `exponent` drive digit extraction; the remaining
/// fields are carried as they were written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MptHeader {
    /// Number of 64-bit limbs stored after the header.
    pub limb_count: u64,
    /// Limb capacity of the writer when the file was produced.
    pub allocated_limb_count: u64,
    pub number_type: NumberType,
    pub is_negative: bool,
    /// Reserved by the format, not interpreted.
    pub stored_base: u64,
    /// Number of limbs above the radix point.
    pub exponent: i64,
}

/// Output base of a digit stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitBase {
    /// Base 10, decoded as 19 digits per limb.
    Decimal,
    /// Base `2^exp`, decoded as `exp`-bit groups.
    PowerOfTwo { exp: u32 },
}

impl DigitBase {
    /// Returns the numeric radix.
    pub fn radix(&self) -> u32 {
        match self {
            DigitBase::Decimal => 10,
            DigitBase::PowerOfTwo { exp } => 1 << exp,
        }
    }

    /// Number of position units held by one limb.
    ///
    /// - Decimal: 19 digits
    /// - Power of two: 64 bits
    pub fn units_per_limb(&self) -> u64 {
        match self {
            DigitBase::Decimal => DECIMAL_DIGITS_PER_LIMB as u64,
            DigitBase::PowerOfTwo { .. } => LIMB_BITS as u64,
        }
    }

    /// Number of position units consumed by one digit.
    pub fn units_per_digit(&self) -> u64 {
        match self {
            DigitBase::Decimal => 1,
            DigitBase::PowerOfTwo { exp } => *exp as u64,
        }
    }
}

impl TryFrom<u32> for DigitBase {
    type Error = MptError;
    fn try_from(radix: u32) -> Result<Self> {
        if radix == 10 {
            Ok(Self::Decimal)
        } else if radix.is_power_of_two() && (2..=MAX_BINARY_BASE).contains(&radix) {
            Ok(Self::PowerOfTwo { exp: radix.trailing_zeros() })
        } else {
            Err(MptError::InvalidBase(radix))
        }
    }
}

impl std::fmt::Display for DigitBase {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "base {}", self.radix())
    }
}

/// Tunables for a reader session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReaderOptions {
    /// Capacity of the limb buffer, in limbs.
    pub buffer_limbs: usize,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self { buffer_limbs: MAX_BUFFER_LIMBS }
    }
}

impl ReaderOptions {
    /// Sets the limb buffer capacity.
    pub fn with_buffer_limbs(mut self, buffer_limbs: usize) -> Self {
        self.buffer_limbs = buffer_limbs;
        self
    }

    /// Rejects options no session can run with, such as an empty buffer.
    pub fn validate(&self) -> Result<()> {
        if self.buffer_limbs == 0 {
            return Err(MptError::InvalidOption(
                "buffer_limbs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Where a digit stream begins inside the limb array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartPosition {
    /// Number of limbs, counted from file index 0, that precede and include
    /// the first limb to decode. Always at least 1.
    pub limb_index: u64,
    /// Position units (digits or bits) to drop from the first limb.
    pub leading_skip: u32,
}

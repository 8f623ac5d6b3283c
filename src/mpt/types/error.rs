//! Custom error types for the mpt-digits crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
///
/// Running out of limbs is not represented here: digit streams report it as
/// `Ok(None)`.
#[derive(Debug, Error)]
pub enum MptError {
    /// The requested output base is neither 10 nor a supported power of two.
    #[error("Unsupported base: {0}. Expected 10 or a power of two between 2 and 32.")]
    InvalidBase(u32),

    /// An error originating from I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file ended before the header fields could be read.
    #[error("Truncated file: header needs {expected} bytes, but only {found} were available")]
    TruncatedFile { expected: u64, found: u64 },

    /// The file does not start with the MPT magic tag.
    #[error("Bad magic: {0:02x?}")]
    BadMagic([u8; 8]),

    /// The stored number is not a floating-point mantissa.
    #[error("Unsupported number type: {0}. Only floating-point files (type 2) can be read.")]
    UnsupportedType(u64),

    /// Negative binary exponents cannot be located by this reader.
    #[error("Unsupported binary exponent: {0}")]
    UnsupportedExponent(i64),

    /// The requested start position lies outside the stored mantissa.
    #[error("Position {position} is out of range for {limb_count} limbs with exponent {exponent}")]
    PositionOutOfRange {
        position: u64,
        limb_count: u64,
        exponent: i64,
    },

    /// A buffer fill read fewer limbs than the header promised.
    #[error("Corrupt file: expected {expected} bytes at offset {offset}, but found {found}")]
    CorruptFile { offset: u64, expected: u64, found: u64 },

    /// A previous fatal error left the session unusable.
    #[error("Reader session aborted after a fatal error")]
    SessionAborted,

    /// A reader option or configuration value is invalid.
    #[error("Invalid option: {0}")]
    InvalidOption(String),
}

/// A convenience `Result` type alias using the crate's `MptError` type.
pub type Result<T> = std::result::Result<T, MptError>;

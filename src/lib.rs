//! # mpt-digits
//!
//! Reads digits at arbitrary positions from multi-precision-tape (MPT)
//! files: large binary-point numbers stored as arrays of 64-bit limbs.
//! Output is available in base 10 and in bases 2, 4, 8, 16 and 32.
//!
//! Only the limbs needed for the requested digits are read, so extracting
//! digits deep inside a multi-gigabyte file costs one seek.
pub mod mpt;

// Re-export the main types for convenience
pub use mpt::{
    MptReader,
    iter::{DigitChars, Digits},
    source::{FileLimbSource, LimbSource},
    types::{
        error::{MptError, Result},
        models::{DigitBase, MptHeader, NumberType, ReaderOptions},
    },
};

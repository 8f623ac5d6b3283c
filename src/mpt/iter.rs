//! Iterators over a reader's digit stream.
//!
//! # Example
//! ```no_run
//! # use mpt_digits::MptReader;
//! let mut reader = MptReader::open("pi_base10.mpt", 10, 0).unwrap();
//! let first: String = reader
//!     .chars()
//!     .take(20)
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! println!("{}", first);
//! ```

use std::io::{Read, Seek};
use std::iter::FusedIterator;

use super::reader::MptReader;
use super::types::error::Result;
use super::utils;

/// Iterator over digit values.
///
/// Ends at the end of the stored data and after the first error.
///
/// Created by [`MptReader::digits()`](crate::MptReader::digits).
pub struct Digits<'a, R: Read + Seek> {
    reader: &'a mut MptReader<R>,
    finished: bool,
}

impl<'a, R: Read + Seek> Digits<'a, R> {
    pub(super) fn new(reader: &'a mut MptReader<R>) -> Self {
        Self { reader, finished: false }
    }
}

impl<R: Read + Seek> Iterator for Digits<'_, R> {
    type Item = Result<u8>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.reader.next_digit() {
            Ok(Some(digit)) => Some(Ok(digit)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

impl<R: Read + Seek> FusedIterator for Digits<'_, R> {}

/// Iterator over digits rendered as `0-9A-V` characters.
///
/// Created by [`MptReader::chars()`](crate::MptReader::chars).
pub struct DigitChars<'a, R: Read + Seek> {
    digits: Digits<'a, R>,
}

impl<'a, R: Read + Seek> DigitChars<'a, R> {
    pub(super) fn new(reader: &'a mut MptReader<R>) -> Self {
        Self { digits: Digits::new(reader) }
    }
}

impl<R: Read + Seek> Iterator for DigitChars<'_, R> {
    type Item = Result<char>;

    fn next(&mut self) -> Option<Self::Item> {
        self.digits.next().map(|r| r.map(utils::digit_to_char))
    }
}

impl<R: Read + Seek> FusedIterator for DigitChars<'_, R> {}

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;
use log::{debug, info};

use super::codec::LimbDecoder;
use super::format;
use super::iter::{DigitChars, Digits};
use super::source::FileLimbSource;
use super::types::error::Result;
use super::types::models::{DigitBase, MptHeader, ReaderOptions};
use super::utils;

/// A digit-reading session over one MPT file.
///
/// The session owns its file handle and limb buffer; both are released by
/// [`close`](Self::close) or when the reader is dropped. Digits are produced
/// strictly forward from the start position given at open time.
#[derive(Debug)]
pub struct MptReader<R = File> {
    header: MptHeader,
    base: DigitBase,
    start_position: u64,
    source: FileLimbSource<R>,
    decoder: LimbDecoder,
}

impl MptReader<File> {
    /// Opens an MPT file and positions the stream at a zero-based digit.
    ///
    /// # Arguments
    /// * `path` - Path to the MPT file
    /// * `base` - Output base: 10, or a power of two from 2 to 32
    /// * `start_position` - Zero-based index of the first digit after the radix point
    ///
    /// # Errors
    /// Returns an error if:
    /// - The base is unsupported
    /// - The file cannot be opened or its header is truncated
    /// - The magic, number type, or exponent is rejected
    /// - The position lies outside the stored mantissa
    pub fn open(path: impl AsRef<Path>, base: u32, start_position: u64) -> Result<Self> {
        Self::open_with_options(path, base, start_position, ReaderOptions::default())
    }

    /// Same as [`open`](Self::open), with explicit reader options.
    pub fn open_with_options(
        path: impl AsRef<Path>,
        base: u32,
        start_position: u64,
        options: ReaderOptions,
    ) -> Result<Self> {
        let path = path.as_ref();
        let base = DigitBase::try_from(base)?;
        options.validate()?;

        info!("Opening MPT file: {}", path.display());
        let file = File::open(path)?;
        Self::start(file, base, start_position, options)
    }
}

impl<R: Read + Seek> MptReader<R> {
    /// Builds a session over any seekable byte source laid out as an MPT file.
    pub fn from_reader(
        inner: R,
        base: u32,
        start_position: u64,
        options: ReaderOptions,
    ) -> Result<Self> {
        let base = DigitBase::try_from(base)?;
        options.validate()?;
        Self::start(inner, base, start_position, options)
    }

    fn start(
        mut inner: R,
        base: DigitBase,
        start_position: u64,
        options: ReaderOptions,
    ) -> Result<Self> {
        inner.seek(SeekFrom::Start(0))?;
        let header = format::header::parse(&mut inner)?;
        let start = format::layout::locate(&header, base, start_position)?;

        debug!(
            "Reader ready: {}, position {}, {} limbs to read, buffer of {} limbs",
            base, start_position, start.limb_index, options.buffer_limbs
        );

        Ok(Self {
            header,
            base,
            start_position,
            source: FileLimbSource::new(inner, start.limb_index, options.buffer_limbs),
            decoder: LimbDecoder::new(base, start.leading_skip),
        })
    }

    pub fn header(&self) -> &MptHeader {
        &self.header
    }

    pub fn base(&self) -> DigitBase {
        self.base
    }

    /// The zero-based position the session was opened at.
    pub fn start_position(&self) -> u64 {
        self.start_position
    }

    /// Returns the next digit value, or `None` once the stored limbs run out.
    ///
    /// A [`CorruptFile`](crate::MptError::CorruptFile) error ends the session:
    /// every later call fails with
    /// [`SessionAborted`](crate::MptError::SessionAborted).
    pub fn next_digit(&mut self) -> Result<Option<u8>> {
        self.decoder.next_digit(&mut self.source)
    }

    /// Returns the next digit as its display character.
    pub fn next_char(&mut self) -> Result<Option<char>> {
        Ok(self.next_digit()?.map(utils::digit_to_char))
    }

    /// Iterates over the remaining digit values.
    pub fn digits(&mut self) -> Digits<'_, R> {
        Digits::new(self)
    }

    /// Iterates over the remaining digits as characters.
    pub fn chars(&mut self) -> DigitChars<'_, R> {
        DigitChars::new(self)
    }

    /// Ends the session, releasing the file handle and limb buffer.
    pub fn close(self) {
        debug!(
            "Closing MPT reader opened at position {} ({} limbs unread)",
            self.start_position,
            self.source.remaining_limbs()
        );
    }

    /// Ends the session and hands back the underlying reader.
    pub fn into_inner(self) -> R {
        self.source.into_inner()
    }
}

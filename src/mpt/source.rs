//! Buffered access to the limb array, most significant limb first.
//!
//! Limbs are read from disk in chunks in natural file order, then handed out
//! from the end of each chunk toward its start. Chunks themselves are taken
//! from the end of the wanted range toward file index 0, so the overall
//! sequence walks the mantissa from most to least significant.

use std::io::{ErrorKind, Read, Seek, SeekFrom};
use byteorder::{ByteOrder, LittleEndian};
use log::{trace, warn};

use super::types::error::{MptError, Result};
use super::types::models::{HEADER_SIZE, LIMB_BYTES};

/// A supply of limbs in decreasing order of significance.
pub trait LimbSource {
    /// Loads the next chunk of limbs into the buffer.
    ///
    /// Returns the number of limbs loaded; `0` means the supply is exhausted.
    fn refill(&mut self) -> Result<usize>;

    /// Takes the next buffered limb, or `None` if the buffer is empty.
    fn pop(&mut self) -> Option<u64>;

    /// Returns the next limb, refilling the buffer when needed.
    fn next_limb(&mut self) -> Result<Option<u64>> {
        if let Some(limb) = self.pop() {
            return Ok(Some(limb));
        }
        if self.refill()? == 0 {
            return Ok(None);
        }
        Ok(self.pop())
    }
}

/// [`LimbSource`] reading little-endian limbs from a seekable MPT file.
#[derive(Debug)]
pub struct FileLimbSource<R> {
    inner: R,
    /// Raw little-endian bytes of the current chunk, decoded on `pop`.
    buffer: Vec<u8>,
    capacity: usize,
    /// Index of the next unread limb in `buffer`, counting down.
    buffer_cursor: usize,
    /// Limbs below this file index have not been read yet.
    file_limb_cursor: u64,
    aborted: bool,
}

impl<R: Read + Seek> FileLimbSource<R> {
    /// Creates a source that will hand out limbs `limb_index - 1` down to `0`.
    ///
    /// Nothing is read until the first [`refill`](LimbSource::refill).
    pub fn new(inner: R, limb_index: u64, capacity: usize) -> Self {
        let initial = capacity.min(usize::try_from(limb_index).unwrap_or(usize::MAX));
        Self {
            inner,
            buffer: Vec::with_capacity(initial.saturating_mul(LIMB_BYTES as usize)),
            capacity,
            buffer_cursor: 0,
            file_limb_cursor: limb_index,
            aborted: false,
        }
    }

    /// Number of limbs still available, buffered or on disk.
    pub(crate) fn remaining_limbs(&self) -> u64 {
        self.file_limb_cursor + self.buffer_cursor as u64
    }

    /// Consumes the source and returns the underlying reader.
    pub fn into_inner(self) -> R {
        self.inner
    }

    fn read_chunk(&mut self, offset: u64, expected: u64) -> Result<()> {
        self.inner.seek(SeekFrom::Start(offset))?;

        self.buffer.clear();
        self.buffer.reserve(expected as usize);
        let found = match Read::take(&mut self.inner, expected).read_to_end(&mut self.buffer) {
            Ok(n) => n as u64,
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => self.buffer.len() as u64,
            Err(e) => return Err(e.into()),
        };
        if found != expected {
            warn!(
                "Short limb read at offset {}: expected {} bytes, found {}",
                offset, expected, found
            );
            return Err(MptError::CorruptFile { offset, expected, found });
        }
        Ok(())
    }
}

impl<R: Read + Seek> LimbSource for FileLimbSource<R> {
    fn refill(&mut self) -> Result<usize> {
        if self.aborted {
            return Err(MptError::SessionAborted);
        }
        let chunk = self.file_limb_cursor.min(self.capacity as u64) as usize;
        if chunk == 0 {
            trace!("Limb supply exhausted");
            return Ok(0);
        }

        self.file_limb_cursor -= chunk as u64;
        let expected = (chunk as u64).saturating_mul(LIMB_BYTES);
        let Some(offset) = self
            .file_limb_cursor
            .checked_mul(LIMB_BYTES)
            .and_then(|bytes| bytes.checked_add(HEADER_SIZE))
        else {
            // A limb index past any representable offset means the header lies.
            warn!("Limb index {} has no file offset", self.file_limb_cursor);
            self.aborted = true;
            return Err(MptError::CorruptFile { offset: u64::MAX, expected, found: 0 });
        };
        trace!(
            "Filling {} limbs from offset {} ({} limbs left on disk)",
            chunk, offset, self.file_limb_cursor
        );

        // Limb alignment cannot be recovered after a failed fill.
        if let Err(e) = self.read_chunk(offset, expected) {
            self.aborted = true;
            self.buffer_cursor = 0;
            return Err(e);
        }
        self.buffer_cursor = chunk;
        Ok(chunk)
    }

    fn pop(&mut self) -> Option<u64> {
        if self.buffer_cursor == 0 {
            return None;
        }
        self.buffer_cursor -= 1;
        let at = self.buffer_cursor * LIMB_BYTES as usize;
        Some(LittleEndian::read_u64(&self.buffer[at..at + LIMB_BYTES as usize]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn image(limbs: &[u64]) -> Cursor<Vec<u8>> {
        let mut bytes = vec![0u8; HEADER_SIZE as usize];
        for limb in limbs {
            bytes.extend_from_slice(&limb.to_le_bytes());
        }
        Cursor::new(bytes)
    }

    fn drain<S: LimbSource>(source: &mut S) -> Vec<u64> {
        let mut out = Vec::new();
        while let Some(limb) = source.next_limb().unwrap() {
            out.push(limb);
        }
        out
    }

    #[test]
    fn walks_limbs_from_highest_index_across_chunks() {
        let mut source = FileLimbSource::new(image(&[10, 11, 12, 13, 14]), 5, 2);
        assert_eq!(drain(&mut source), vec![14, 13, 12, 11, 10]);
        assert_eq!(source.remaining_limbs(), 0);
    }

    #[test]
    fn starts_below_the_requested_index() {
        let mut source = FileLimbSource::new(image(&[10, 11, 12, 13, 14]), 3, 8);
        assert_eq!(drain(&mut source), vec![12, 11, 10]);
    }

    #[test]
    fn refill_reports_chunk_sizes() {
        let mut source = FileLimbSource::new(image(&[1, 2, 3]), 3, 2);
        assert_eq!(source.refill().unwrap(), 2);
        assert_eq!(source.pop(), Some(3));
        assert_eq!(source.pop(), Some(2));
        assert_eq!(source.pop(), None);
        assert_eq!(source.refill().unwrap(), 1);
        assert_eq!(source.pop(), Some(1));
        assert_eq!(source.refill().unwrap(), 0);
    }

    #[test]
    fn short_read_is_corrupt_and_aborts() {
        let mut source = FileLimbSource::new(image(&[1, 2, 3]), 5, 4);
        match source.next_limb() {
            Err(MptError::CorruptFile { offset, expected, found }) => {
                assert_eq!(offset, HEADER_SIZE + 8);
                assert_eq!(expected, 32);
                assert_eq!(found, 16);
            }
            other => panic!("expected CorruptFile, got {:?}", other),
        }
        assert!(matches!(source.next_limb(), Err(MptError::SessionAborted)));
    }

    #[test]
    fn unaddressable_limb_index_is_corrupt() {
        let mut source = FileLimbSource::new(image(&[7]), (1 << 61) + 1, 1);
        assert!(matches!(
            source.next_limb(),
            Err(MptError::CorruptFile { expected: 8, found: 0, .. })
        ));
        assert!(matches!(source.next_limb(), Err(MptError::SessionAborted)));
    }
}

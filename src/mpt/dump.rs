//! Plain-text digit output used by the `mptdump` binary.

use std::fs::File;
use std::io::{Read, Seek, Write};
use std::path::Path;

use super::reader::MptReader;
use super::types::error::{MptError, Result};
use super::types::models::ReaderOptions;

/// Digits per space-separated group.
pub const GROUP_LEN: u64 = 10;

/// Opens `path` at a 1-based digit `position`.
pub fn open_at(
    path: impl AsRef<Path>,
    base: u32,
    position: u64,
    options: ReaderOptions,
) -> Result<MptReader<File>> {
    let start = position
        .checked_sub(1)
        .ok_or_else(|| MptError::InvalidOption("digit positions start at 1".to_string()))?;
    MptReader::open_with_options(path, base, start, options)
}

/// Writes up to `count` digits to `out`, a space after every tenth one
/// except the last requested digit.
///
/// Returns how many digits were written; fewer than `count` means the file
/// ran out of limbs.
pub fn write_digits<R, W>(reader: &mut MptReader<R>, out: &mut W, count: u64) -> Result<u64>
where
    R: Read + Seek,
    W: Write,
{
    let mut written = 0;
    for (i, c) in (0..count).zip(reader.chars()) {
        write!(out, "{}", c?)?;
        written += 1;
        if i % GROUP_LEN == GROUP_LEN - 1 && i != count - 1 {
            out.write_all(b" ")?;
        }
    }
    Ok(written)
}

//! MPT file header parsing and validation.
//!
//! The header occupies the first 4096 bytes of the file, but only the leading
//! 56 bytes carry fields:
//!
//! ```text
//! [ 0.. 8] magic            b"MPT\x01FILE"
//! [ 8..16] limb count       u64 LE
//! [16..24] allocated limbs  u64 LE
//! [24..32] number type      u64 LE (1 = integer, 2 = float)
//! [32..40] negative flag    u64 LE
//! [40..48] stored base      u64 LE (reserved)
//! [48..56] binary exponent  i64 LE
//! ```

use std::io::Read;
use byteorder::{LittleEndian, ReadBytesExt};
use log::{debug, info, trace};

use crate::mpt::types::{
    error::{MptError, Result},
    models::{HEADER_FIELDS_LEN, MAGIC, MptHeader, NumberType},
};

/// Reads and validates the header from a reader positioned at offset 0.
///
/// # Errors
/// - [`MptError::TruncatedFile`] if fewer than 56 bytes are available
/// - [`MptError::BadMagic`] if the tag does not match
/// - [`MptError::UnsupportedType`] for anything but a floating-point file
/// - [`MptError::UnsupportedExponent`] for a negative exponent
pub fn parse<R: Read>(file: &mut R) -> Result<MptHeader> {
    info!("Parsing MPT header");

    let mut raw = Vec::with_capacity(HEADER_FIELDS_LEN);
    Read::take(&mut *file, HEADER_FIELDS_LEN as u64).read_to_end(&mut raw)?;
    if raw.len() < HEADER_FIELDS_LEN {
        return Err(MptError::TruncatedFile {
            expected: HEADER_FIELDS_LEN as u64,
            found: raw.len() as u64,
        });
    }

    let mut fields = raw.as_slice();
    let mut magic = [0u8; 8];
    fields.read_exact(&mut magic)?;
    trace!("Magic: {:02x?}", magic);
    if magic != MAGIC {
        return Err(MptError::BadMagic(magic));
    }

    let header = MptHeader {
        limb_count: fields.read_u64::<LittleEndian>()?,
        allocated_limb_count: fields.read_u64::<LittleEndian>()?,
        number_type: NumberType::from(fields.read_u64::<LittleEndian>()?),
        is_negative: fields.read_u64::<LittleEndian>()? != 0,
        stored_base: fields.read_u64::<LittleEndian>()?,
        exponent: fields.read_i64::<LittleEndian>()?,
    };
    debug!("Raw header fields: {:?}", header);

    if header.number_type != NumberType::Float {
        return Err(MptError::UnsupportedType(header.number_type.into()));
    }
    if header.exponent < 0 {
        return Err(MptError::UnsupportedExponent(header.exponent));
    }

    info!(
        "Header parsed successfully: limbs={}, exponent={}, negative={}",
        header.limb_count, header.exponent, header.is_negative
    );
    Ok(header)
}

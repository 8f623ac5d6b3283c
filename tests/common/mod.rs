#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

pub const MAGIC: &[u8; 8] = b"MPT\x01FILE";
pub const FLOAT: u64 = 2;
pub const INTEGER: u64 = 1;

/// Header fields of a synthetic MPT file.
pub struct HeaderFields {
    pub magic: [u8; 8],
    pub limb_count: u64,
    pub number_type: u64,
    pub exponent: i64,
}

impl HeaderFields {
    pub fn float(limb_count: u64, exponent: i64) -> Self {
        Self {
            magic: *MAGIC,
            limb_count,
            number_type: FLOAT,
            exponent,
        }
    }
}

pub fn header_bytes(fields: &HeaderFields) -> Vec<u8> {
    let mut bytes = fields.magic.to_vec();
    bytes.extend_from_slice(&fields.limb_count.to_le_bytes());
    bytes.extend_from_slice(&fields.limb_count.to_le_bytes());
    bytes.extend_from_slice(&fields.number_type.to_le_bytes());
    bytes.extend_from_slice(&0u64.to_le_bytes());
    bytes.extend_from_slice(&0u64.to_le_bytes());
    bytes.extend_from_slice(&fields.exponent.to_le_bytes());
    bytes.resize(4096, 0);
    bytes
}

/// Writes a file whose header is `fields` followed by `limbs` in file order.
pub fn write_file(dir: &Path, name: &str, fields: &HeaderFields, limbs: &[u64]) -> PathBuf {
    let mut bytes = header_bytes(fields);
    for limb in limbs {
        bytes.extend_from_slice(&limb.to_le_bytes());
    }
    let path = dir.join(name);
    fs::write(&path, bytes).unwrap_or_else(|e| panic!("failed to write {}: {}", path.display(), e));
    path
}

/// Writes a well-formed floating-point file. `limbs[0]` is the least significant.
pub fn write_mpt(dir: &Path, name: &str, limbs: &[u64], exponent: i64) -> PathBuf {
    write_file(dir, name, &HeaderFields::float(limbs.len() as u64, exponent), limbs)
}

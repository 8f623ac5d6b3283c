//! Core MPT reader module.
//!
//! Layering, bottom to top:
//!
//! - [`types`]: constants, header model, errors
//! - [`format`]: header parsing and position arithmetic
//! - [`source`]: buffered limb supply
//! - [`codec`]: limb to digit decomposition
//! - [`reader`] and [`iter`]: the public digit stream

pub mod codec;
pub mod dump;
pub mod format;
pub mod iter;
pub mod reader;
pub mod source;
pub mod types;
pub mod utils;

pub use reader::MptReader;
pub use types::error::{MptError, Result};

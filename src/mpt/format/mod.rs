//! File format layer for MPT number files.
//!
//! # Module Organization
//!
//! - [`header`]: Parses and validates the fixed header
//! - [`layout`]: Maps digit positions onto the limb array
//!
//! # Architecture
//!
//! ```text
//! File Structure:
//! ┌─────────────────┐ 0
//! │  Header fields  │ ← header::parse()
//! │  (zero padded)  │
//! ├─────────────────┤ 4096
//! │  Limb 0         │ least significant
//! │  Limb 1         │
//! │  ...            │ ← layout::locate()
//! │  Limb len-1     │ most significant
//! └─────────────────┘
//! ```

pub mod header;
pub mod layout;

//! # QR Provisioning Bit Encoding
//!
//! Bit-level encoding for the reserved areas of a provisioning QR code:
//!
//! - BCH remainder computation over GF(2) (`bch`)
//! - Format information words (error-correction level + mask pattern) and
//!   version information words for symbol versions 7-40 (`format`)
//!
//! A scanner recovers these fields before anything else, so the emitted
//! bits must match the published tables exactly.

pub mod bch;
pub mod format;

pub use bch::{compute_bch, most_significant_bit_position};
pub use format::{format_info, version_info, ErrorCorrectionLevel};

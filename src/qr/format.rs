//! # Format and Version Information Words
//!
//! Assembles the two BCH-protected fields a QR symbol reserves for
//! decoder bootstrap: the 15-bit format information word (error-correction
//! level + mask pattern) and, for symbol versions 7-40, the 18-bit version
//! information word.

use crate::errors::{MfaError, MfaResult};
use crate::qr::bch::compute_bch;

/// Generator polynomial for format information, x^10+x^8+x^5+x^4+x^2+x+1
const FORMAT_GENERATOR: u32 = 0x537;

/// XOR mask applied to the assembled format word so it is never all-zero
const FORMAT_XOR_MASK: u32 = 0x5412;

/// Generator polynomial for version information, x^12+x^11+x^10+x^9+x^8+x^5+x^2+1
const VERSION_GENERATOR: u32 = 0x1F25;

/// Error-correction level of a QR symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCorrectionLevel {
    /// ~7% recovery
    Low,
    /// ~15% recovery
    Medium,
    /// ~25% recovery
    Quartile,
    /// ~30% recovery
    High,
}

impl ErrorCorrectionLevel {
    /// Two-bit indicator as it appears in the format information field.
    /// The on-wire ordering is not the severity ordering.
    pub fn format_bits(&self) -> u32 {
        match self {
            ErrorCorrectionLevel::Low => 0b01,
            ErrorCorrectionLevel::Medium => 0b00,
            ErrorCorrectionLevel::Quartile => 0b11,
            ErrorCorrectionLevel::High => 0b10,
        }
    }
}

/// Builds the 15-bit format information word for an error-correction level
/// and mask pattern (0-7): 5 data bits, 10 BCH remainder bits, then the
/// fixed XOR mask.
pub fn format_info(level: ErrorCorrectionLevel, mask_pattern: u8) -> MfaResult<u32> {
    if mask_pattern > 7 {
        return Err(MfaError::InvalidArgument(format!(
            "Mask pattern must be 0-7, got {}",
            mask_pattern
        )));
    }

    let data = (level.format_bits() << 3) | u32::from(mask_pattern);
    let remainder = compute_bch(data, FORMAT_GENERATOR)?;
    Ok(((data << 10) | remainder) ^ FORMAT_XOR_MASK)
}

/// Builds the 18-bit version information word for symbol versions 7-40:
/// 6 version bits followed by 12 BCH remainder bits. Versions below 7
/// carry no version field.
pub fn version_info(version: u8) -> MfaResult<u32> {
    if !(7..=40).contains(&version) {
        return Err(MfaError::InvalidArgument(format!(
            "Version information exists only for versions 7-40, got {}",
            version
        )));
    }

    let data = u32::from(version);
    let remainder = compute_bch(data, VERSION_GENERATOR)?;
    Ok((data << 12) | remainder)
}

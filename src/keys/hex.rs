//! # Hex Codec
//!
//! Uppercase hex encoding with a strict decoder. Two characters per byte,
//! no separators; decoding rejects odd-length input and non-hex digits.

use crate::errors::{MfaError, MfaResult};

/// Encodes bytes as an uppercase hex string (2 characters per byte).
pub fn hex_encode(data: &[u8]) -> String {
    hex::encode_upper(data)
}

/// Decodes a hex string into bytes.
///
/// Accepts upper- and lowercase digits. Odd-length input or any non-hex
/// character is an invalid-argument error.
pub fn hex_decode(input: &str) -> MfaResult<Vec<u8>> {
    hex::decode(input).map_err(|e| MfaError::InvalidArgument(format!("Malformed hex string: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_is_uppercase() {
        assert_eq!(hex_encode(&[0xde, 0xad, 0xbe, 0xef]), "DEADBEEF");
        assert_eq!(hex_encode(&[]), "");
        assert_eq!(hex_encode(&[0x00, 0x0f]), "000F");
    }

    #[test]
    fn test_round_trip_all_byte_values() {
        let all: Vec<u8> = (0..=255u8).collect();
        for len in [0usize, 1, 2, 7, 64, 256] {
            let b = &all[..len];
            assert_eq!(hex_decode(&hex_encode(b)).unwrap(), b);
        }
    }

    #[test]
    fn test_decode_accepts_lowercase() {
        assert_eq!(hex_decode("deadbeef").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(
            hex_encode(&hex_decode("deadbeef").unwrap()),
            "DEADBEEF"
        );
    }

    #[test]
    fn test_decode_rejects_odd_length() {
        assert!(matches!(
            hex_decode("1"),
            Err(MfaError::InvalidArgument(_))
        ));
        assert!(hex_decode("ABC").is_err());
    }

    #[test]
    fn test_decode_rejects_non_hex_digits() {
        assert!(matches!(
            hex_decode("zz"),
            Err(MfaError::InvalidArgument(_))
        ));
        assert!(hex_decode("0G").is_err());
        assert!(hex_decode("12 4").is_err());
    }
}

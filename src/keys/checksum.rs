//! # Challenge-Size Keyed Digests
//!
//! Derives a fixed-width byte digest from a username or raw buffer. The
//! requested challenge size doubles as the algorithm selector: each
//! supported size maps to the digest family whose output width matches it
//! exactly, so the result never needs truncation or padding.
//!
//! | size | algorithm |
//! |------|-----------|
//! | 16   | MD5       |
//! | 20   | SHA-1     |
//! | 32   | SHA-256   |
//! | 48   | SHA-384   |
//! | 64   | SHA-512   |
//!
//! Unrecognized sizes fall back to the 16-byte digest. Deployed peers
//! depend on that fallback, so it stays; it is not an error.

use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha384, Sha512};

/// Derives a stable pseudo-identifier for a username, e.g. as a
/// WebAuthn-style user handle. The username is hashed as UTF-8.
pub fn encode_user_id(challenge_size: usize, username: &str) -> Vec<u8> {
    encode_byte_array(challenge_size, username.as_bytes())
}

/// Derives a digest of `data` whose width is selected by `challenge_size`.
///
/// For the five recognized sizes the output length equals the requested
/// size; any other size selects the 16-byte digest.
pub fn encode_byte_array(challenge_size: usize, data: &[u8]) -> Vec<u8> {
    match challenge_size {
        16 => Md5::digest(data).to_vec(),
        20 => Sha1::digest(data).to_vec(),
        32 => Sha256::digest(data).to_vec(),
        48 => Sha384::digest(data).to_vec(),
        64 => Sha512::digest(data).to_vec(),
        _ => Md5::digest(data).to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_length_matches_challenge_size() {
        for size in [16usize, 20, 32, 48, 64] {
            let out = encode_user_id(size, "alice@example.com");
            assert_eq!(out.len(), size);
        }
    }

    #[test]
    fn test_known_digest_vectors() {
        // FIPS/RFC test vectors for the string "abc".
        assert_eq!(
            hex::encode(encode_byte_array(16, b"abc")),
            "900150983cd24fb0d6963f7d28e17f72"
        );
        assert_eq!(
            hex::encode(encode_byte_array(20, b"abc")),
            "a9993e364706816aba3e25717850c26c9cd0d89d"
        );
        assert_eq!(
            hex::encode(encode_byte_array(32, b"abc")),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(
            hex::encode(encode_byte_array(48, b"abc")),
            "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed\
             8086072ba1e7cc2358baeca134c825a7"
        );
        assert_eq!(
            hex::encode(encode_byte_array(64, b"abc")),
            "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
             2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
        );
    }

    #[test]
    fn test_unrecognized_size_falls_back_to_16() {
        assert_eq!(encode_user_id(999, "x"), encode_user_id(16, "x"));
        assert_eq!(encode_byte_array(0, b"x"), encode_byte_array(16, b"x"));
        assert_eq!(encode_byte_array(31, b"x"), encode_byte_array(16, b"x"));
    }

    #[test]
    fn test_deterministic() {
        let a = encode_user_id(32, "bob@example.com");
        let b = encode_user_id(32, "bob@example.com");
        assert_eq!(a, b);

        let c = encode_user_id(32, "carol@example.com");
        assert_ne!(a, c);
    }

    #[test]
    fn test_string_input_hashes_utf8_bytes() {
        let via_str = encode_user_id(20, "Ångström");
        let via_bytes = encode_byte_array(20, "Ångström".as_bytes());
        assert_eq!(via_str, via_bytes);
    }
}

//! # HOTP (RFC 4226)
//!
//! Counter-based one-time codes: HMAC over the big-endian counter,
//! dynamic truncation, then reduction to a zero-padded decimal string.

use serde::{Deserialize, Serialize};

// ==================
// Algorithm
// ==================

/// HMAC hash algorithm for OTP codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OtpAlgorithm {
    /// Default; the only algorithm every authenticator app supports
    SHA1,
    SHA256,
    SHA512,
}

impl std::fmt::Display for OtpAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OtpAlgorithm::SHA1 => write!(f, "SHA1"),
            OtpAlgorithm::SHA256 => write!(f, "SHA256"),
            OtpAlgorithm::SHA512 => write!(f, "SHA512"),
        }
    }
}

// ==================
// Code Generation
// ==================

/// Generate an HOTP code for a raw secret and counter value
pub fn generate_hotp(secret: &[u8], counter: u64, digits: u32, algorithm: OtpAlgorithm) -> String {
    let hash = compute_hmac(secret, &counter.to_be_bytes(), algorithm);

    // Dynamic truncation (RFC 4226 §5.3)
    let offset = (hash[hash.len() - 1] & 0x0F) as usize;
    let binary = ((hash[offset] & 0x7F) as u32) << 24
        | (hash[offset + 1] as u32) << 16
        | (hash[offset + 2] as u32) << 8
        | (hash[offset + 3] as u32);

    let otp = binary % 10u32.pow(digits);
    format!("{:0>width$}", otp, width = digits as usize)
}

/// Compute HMAC with the specified algorithm
pub(crate) fn compute_hmac(key: &[u8], data: &[u8], algorithm: OtpAlgorithm) -> Vec<u8> {
    use hmac::{Hmac, Mac};
    use sha1::Sha1;
    use sha2::{Sha256, Sha512};

    match algorithm {
        OtpAlgorithm::SHA1 => {
            let mut mac = Hmac::<Sha1>::new_from_slice(key).expect("HMAC can accept any key size");
            mac.update(data);
            mac.finalize().into_bytes().to_vec()
        }
        OtpAlgorithm::SHA256 => {
            let mut mac = Hmac::<Sha256>::new_from_slice(key).expect("HMAC can accept any key size");
            mac.update(data);
            mac.finalize().into_bytes().to_vec()
        }
        OtpAlgorithm::SHA512 => {
            let mut mac = Hmac::<Sha512>::new_from_slice(key).expect("HMAC can accept any key size");
            mac.update(data);
            mac.finalize().into_bytes().to_vec()
        }
    }
}

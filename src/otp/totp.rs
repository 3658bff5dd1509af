//! # TOTP (RFC 6238)
//!
//! Time-based one-time codes with shadow-window validation: a presented
//! code is checked against the current time step and up to `shadows`
//! adjacent steps on either side, so a device whose clock has drifted by
//! a few steps still signs in.

use std::time::{SystemTime, UNIX_EPOCH};

use subtle::ConstantTimeEq;

use crate::errors::{MfaError, MfaResult};
use crate::otp::hotp::{generate_hotp, OtpAlgorithm};
use crate::otp::secret::base32_decode;

// ==================
// TOTP Configuration
// ==================

/// TOTP configuration
#[derive(Debug, Clone)]
pub struct TotpConfig {
    /// Number of digits (default: 6)
    pub digits: u32,
    /// Time step in seconds (default: 30)
    pub period: u64,
    /// Algorithm (default: SHA1 for authenticator-app compatibility)
    pub algorithm: OtpAlgorithm,
    /// Time steps accepted on each side of the current step (default: 2)
    pub shadows: u32,
}

impl Default for TotpConfig {
    fn default() -> Self {
        Self {
            digits: 6,
            period: 30,
            algorithm: OtpAlgorithm::SHA1,
            shadows: 2,
        }
    }
}

// ==================
// Code Generation & Validation
// ==================

/// Generate the TOTP code for a Base32 secret at a given Unix timestamp
pub fn generate_totp(secret: &str, timestamp: u64, config: &TotpConfig) -> MfaResult<String> {
    let secret_bytes = base32_decode(secret)
        .map_err(|e| MfaError::InvalidSecret(format!("Secret is not valid Base32: {}", e)))?;

    let counter = timestamp / config.period;
    Ok(generate_hotp(
        &secret_bytes,
        counter,
        config.digits,
        config.algorithm,
    ))
}

/// Verify a TOTP code at a given Unix timestamp.
///
/// Accepts the current step and `config.shadows` steps on either side.
/// Returns `Ok(false)` on mismatch; `Err` only for undecodable secrets.
pub fn verify_totp(
    secret: &str,
    code: &str,
    timestamp: u64,
    config: &TotpConfig,
) -> MfaResult<bool> {
    for offset in 0..=config.shadows {
        let ahead = timestamp + u64::from(offset) * config.period;
        if code_matches(code, &generate_totp(secret, ahead, config)?) {
            return Ok(true);
        }

        // offset 0 already covered by the forward check
        if offset > 0 {
            let behind = timestamp.saturating_sub(u64::from(offset) * config.period);
            if code_matches(code, &generate_totp(secret, behind, config)?) {
                return Ok(true);
            }
        }
    }

    Ok(false)
}

/// Verify a TOTP code at the current system time
pub fn verify_totp_now(secret: &str, code: &str, config: &TotpConfig) -> MfaResult<bool> {
    verify_totp(secret, code, current_timestamp()?, config)
}

/// Current Unix timestamp in seconds
pub fn current_timestamp() -> MfaResult<u64> {
    Ok(SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| MfaError::Internal(format!("System clock error: {}", e)))?
        .as_secs())
}

/// Constant-time code comparison
fn code_matches(presented: &str, expected: &str) -> bool {
    presented.as_bytes().ct_eq(expected.as_bytes()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    // RFC 6238 Appendix B, SHA-1 column. The reference secret is the
    // ASCII digits "1234567890" repeated, Base32 encoded.
    const RFC6238_SECRET: &str = "GEZDGNBVGY3TQOJQGEZDGNBVGY3TQOJQ";

    fn rfc_config() -> TotpConfig {
        TotpConfig {
            digits: 8,
            ..Default::default()
        }
    }

    #[test]
    fn test_rfc6238_vectors() {
        let config = rfc_config();
        let cases: [(u64, &str); 6] = [
            (59, "94287082"),
            (1111111109, "07081804"),
            (1111111111, "14050471"),
            (1234567890, "89005924"),
            (2000000000, "69279037"),
            (20000000000, "65353130"),
        ];
        for (timestamp, expected) in cases {
            assert_eq!(
                generate_totp(RFC6238_SECRET, timestamp, &config).unwrap(),
                expected,
                "timestamp {}",
                timestamp
            );
        }
    }

    #[test]
    fn test_verify_accepts_exact_step() {
        let config = rfc_config();
        assert!(verify_totp(RFC6238_SECRET, "94287082", 59, &config).unwrap());
        assert!(!verify_totp(RFC6238_SECRET, "00000000", 59, &config).unwrap());
    }

    #[test]
    fn test_verify_accepts_codes_inside_shadow_window() {
        let mut config = rfc_config();
        config.shadows = 1;

        // T=59 is step 1. One step of drift either way still matches.
        assert!(verify_totp(RFC6238_SECRET, "94287082", 59 + 30, &config).unwrap());
        assert!(verify_totp(RFC6238_SECRET, "94287082", 59 - 30, &config).unwrap());
    }

    #[test]
    fn test_verify_rejects_codes_outside_shadow_window() {
        let mut config = rfc_config();
        config.shadows = 1;

        // T=149 sits in step 4; one shadow covers steps 3..=5, so the
        // step-1 code no longer matches.
        assert!(!verify_totp(RFC6238_SECRET, "94287082", 59 + 90, &config).unwrap());
    }

    #[test]
    fn test_verify_zero_shadows_is_single_step() {
        let mut config = rfc_config();
        config.shadows = 0;

        assert!(verify_totp(RFC6238_SECRET, "94287082", 59, &config).unwrap());
        assert!(!verify_totp(RFC6238_SECRET, "94287082", 59 + 30, &config).unwrap());
    }

    #[test]
    fn test_verify_near_epoch_does_not_underflow() {
        let config = TotpConfig {
            shadows: 3,
            ..rfc_config()
        };
        // Timestamp smaller than shadows * period saturates at step 0.
        let code = generate_totp(RFC6238_SECRET, 0, &config).unwrap();
        assert!(verify_totp(RFC6238_SECRET, &code, 10, &config).unwrap());
    }

    #[test]
    fn test_bad_secret_is_an_error() {
        let config = TotpConfig::default();
        assert!(matches!(
            generate_totp("not!base32", 59, &config),
            Err(MfaError::InvalidSecret(_))
        ));
        assert!(verify_totp("not!base32", "123456", 59, &config).is_err());
    }

    #[test]
    fn test_wrong_length_code_rejected() {
        let config = rfc_config();
        assert!(!verify_totp(RFC6238_SECRET, "9428708", 59, &config).unwrap());
        assert!(!verify_totp(RFC6238_SECRET, "", 59, &config).unwrap());
    }
}

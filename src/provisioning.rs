//! # Enrollment Provisioning
//!
//! Builds the `otpauth://` URI an authenticator app imports during
//! enrollment, usually rendered as a QR code (see the `qr` module for the
//! symbol-level bit encoding).

use crate::otp::totp::TotpConfig;

/// Generate the otpauth:// URI for a TOTP enrollment
pub fn totp_uri(issuer: &str, account: &str, secret: &str, config: &TotpConfig) -> String {
    format!(
        "otpauth://totp/{}:{}?secret={}&issuer={}&algorithm={}&digits={}&period={}",
        urlencoding::encode(issuer),
        urlencoding::encode(account),
        secret,
        urlencoding::encode(issuer),
        config.algorithm,
        config.digits,
        config.period
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totp_uri() {
        let config = TotpConfig::default();
        let uri = totp_uri("FedMFA", "user@example.com", "JBSWY3DPEHPK3PXP", &config);

        assert!(uri.starts_with("otpauth://totp/FedMFA:"));
        assert!(uri.contains("user%40example.com"));
        assert!(uri.contains("secret=JBSWY3DPEHPK3PXP"));
        assert!(uri.contains("issuer=FedMFA"));
        assert!(uri.contains("algorithm=SHA1"));
        assert!(uri.contains("digits=6"));
        assert!(uri.contains("period=30"));
    }

    #[test]
    fn test_totp_uri_escapes_issuer() {
        let config = TotpConfig::default();
        let uri = totp_uri("Contoso Corp", "user@example.com", "JBSWY3DPEHPK3PXP", &config);
        assert!(uri.contains("otpauth://totp/Contoso%20Corp:"));
        assert!(uri.contains("issuer=Contoso%20Corp"));
    }
}

//! # MFA Configuration
//!
//! Provider-wide settings with startup validation. Validation collects
//! every problem instead of stopping at the first, so a misconfigured
//! deployment reports all offending fields at once.

use serde::{Deserialize, Serialize};

use crate::otp::totp::TotpConfig;

// ==================
// Configuration
// ==================

/// MFA provider configuration
#[derive(Debug, Clone)]
pub struct MfaConfig {
    /// Issuer name (shown in authenticator apps)
    pub issuer: String,
    /// TOTP settings for authenticator-app factors
    pub totp: TotpConfig,
    /// Digits in a delivered (email/SMS) code (default: 6)
    pub code_digits: u32,
    /// Seconds a delivered code stays redeemable (default: 300)
    pub delivery_window_secs: i64,
    /// Digest width in bytes for derived user handles (default: 32)
    pub challenge_size: usize,
    /// TOTP secret size in bytes (default: 20)
    pub secret_bytes: usize,
}

impl Default for MfaConfig {
    fn default() -> Self {
        Self {
            issuer: "FedMFA".to_string(),
            totp: TotpConfig::default(),
            code_digits: 6,
            delivery_window_secs: 300,
            challenge_size: 32,
            secret_bytes: 20,
        }
    }
}

impl MfaConfig {
    /// Validate the configuration, collecting every error
    pub fn validate(&self) -> Result<(), Vec<ConfigValidationError>> {
        let mut v = ConfigValidator::new();
        v.validate_non_empty("issuer", &self.issuer);
        v.validate_range("totp.digits", i64::from(self.totp.digits), 6, 9);
        v.validate_range("totp.period", self.totp.period as i64, 15, 120);
        v.validate_range("totp.shadows", i64::from(self.totp.shadows), 0, 10);
        v.validate_range("code_digits", i64::from(self.code_digits), 4, 9);
        v.validate_range("delivery_window_secs", self.delivery_window_secs, 30, 3600);
        v.validate_challenge_size("challenge_size", self.challenge_size);
        v.validate_range("secret_bytes", self.secret_bytes as i64, 10, 64);
        v.finish()
    }
}

// ==================
// Validation
// ==================

/// Configuration validation error
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValidationError {
    pub field: String,
    pub value: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Invalid configuration for '{}': {} (value: {})",
            self.field, self.message, self.value
        )
    }
}

impl std::error::Error for ConfigValidationError {}

/// Error-collecting configuration validator
struct ConfigValidator {
    errors: Vec<ConfigValidationError>,
}

impl ConfigValidator {
    fn new() -> Self {
        Self { errors: Vec::new() }
    }

    fn error(&mut self, field: &str, value: impl std::fmt::Display, message: &str) {
        self.errors.push(ConfigValidationError {
            field: field.to_string(),
            value: value.to_string(),
            message: message.to_string(),
        });
    }

    fn validate_non_empty(&mut self, field: &str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.error(field, value, "Value cannot be empty");
        }
        self
    }

    fn validate_range(&mut self, field: &str, value: i64, min: i64, max: i64) -> &mut Self {
        if value < min || value > max {
            self.error(
                field,
                value,
                &format!("Value must be between {} and {}", min, max),
            );
        }
        self
    }

    /// Deployments must declare one of the widths a peer can reproduce;
    /// the encoder's own fallback stays available to direct callers.
    fn validate_challenge_size(&mut self, field: &str, value: usize) -> &mut Self {
        if ![16, 20, 32, 48, 64].contains(&value) {
            self.error(field, value, "Challenge size must be one of 16, 20, 32, 48, 64");
        }
        self
    }

    fn finish(self) -> Result<(), Vec<ConfigValidationError>> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

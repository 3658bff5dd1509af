//! # MFA Error Types
//!
//! Unified error handling for the MFA engine.
//!
//! Verification *mismatch* is not an error: code-checking functions return
//! `Ok(false)` for a wrong code and reserve `Err` for malformed input,
//! expired or consumed codes, and state violations.

use thiserror::Error;

/// Result type for MFA operations
pub type MfaResult<T> = Result<T, MfaError>;

/// MFA engine error type
#[derive(Debug, Error)]
pub enum MfaError {
    /// Malformed caller-supplied input (hex, base32, polynomial, version...)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A stored secret could not be decoded
    #[error("Invalid secret: {0}")]
    InvalidSecret(String),

    /// A delivered code was presented outside its validity window
    #[error("Code expired")]
    CodeExpired,

    /// A delivered code was presented a second time
    #[error("Code already used")]
    CodeAlreadyUsed,

    /// No registration matched the lookup
    #[error("Registration not found: {0}")]
    RegistrationNotFound(String),

    /// Operation not valid for the registration's current status
    #[error("Invalid registration state: {0}")]
    RegistrationState(String),

    /// Configuration rejected at startup
    #[error("Configuration error: {0}")]
    Config(String),

    /// System-level failure (clock, lock poisoning)
    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MfaError::InvalidArgument("odd-length hex".to_string());
        assert_eq!(err.to_string(), "Invalid argument: odd-length hex");

        let err = MfaError::CodeExpired;
        assert_eq!(err.to_string(), "Code expired");
    }
}

//! # Registration Model
//!
//! A `UserRegistration` records one enrolled second factor for one user.
//! The TOTP secret never serializes out; the user handle is a stable
//! pseudo-identifier derived from the account name, so external systems
//! can reference the registration without seeing the UPN.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::MfaConfig;
use crate::keys::checksum::encode_user_id;
use crate::keys::hex::hex_encode;
use crate::otp::secret::generate_secret;

// ==================
// Method & Status
// ==================

/// Kind of second factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MfaMethod {
    /// Authenticator app (TOTP)
    Totp,
    /// Code delivered by email
    Email,
    /// Code delivered by SMS
    Sms,
}

impl MfaMethod {
    /// Returns the string representation used in storage
    pub fn as_str(&self) -> &'static str {
        match self {
            MfaMethod::Totp => "totp",
            MfaMethod::Email => "email",
            MfaMethod::Sms => "sms",
        }
    }

    /// Whether sign-in codes for this method are delivered out-of-band
    pub fn uses_delivered_codes(&self) -> bool {
        matches!(self, MfaMethod::Email | MfaMethod::Sms)
    }
}

/// Status of a registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationStatus {
    /// Enrolled but not yet confirmed with a first code
    Pending,
    /// Active and usable for sign-in
    Enabled,
    /// Administratively disabled
    Disabled,
}

// ==================
// Registration
// ==================

/// An enrolled second factor for a user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRegistration {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Federated account identifier (user principal name)
    pub upn: String,
    pub method: MfaMethod,
    pub display_name: Option<String>,
    pub status: RegistrationStatus,
    /// Base32 TOTP secret; present only for authenticator-app factors
    #[serde(skip_serializing, default)]
    pub secret: Option<String>,
    /// Stable pseudo-identifier derived from the UPN (hex digest)
    pub user_handle: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserRegistration {
    /// Create a pending registration; generates a secret for TOTP factors
    pub fn new(
        user_id: Uuid,
        upn: &str,
        method: MfaMethod,
        display_name: Option<String>,
        config: &MfaConfig,
    ) -> Self {
        let now = Utc::now();
        let secret = match method {
            MfaMethod::Totp => Some(generate_secret(config.secret_bytes)),
            MfaMethod::Email | MfaMethod::Sms => None,
        };

        Self {
            id: Uuid::new_v4(),
            user_id,
            upn: upn.to_string(),
            method,
            display_name,
            status: RegistrationStatus::Pending,
            secret,
            user_handle: derive_user_handle(config.challenge_size, upn),
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether this registration can be used for sign-in
    pub fn is_active(&self) -> bool {
        self.status == RegistrationStatus::Enabled
    }
}

/// Derive the stable user handle for an account name
pub fn derive_user_handle(challenge_size: usize, upn: &str) -> String {
    hex_encode(&encode_user_id(challenge_size, upn))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totp_registration_gets_secret() {
        let config = MfaConfig::default();
        let reg = UserRegistration::new(
            Uuid::new_v4(),
            "alice@example.com",
            MfaMethod::Totp,
            Some("My Phone".to_string()),
            &config,
        );

        assert_eq!(reg.method, MfaMethod::Totp);
        assert_eq!(reg.status, RegistrationStatus::Pending);
        assert!(!reg.is_active());
        assert!(reg.secret.is_some());
        assert_eq!(reg.secret.as_ref().unwrap().len(), 32); // 20 bytes base32
    }

    #[test]
    fn test_delivered_code_registration_has_no_secret() {
        let config = MfaConfig::default();
        let reg = UserRegistration::new(
            Uuid::new_v4(),
            "alice@example.com",
            MfaMethod::Sms,
            None,
            &config,
        );
        assert!(reg.secret.is_none());
        assert!(reg.method.uses_delivered_codes());
        assert!(!MfaMethod::Totp.uses_delivered_codes());
    }

    #[test]
    fn test_user_handle_is_stable_and_sized() {
        let config = MfaConfig::default();
        let a = UserRegistration::new(
            Uuid::new_v4(),
            "alice@example.com",
            MfaMethod::Totp,
            None,
            &config,
        );
        let b = UserRegistration::new(
            Uuid::new_v4(),
            "alice@example.com",
            MfaMethod::Email,
            None,
            &config,
        );

        // Same account, same handle, regardless of method or user id.
        assert_eq!(a.user_handle, b.user_handle);
        // Hex doubles the digest width.
        assert_eq!(a.user_handle.len(), config.challenge_size * 2);
    }

    #[test]
    fn test_secret_never_serializes() {
        let config = MfaConfig::default();
        let reg = UserRegistration::new(
            Uuid::new_v4(),
            "alice@example.com",
            MfaMethod::Totp,
            None,
            &config,
        );

        let json = serde_json::to_string(&reg).unwrap();
        assert!(!json.contains("secret"));
        assert!(!json.contains(reg.secret.as_ref().unwrap()));
    }

    #[test]
    fn test_method_storage_names() {
        assert_eq!(MfaMethod::Totp.as_str(), "totp");
        assert_eq!(MfaMethod::Email.as_str(), "email");
        assert_eq!(MfaMethod::Sms.as_str(), "sms");
    }
}

//! # MFA Service
//!
//! Drives the registration lifecycle: enrollment, enrollment confirmation,
//! out-of-band code issuance, and sign-in verification. Every attempt can
//! be recorded in the attempt log; codes and secrets never are.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::Utc;
use uuid::Uuid;

use crate::config::MfaConfig;
use crate::errors::{MfaError, MfaResult};
use crate::observability::attempt_log::{
    AttemptKind, AttemptLog, AttemptLogEntry, SharedAttemptLog,
};
use crate::otp::delivery::{DeliveredCode, DeliveryChannel};
use crate::otp::totp::verify_totp_now;
use crate::provisioning::totp_uri;
use crate::registration::model::{MfaMethod, RegistrationStatus, UserRegistration};
use crate::registration::repository::RegistrationRepository;

/// MFA service for managing registrations and checking codes
pub struct MfaService<R: RegistrationRepository> {
    repo: Arc<R>,
    config: MfaConfig,
    attempt_log: SharedAttemptLog,
    /// Outstanding delivered codes, one per user; a fresh issue replaces
    /// the previous code
    pending_codes: RwLock<HashMap<Uuid, DeliveredCode>>,
}

impl<R: RegistrationRepository> MfaService<R> {
    pub fn new(repo: Arc<R>, config: MfaConfig) -> Self {
        Self::with_attempt_log(repo, config, Arc::new(AttemptLog::disabled()))
    }

    pub fn with_attempt_log(repo: Arc<R>, config: MfaConfig, attempt_log: SharedAttemptLog) -> Self {
        Self {
            repo,
            config,
            attempt_log,
            pending_codes: RwLock::new(HashMap::new()),
        }
    }

    // ==================
    // Enrollment
    // ==================

    /// Enroll a new factor.
    ///
    /// For TOTP factors the returned string is the `otpauth://` URI to
    /// render as a QR code; delivered-code factors have no provisioning
    /// payload.
    pub fn enroll(
        &self,
        user_id: Uuid,
        upn: &str,
        method: MfaMethod,
        display_name: Option<String>,
    ) -> MfaResult<(UserRegistration, Option<String>)> {
        let registration = UserRegistration::new(user_id, upn, method, display_name, &self.config);

        let uri = registration
            .secret
            .as_deref()
            .map(|secret| totp_uri(&self.config.issuer, upn, secret, &self.config.totp));

        let created = self.repo.create(registration)?;
        self.attempt_log.log(
            AttemptLogEntry::builder(AttemptKind::Enrollment, user_id)
                .method(method)
                .success(true)
                .build(),
        );
        Ok((created, uri))
    }

    /// Confirm a pending registration with a first code
    pub fn verify_enrollment(&self, registration_id: Uuid, code: &str) -> MfaResult<bool> {
        let registration = self.repo.find_by_id(registration_id)?.ok_or_else(|| {
            MfaError::RegistrationNotFound(format!("No registration {}", registration_id))
        })?;

        if registration.status != RegistrationStatus::Pending {
            return Err(MfaError::RegistrationState(
                "Registration is already confirmed or disabled".to_string(),
            ));
        }

        let result = self.check_registration_code(&registration, code);
        self.log_attempt(AttemptKind::EnrollmentVerification, &registration, &result);

        if let Ok(true) = result {
            self.repo
                .update_status(registration_id, RegistrationStatus::Enabled)?;
        }
        result
    }

    // ==================
    // Sign-in
    // ==================

    /// Issue an out-of-band code for the user's delivered-code factor.
    ///
    /// Returns the raw code for the external transport to send. Any
    /// previously outstanding code for the user is replaced.
    pub fn issue_code(&self, user_id: Uuid) -> MfaResult<String> {
        let registrations = self.repo.find_by_user_id(user_id)?;
        let registration = registrations
            .iter()
            .find(|r| {
                r.method.uses_delivered_codes() && r.status != RegistrationStatus::Disabled
            })
            .ok_or_else(|| {
                MfaError::RegistrationNotFound(
                    "No email or SMS registration for user".to_string(),
                )
            })?;

        let channel = match registration.method {
            MfaMethod::Email => DeliveryChannel::Email,
            MfaMethod::Sms => DeliveryChannel::Sms,
            MfaMethod::Totp => unreachable!("filtered to delivered-code methods"),
        };

        let (record, raw) = DeliveredCode::issue(user_id, channel, self.config.code_digits);
        self.pending_codes.write().unwrap().insert(user_id, record);

        self.attempt_log.log(
            AttemptLogEntry::builder(AttemptKind::CodeIssue, user_id)
                .method(registration.method)
                .success(true)
                .detail(channel.as_str())
                .build(),
        );
        Ok(raw)
    }

    /// Verify a sign-in code against the user's active factor
    pub fn verify_code(&self, user_id: Uuid, code: &str) -> MfaResult<bool> {
        let registrations = self.repo.find_by_user_id(user_id)?;
        let registration = registrations.iter().find(|r| r.is_active()).ok_or_else(|| {
            MfaError::RegistrationNotFound("No active MFA registration for user".to_string())
        })?;

        let result = self.check_registration_code(registration, code);
        self.log_attempt(AttemptKind::SignIn, registration, &result);
        result
    }

    // ==================
    // Management
    // ==================

    /// Disable a registration
    pub fn disable_registration(&self, registration_id: Uuid) -> MfaResult<()> {
        self.repo
            .update_status(registration_id, RegistrationStatus::Disabled)
    }

    /// Remove a registration
    pub fn remove_registration(&self, registration_id: Uuid) -> MfaResult<()> {
        self.repo.delete(registration_id)
    }

    /// Check if user has an active factor
    pub fn is_mfa_enabled(&self, user_id: Uuid) -> MfaResult<bool> {
        let registrations = self.repo.find_by_user_id(user_id)?;
        Ok(registrations.iter().any(|r| r.is_active()))
    }

    /// Get all registrations for a user
    pub fn get_registrations(&self, user_id: Uuid) -> MfaResult<Vec<UserRegistration>> {
        self.repo.find_by_user_id(user_id)
    }

    // ==================
    // Internals
    // ==================

    /// Check a presented code against one registration
    fn check_registration_code(
        &self,
        registration: &UserRegistration,
        code: &str,
    ) -> MfaResult<bool> {
        if registration.method.uses_delivered_codes() {
            self.redeem_delivered_code(registration.user_id, code)
        } else {
            let secret = registration.secret.as_deref().ok_or_else(|| {
                MfaError::Internal("TOTP registration has no secret".to_string())
            })?;
            verify_totp_now(secret, code, &self.config.totp)
        }
    }

    /// Redeem the user's outstanding delivered code
    fn redeem_delivered_code(&self, user_id: Uuid, code: &str) -> MfaResult<bool> {
        let mut pending = self.pending_codes.write().unwrap();
        let record = pending.get_mut(&user_id).ok_or_else(|| {
            MfaError::RegistrationState("No delivered code outstanding for user".to_string())
        })?;

        match record.verify(code, Utc::now(), self.config.delivery_window_secs) {
            Ok(true) => {
                pending.remove(&user_id);
                Ok(true)
            }
            Ok(false) => Ok(false),
            Err(e) => {
                // A dead code is useless; drop it so the user can request
                // a fresh one.
                if matches!(e, MfaError::CodeExpired | MfaError::CodeAlreadyUsed) {
                    pending.remove(&user_id);
                }
                Err(e)
            }
        }
    }

    fn log_attempt(
        &self,
        kind: AttemptKind,
        registration: &UserRegistration,
        result: &MfaResult<bool>,
    ) {
        let mut builder = AttemptLogEntry::builder(kind, registration.user_id)
            .method(registration.method)
            .success(matches!(result, Ok(true)));
        if let Err(e) = result {
            builder = builder.detail(e.to_string());
        }
        self.attempt_log.log(builder.build());
    }
}

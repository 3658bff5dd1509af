//! fedmfa - Multi-factor authentication engine for federated sign-in
//!
//! Registration state, one-time code generation and validation (TOTP and
//! out-of-band delivered codes), enrollment provisioning, and the
//! bit-exact encoding primitives provisioning depends on (BCH-protected
//! QR format/version words, challenge-size keyed digests).

pub mod config;
pub mod errors;
pub mod keys;
pub mod observability;
pub mod otp;
pub mod provisioning;
pub mod qr;
pub mod registration;

pub use config::MfaConfig;
pub use errors::{MfaError, MfaResult};
pub use otp::{DeliveredCode, DeliveryChannel, OtpAlgorithm, TotpConfig};
pub use registration::{
    InMemoryRegistrationRepository, MfaMethod, MfaService, RegistrationRepository,
    RegistrationStatus, UserRegistration,
};

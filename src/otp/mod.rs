//! # One-Time Password Engine
//!
//! Code generation and validation for the supported second factors:
//!
//! - `hotp` / `totp`: RFC 4226/6238 codes for authenticator apps, with
//!   shadow-window validation to tolerate clock drift
//! - `delivery`: random numeric codes issued out-of-band (email/SMS),
//!   valid once inside a configurable delivery window
//! - `secret`: secret generation and the Base32 form used by
//!   authenticator apps

pub mod delivery;
pub mod hotp;
pub mod secret;
pub mod totp;

pub use delivery::{DeliveredCode, DeliveryChannel};
pub use hotp::{generate_hotp, OtpAlgorithm};
pub use totp::{generate_totp, verify_totp, TotpConfig};

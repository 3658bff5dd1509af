//! # Observability
//!
//! Append-only, in-memory audit surfaces for the MFA engine.

pub mod attempt_log;

pub use attempt_log::{AttemptKind, AttemptLog, AttemptLogConfig, AttemptLogEntry};

//! # MFA Registration
//!
//! Per-user second-factor registration state and the service that drives
//! enrollment and sign-in verification. Storage is behind a repository
//! trait; directory- or database-backed implementations live outside this
//! crate, an in-memory implementation ships for tests and small
//! deployments.

pub mod model;
pub mod repository;
pub mod service;

pub use model::{MfaMethod, RegistrationStatus, UserRegistration};
pub use repository::{InMemoryRegistrationRepository, RegistrationRepository};
pub use service::MfaService;

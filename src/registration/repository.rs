//! # Registration Repository
//!
//! Storage seam for registration state. Directory- and database-backed
//! implementations plug in behind this trait; the in-memory
//! implementation backs tests and single-process deployments.

use std::sync::RwLock;

use uuid::Uuid;

use crate::errors::MfaResult;
use crate::registration::model::{RegistrationStatus, UserRegistration};

/// Repository for MFA registrations
pub trait RegistrationRepository: Send + Sync {
    /// Find all registrations for a user
    fn find_by_user_id(&self, user_id: Uuid) -> MfaResult<Vec<UserRegistration>>;

    /// Find registration by ID
    fn find_by_id(&self, registration_id: Uuid) -> MfaResult<Option<UserRegistration>>;

    /// Create a new registration
    fn create(&self, registration: UserRegistration) -> MfaResult<UserRegistration>;

    /// Update registration status
    fn update_status(&self, registration_id: Uuid, status: RegistrationStatus) -> MfaResult<()>;

    /// Delete a registration
    fn delete(&self, registration_id: Uuid) -> MfaResult<()>;
}

/// In-memory registration repository
pub struct InMemoryRegistrationRepository {
    registrations: RwLock<Vec<UserRegistration>>,
}

impl InMemoryRegistrationRepository {
    pub fn new() -> Self {
        Self {
            registrations: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryRegistrationRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrationRepository for InMemoryRegistrationRepository {
    fn find_by_user_id(&self, user_id: Uuid) -> MfaResult<Vec<UserRegistration>> {
        let regs = self.registrations.read().unwrap();
        Ok(regs.iter().filter(|r| r.user_id == user_id).cloned().collect())
    }

    fn find_by_id(&self, registration_id: Uuid) -> MfaResult<Option<UserRegistration>> {
        let regs = self.registrations.read().unwrap();
        Ok(regs.iter().find(|r| r.id == registration_id).cloned())
    }

    fn create(&self, registration: UserRegistration) -> MfaResult<UserRegistration> {
        let mut regs = self.registrations.write().unwrap();
        regs.push(registration.clone());
        Ok(registration)
    }

    fn update_status(&self, registration_id: Uuid, status: RegistrationStatus) -> MfaResult<()> {
        let mut regs = self.registrations.write().unwrap();
        if let Some(r) = regs.iter_mut().find(|r| r.id == registration_id) {
            r.status = status;
            r.updated_at = chrono::Utc::now();
        }
        Ok(())
    }

    fn delete(&self, registration_id: Uuid) -> MfaResult<()> {
        let mut regs = self.registrations.write().unwrap();
        regs.retain(|r| r.id != registration_id);
        Ok(())
    }
}

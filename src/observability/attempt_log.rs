//! # MFA Attempt Log
//!
//! Minimal, append-only logging of enrollment and verification attempts
//! for auditability.
//!
//! # Design Principles
//!
//! 1. **Append-only**: attempts are logged, never modified
//! 2. **Explicit**: every field is recorded as presented, no hidden data
//! 3. **Bounded**: FIFO eviction past a configured capacity
//! 4. **Opt-in**: disabled unless configuration enables it
//!
//! Codes and secrets never enter the log; only outcomes do.

use std::collections::VecDeque;
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::registration::model::MfaMethod;

/// Kind of attempt being recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttemptKind {
    /// A new factor was enrolled
    Enrollment,
    /// An enrollment confirmation code was checked
    EnrollmentVerification,
    /// A sign-in code was checked
    SignIn,
    /// An out-of-band code was issued
    CodeIssue,
}

impl AttemptKind {
    /// Returns string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            AttemptKind::Enrollment => "enrollment",
            AttemptKind::EnrollmentVerification => "enrollment_verification",
            AttemptKind::SignIn => "sign_in",
            AttemptKind::CodeIssue => "code_issue",
        }
    }
}

/// A single attempt log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttemptLogEntry {
    /// Unique entry ID
    pub id: Uuid,
    /// When the attempt happened
    pub timestamp: DateTime<Utc>,
    /// Subject of the attempt
    pub user_id: Uuid,
    /// Factor involved, when one was resolved
    pub method: Option<MfaMethod>,
    /// What was attempted
    pub kind: AttemptKind,
    /// Whether the attempt succeeded
    pub success: bool,
    /// Free-form context (error class, channel), never code material
    pub detail: Option<String>,
}

impl AttemptLogEntry {
    /// Create a new attempt log entry builder
    pub fn builder(kind: AttemptKind, user_id: Uuid) -> AttemptLogEntryBuilder {
        AttemptLogEntryBuilder {
            kind,
            user_id,
            method: None,
            success: false,
            detail: None,
        }
    }
}

/// Builder for attempt log entries
pub struct AttemptLogEntryBuilder {
    kind: AttemptKind,
    user_id: Uuid,
    method: Option<MfaMethod>,
    success: bool,
    detail: Option<String>,
}

impl AttemptLogEntryBuilder {
    /// Set the factor involved
    pub fn method(mut self, method: MfaMethod) -> Self {
        self.method = Some(method);
        self
    }

    /// Set the outcome
    pub fn success(mut self, success: bool) -> Self {
        self.success = success;
        self
    }

    /// Set free-form context
    pub fn detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Build the log entry
    pub fn build(self) -> AttemptLogEntry {
        AttemptLogEntry {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            user_id: self.user_id,
            method: self.method,
            kind: self.kind,
            success: self.success,
            detail: self.detail,
        }
    }
}

/// Attempt log configuration
#[derive(Debug, Clone)]
pub struct AttemptLogConfig {
    /// Whether attempt logging is enabled (opt-in)
    pub enabled: bool,
    /// Maximum entries to keep in memory
    pub max_entries: usize,
}

impl Default for AttemptLogConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            max_entries: 10_000,
        }
    }
}

/// Append-only attempt log
#[derive(Debug)]
pub struct AttemptLog {
    config: AttemptLogConfig,
    entries: RwLock<VecDeque<AttemptLogEntry>>,
}

impl AttemptLog {
    /// Create a new attempt log with the given configuration
    pub fn new(config: AttemptLogConfig) -> Self {
        Self {
            config,
            entries: RwLock::new(VecDeque::new()),
        }
    }

    /// Create a disabled attempt log (no-op)
    pub fn disabled() -> Self {
        Self::new(AttemptLogConfig {
            enabled: false,
            ..Default::default()
        })
    }

    /// Check if attempt logging is enabled
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Log an attempt
    pub fn log(&self, entry: AttemptLogEntry) {
        if !self.config.enabled {
            return;
        }

        if let Ok(mut entries) = self.entries.write() {
            // Enforce max entries (FIFO eviction)
            while entries.len() >= self.config.max_entries {
                entries.pop_front();
            }
            entries.push_back(entry);
        }
    }

    /// Get all entries
    pub fn entries(&self) -> Vec<AttemptLogEntry> {
        self.entries
            .read()
            .map(|e| e.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Get failed attempts only
    pub fn failures(&self) -> Vec<AttemptLogEntry> {
        self.entries
            .read()
            .map(|e| e.iter().filter(|a| !a.success).cloned().collect())
            .unwrap_or_default()
    }

    /// Get entries for one user
    pub fn entries_for_user(&self, user_id: Uuid) -> Vec<AttemptLogEntry> {
        self.entries
            .read()
            .map(|e| e.iter().filter(|a| a.user_id == user_id).cloned().collect())
            .unwrap_or_default()
    }

    /// Get entry count
    pub fn count(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }
}

/// Thread-safe attempt log handle
pub type SharedAttemptLog = Arc<AttemptLog>;

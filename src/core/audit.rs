//! Audit trail population
//!
//! Provides the "current actor" abstraction and the pre-write hook that
//! stamps timestamps, actor and the initial version onto an entity before it
//! is handed to a store.

use crate::core::entity::AuditMetadata;
use chrono::{DateTime, SubsecRound, Utc};
use std::sync::Arc;

/// Supplies the actor recorded in `created_by` / `last_modified_by`
pub trait AuditorProvider: Send + Sync {
    /// The current actor, or `None` when no actor context is available
    fn current_auditor(&self) -> Option<String>;
}

/// Provider used when nobody is known (records keep `null` actors)
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAuditor;

impl AuditorProvider for NoAuditor {
    fn current_auditor(&self) -> Option<String> {
        None
    }
}

/// Provider that always reports the same actor (e.g. a service account)
#[derive(Debug, Clone)]
pub struct FixedAuditor(pub String);

impl AuditorProvider for FixedAuditor {
    fn current_auditor(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// Pre-write stage of the data access layer
#[derive(Clone)]
pub struct Auditing {
    auditor: Arc<dyn AuditorProvider>,
}

impl Auditing {
    pub fn new(auditor: Arc<dyn AuditorProvider>) -> Self {
        Self { auditor }
    }

    /// Auditing without an actor context
    pub fn anonymous() -> Self {
        Self::new(Arc::new(NoAuditor))
    }

    /// Current time, truncated to the microsecond precision of the stores
    fn now() -> DateTime<Utc> {
        Utc::now().trunc_subsecs(6)
    }

    /// Stamp a fresh record. Any identity carried by the candidate is dropped.
    pub fn on_create(&self, audit: &mut AuditMetadata) {
        let now = Self::now();
        let actor = self.auditor.current_auditor();

        audit.id = None;
        audit.version = Some(0);
        audit.created_date = Some(now);
        audit.last_modified_date = Some(now);
        audit.created_by = actor.clone();
        audit.last_modified_by = actor;
    }

    /// Refresh the modification trail. Creation fields are left untouched.
    pub fn on_update(&self, audit: &mut AuditMetadata) {
        audit.last_modified_date = Some(Self::now());
        audit.last_modified_by = self.auditor.current_auditor();
    }
}

impl Default for Auditing {
    fn default() -> Self {
        Self::anonymous()
    }
}

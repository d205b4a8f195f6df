//! Entity trait and the identity/audit block shared by every entity

use crate::core::validation::{RuleSet, Violation};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Identity, optimistic-concurrency version and audit trail of a record.
///
/// Embedded (and flattened on the wire) into every entity. All fields are
/// `None` on a candidate that has not been persisted yet; the store and the
/// auditing hook fill them in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct AuditMetadata {
    /// Surrogate key assigned by the store, immutable afterwards
    pub id: Option<i64>,

    /// Starts at 0, bumped by the store on every successful update
    pub version: Option<i32>,

    pub created_date: Option<DateTime<Utc>>,
    pub last_modified_date: Option<DateTime<Utc>>,
    pub created_by: Option<String>,
    pub last_modified_by: Option<String>,
}

impl AuditMetadata {
    /// Whether this record has been assigned an identity by a store
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

/// A value that must be unique across all records of one entity type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueKey {
    /// Name of the store-level constraint (e.g. `uk_currency_code`)
    pub constraint: &'static str,
    pub field: &'static str,
    pub value: String,
}

/// Base trait for all persisted resources.
///
/// Implemented through the `impl_entity!` macro for the concrete types.
pub trait Entity:
    Clone + std::fmt::Debug + Send + Sync + Serialize + DeserializeOwned + 'static
{
    /// The plural resource name used in URLs (e.g., "currencies")
    fn resource_name() -> &'static str;

    /// The singular resource name (e.g., "currency")
    fn resource_name_singular() -> &'static str;

    fn audit(&self) -> &AuditMetadata;

    fn audit_mut(&mut self) -> &mut AuditMetadata;

    /// Field constraints checked before every write
    fn rules() -> &'static RuleSet<Self>;

    /// Business key that must stay unique across the collection
    fn unique_key(&self) -> Option<UniqueKey> {
        None
    }

    fn id(&self) -> Option<i64> {
        self.audit().id
    }

    fn version(&self) -> Option<i32> {
        self.audit().version
    }

    /// Evaluate every rule of this entity type
    fn violations(&self) -> Vec<Violation> {
        Self::rules().validate(self)
    }
}

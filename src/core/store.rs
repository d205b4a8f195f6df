//! Storage backend trait

use crate::core::entity::Entity;
use crate::core::error::CatalogResult;
use crate::core::query::{Page, PageRequest};
use async_trait::async_trait;

/// Raw persistence for one entity type.
///
/// Implementations own identity assignment, uniqueness enforcement and the
/// optimistic version check. Validation and audit stamping happen one layer
/// up, in [`Repository`](crate::core::repository::Repository), so every
/// backend sees entities that are already valid and stamped.
///
/// Each method is one atomic unit of work.
#[async_trait]
pub trait EntityStore<T: Entity>: Send + Sync {
    /// Persist a new record and assign its identity.
    ///
    /// Fails with `UniquenessViolation` if the unique key is already taken.
    async fn insert(&self, entity: T) -> CatalogResult<T>;

    /// Get a record by identity
    async fn find_by_id(&self, id: i64) -> CatalogResult<Option<T>>;

    /// One page of records ordered by identity, plus the total count
    async fn find_page(&self, request: &PageRequest) -> CatalogResult<Page<T>>;

    /// The subset of `ids` that exist, in no guaranteed order
    async fn find_all_by_id(&self, ids: &[i64]) -> CatalogResult<Vec<T>>;

    /// Overwrite an existing record.
    ///
    /// Succeeds only if the stored version equals `entity.version()`; the
    /// stored version is then incremented. Creation audit fields are never
    /// overwritten. Fails with `NotFound`, `VersionConflict` or
    /// `UniquenessViolation`.
    async fn update(&self, entity: T) -> CatalogResult<T>;

    /// Remove a record, `NotFound` if it does not exist
    async fn delete_by_id(&self, id: i64) -> CatalogResult<()>;

    /// Remove every record of this type
    async fn delete_all(&self) -> CatalogResult<()>;

    async fn count(&self) -> CatalogResult<u64>;

    async fn exists_by_id(&self, id: i64) -> CatalogResult<bool>;
}

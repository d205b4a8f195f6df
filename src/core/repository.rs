//! Generic data access layer
//!
//! `Repository<T>` is the single entry point used by the REST handlers. Every
//! write goes through the same pipeline:
//!
//! ```text
//! validate (all rules) -> auditing hook -> EntityStore
//! ```
//!
//! Nothing reaches the store if a single rule is broken.

use crate::core::audit::Auditing;
use crate::core::entity::Entity;
use crate::core::error::{CatalogError, CatalogResult, EntityError, ValidationFailure};
use crate::core::query::{Page, PageRequest};
use crate::core::store::EntityStore;
use std::sync::Arc;

/// CRUD operations for one entity type over any [`EntityStore`]
pub struct Repository<T: Entity> {
    store: Arc<dyn EntityStore<T>>,
    auditing: Auditing,
}

impl<T: Entity> Clone for Repository<T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            auditing: self.auditing.clone(),
        }
    }
}

impl<T: Entity> Repository<T> {
    pub fn new(store: Arc<dyn EntityStore<T>>, auditing: Auditing) -> Self {
        Self { store, auditing }
    }

    /// Repository without an actor context
    pub fn anonymous(store: impl EntityStore<T> + 'static) -> Self {
        Self::new(Arc::new(store), Auditing::anonymous())
    }

    fn validate(entity: &T) -> CatalogResult<()> {
        let violations = entity.violations();
        if violations.is_empty() {
            return Ok(());
        }

        tracing::debug!(
            entity_type = T::resource_name_singular(),
            violations = violations.len(),
            "rejected write"
        );
        Err(ValidationFailure {
            entity_type: T::resource_name_singular(),
            violations,
        }
        .into())
    }

    fn persisted_id(entity: &T) -> CatalogResult<i64> {
        entity.id().ok_or_else(|| {
            EntityError::Transient {
                entity_type: T::resource_name_singular(),
            }
            .into()
        })
    }

    /// Validate, stamp and persist a new record
    pub async fn create(&self, mut entity: T) -> CatalogResult<T> {
        Self::validate(&entity)?;
        self.auditing.on_create(entity.audit_mut());

        let created = self.store.insert(entity).await?;
        tracing::debug!(
            entity_type = T::resource_name_singular(),
            id = ?created.id(),
            "created"
        );
        Ok(created)
    }

    /// Get a record by identity; a missing id is `Ok(None)`
    pub async fn find_by_id(&self, id: i64) -> CatalogResult<Option<T>> {
        self.store.find_by_id(id).await
    }

    pub async fn find_all(&self, request: &PageRequest) -> CatalogResult<Page<T>> {
        self.store.find_page(request).await
    }

    pub async fn find_all_by_id(&self, ids: &[i64]) -> CatalogResult<Vec<T>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        self.store.find_all_by_id(ids).await
    }

    /// Re-validate and overwrite an existing record.
    ///
    /// The entity's version must match the stored one.
    pub async fn update(&self, mut entity: T) -> CatalogResult<T> {
        let id = Self::persisted_id(&entity)?;
        Self::validate(&entity)?;
        self.auditing.on_update(entity.audit_mut());

        match self.store.update(entity).await {
            Ok(updated) => {
                tracing::debug!(
                    entity_type = T::resource_name_singular(),
                    id,
                    version = ?updated.version(),
                    "updated"
                );
                Ok(updated)
            }
            Err(err) => {
                if matches!(err, CatalogError::Entity(EntityError::VersionConflict { .. })) {
                    tracing::warn!(
                        entity_type = T::resource_name_singular(),
                        id,
                        "stale write rejected"
                    );
                }
                Err(err)
            }
        }
    }

    /// Remove the record identified by `entity`
    pub async fn delete(&self, entity: &T) -> CatalogResult<()> {
        let id = Self::persisted_id(entity)?;
        self.delete_by_id(id).await
    }

    pub async fn delete_by_id(&self, id: i64) -> CatalogResult<()> {
        self.store.delete_by_id(id).await?;
        tracing::debug!(entity_type = T::resource_name_singular(), id, "deleted");
        Ok(())
    }

    pub async fn delete_all(&self) -> CatalogResult<()> {
        self.store.delete_all().await
    }

    pub async fn count(&self) -> CatalogResult<u64> {
        self.store.count().await
    }

    pub async fn exists_by_id(&self, id: i64) -> CatalogResult<bool> {
        self.store.exists_by_id(id).await
    }
}

//! In-memory implementation of EntityStore for testing and development

use crate::core::entity::Entity;
use crate::core::error::{CatalogResult, EntityError, StorageError};
use crate::core::query::{Page, PageRequest, SortDirection};
use crate::core::store::EntityStore;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

const BACKEND: &str = "in-memory";

struct Table<T> {
    rows: BTreeMap<i64, T>,
    next_id: i64,
}

impl<T: Entity> Table<T> {
    /// Reject `entity` if another row (other than `except`) holds its unique key
    fn check_unique(&self, entity: &T, except: Option<i64>) -> CatalogResult<()> {
        let Some(key) = entity.unique_key() else {
            return Ok(());
        };

        let taken = self.rows.iter().any(|(id, row)| {
            Some(*id) != except && row.unique_key().is_some_and(|k| k.value == key.value)
        });

        if taken {
            return Err(EntityError::UniquenessViolation {
                entity_type: T::resource_name_singular(),
                constraint: key.constraint.to_string(),
                field: key.field,
                value: key.value,
            }
            .into());
        }
        Ok(())
    }
}

/// In-memory store implementation
///
/// Rows live in an ordered map guarded by a `RwLock`; every write is a
/// single critical section, which gives the same atomicity as one SQL
/// statement. Identities come from a monotonic sequence starting at 1 and
/// are never reused.
#[derive(Clone)]
pub struct InMemoryStore<T> {
    table: Arc<RwLock<Table<T>>>,
}

impl<T: Entity> InMemoryStore<T> {
    pub fn new() -> Self {
        Self {
            table: Arc::new(RwLock::new(Table {
                rows: BTreeMap::new(),
                next_id: 1,
            })),
        }
    }

    fn read(&self) -> CatalogResult<RwLockReadGuard<'_, Table<T>>> {
        self.table.read().map_err(|e| {
            StorageError::Query {
                backend: BACKEND,
                message: format!("Failed to acquire read lock: {}", e),
            }
            .into()
        })
    }

    fn write(&self) -> CatalogResult<RwLockWriteGuard<'_, Table<T>>> {
        self.table.write().map_err(|e| {
            StorageError::Query {
                backend: BACKEND,
                message: format!("Failed to acquire write lock: {}", e),
            }
            .into()
        })
    }

    fn not_found(id: i64) -> EntityError {
        EntityError::NotFound {
            entity_type: T::resource_name_singular(),
            id,
        }
    }
}

impl<T: Entity> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Entity> EntityStore<T> for InMemoryStore<T> {
    async fn insert(&self, mut entity: T) -> CatalogResult<T> {
        let mut table = self.write()?;
        table.check_unique(&entity, None)?;

        let id = table.next_id;
        table.next_id += 1;
        entity.audit_mut().id = Some(id);

        table.rows.insert(id, entity.clone());
        Ok(entity)
    }

    async fn find_by_id(&self, id: i64) -> CatalogResult<Option<T>> {
        Ok(self.read()?.rows.get(&id).cloned())
    }

    async fn find_page(&self, request: &PageRequest) -> CatalogResult<Page<T>> {
        let table = self.read()?;
        let total = table.rows.len() as u64;
        let Some(offset) = request.offset() else {
            return Ok(Page::new(Vec::new(), request, total));
        };

        let content: Vec<T> = match request.direction {
            SortDirection::Asc => table
                .rows
                .values()
                .skip(offset)
                .take(request.size)
                .cloned()
                .collect(),
            SortDirection::Desc => table
                .rows
                .values()
                .rev()
                .skip(offset)
                .take(request.size)
                .cloned()
                .collect(),
        };

        Ok(Page::new(content, request, total))
    }

    async fn find_all_by_id(&self, ids: &[i64]) -> CatalogResult<Vec<T>> {
        let table = self.read()?;
        let mut found: Vec<T> = Vec::with_capacity(ids.len());
        let mut seen: Vec<i64> = Vec::with_capacity(ids.len());
        for id in ids {
            if seen.contains(id) {
                continue;
            }
            seen.push(*id);
            if let Some(row) = table.rows.get(id) {
                found.push(row.clone());
            }
        }
        Ok(found)
    }

    async fn update(&self, mut entity: T) -> CatalogResult<T> {
        let Some(id) = entity.id() else {
            return Err(EntityError::Transient {
                entity_type: T::resource_name_singular(),
            }
            .into());
        };

        let mut table = self.write()?;
        let stored = table.rows.get(&id).ok_or_else(|| Self::not_found(id))?;

        let expected = entity.version().unwrap_or_default();
        let current = stored.version().unwrap_or_default();
        if expected != current {
            return Err(EntityError::VersionConflict {
                entity_type: T::resource_name_singular(),
                id,
                expected,
            }
            .into());
        }

        let created_date = stored.audit().created_date;
        let created_by = stored.audit().created_by.clone();
        table.check_unique(&entity, Some(id))?;

        let audit = entity.audit_mut();
        audit.version = Some(current + 1);
        audit.created_date = created_date;
        audit.created_by = created_by;

        table.rows.insert(id, entity.clone());
        Ok(entity)
    }

    async fn delete_by_id(&self, id: i64) -> CatalogResult<()> {
        self.write()?
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| Self::not_found(id).into())
    }

    async fn delete_all(&self) -> CatalogResult<()> {
        self.write()?.rows.clear();
        Ok(())
    }

    async fn count(&self) -> CatalogResult<u64> {
        Ok(self.read()?.rows.len() as u64)
    }

    async fn exists_by_id(&self, id: i64) -> CatalogResult<bool> {
        Ok(self.read()?.rows.contains_key(&id))
    }
}

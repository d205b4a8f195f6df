//! Entity registry for managing entity descriptors and auto-generating CRUD routes

use axum::Router;
use std::collections::BTreeMap;

/// Trait that describes how to build routes for an entity
///
/// Each resource (Currency, Product) implements this trait to provide its
/// CRUD routes.
pub trait EntityDescriptor: Send + Sync {
    /// The entity type name (singular, e.g., "currency")
    fn entity_type(&self) -> &str;

    /// The plural form used as the URL prefix (e.g., "currencies")
    fn plural(&self) -> &str;

    /// Build the CRUD routes for this entity, already bound to their state
    fn build_routes(&self) -> Router;
}

/// Registry for all exposed entities, keyed by singular type name
#[derive(Default)]
pub struct EntityRegistry {
    descriptors: BTreeMap<String, Box<dyn EntityDescriptor>>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entity descriptor, replacing any previous one for the
    /// same entity type
    pub fn register(&mut self, descriptor: Box<dyn EntityDescriptor>) {
        let entity_type = descriptor.entity_type().to_string();
        if self.descriptors.insert(entity_type, descriptor).is_some() {
            tracing::warn!("entity descriptor registered twice, keeping the last one");
        }
    }

    /// Merge the routes of every registered entity into one router
    pub fn build_routes(&self) -> Router {
        self.descriptors
            .values()
            .fold(Router::new(), |router, descriptor| {
                tracing::debug!(
                    entity_type = descriptor.entity_type(),
                    prefix = %format!("/{}", descriptor.plural()),
                    "mounting CRUD routes"
                );
                router.merge(descriptor.build_routes())
            })
    }

    /// Registered entity types, in name order
    pub fn entity_types(&self) -> Vec<&str> {
        self.descriptors.keys().map(|s| s.as_str()).collect()
    }

    /// URL prefix of every registered resource
    pub fn resource_paths(&self) -> Vec<String> {
        self.descriptors
            .values()
            .map(|d| format!("/{}", d.plural()))
            .collect()
    }
}

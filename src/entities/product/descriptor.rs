//! Entity descriptor for Product

use super::model::Product;
use crate::server::entity_registry::EntityDescriptor;
use crate::server::rest::{ResourceState, crud_routes};
use axum::Router;

/// Descriptor for the Product entity
pub struct ProductDescriptor {
    pub state: ResourceState<Product>,
}

impl ProductDescriptor {
    pub fn new(state: ResourceState<Product>) -> Self {
        Self { state }
    }
}

impl EntityDescriptor for ProductDescriptor {
    fn entity_type(&self) -> &str {
        "product"
    }

    fn plural(&self) -> &str {
        "products"
    }

    fn build_routes(&self) -> Router {
        crud_routes(self.state.clone())
    }
}

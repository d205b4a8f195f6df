//! Entity descriptor for Currency

use super::model::Currency;
use crate::server::entity_registry::EntityDescriptor;
use crate::server::rest::{ResourceState, crud_routes};
use axum::Router;

/// Descriptor for the Currency entity
pub struct CurrencyDescriptor {
    pub state: ResourceState<Currency>,
}

impl CurrencyDescriptor {
    pub fn new(state: ResourceState<Currency>) -> Self {
        Self { state }
    }
}

impl EntityDescriptor for CurrencyDescriptor {
    fn entity_type(&self) -> &str {
        "currency"
    }

    fn plural(&self) -> &str {
        "currencies"
    }

    fn build_routes(&self) -> Router {
        crud_routes(self.state.clone())
    }
}

//! Server module for building HTTP servers with auto-registered routes
//!
//! `ServerBuilder` mounts the CRUD routes of every registered resource next to
//! the `/health` and `/healthz` liveness probes.

pub mod builder;
pub mod entity_registry;
pub mod rest;

pub use builder::ServerBuilder;
pub use entity_registry::{EntityDescriptor, EntityRegistry};
pub use rest::{ResourceState, RestResource, crud_routes};

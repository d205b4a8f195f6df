//! Core module containing fundamental traits and types of the catalog

pub mod audit;
pub mod entity;
pub mod error;
pub mod extractors;
pub mod query;
pub mod repository;
pub mod store;
pub mod validation;

pub use audit::{AuditorProvider, Auditing, FixedAuditor, NoAuditor};
pub use entity::{AuditMetadata, Entity, UniqueKey};
pub use error::{CatalogError, CatalogResult};
pub use query::{Page, PageMetadata, PageParams, PageRequest, SortDirection};
pub use repository::Repository;
pub use store::EntityStore;
pub use validation::{Rule, RuleSet, Violation};

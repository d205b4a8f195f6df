//! # Catalog API
//!
//! A CRUD backend for `Currency` and `Product` resources, exposed over REST.
//!
//! ## Layers
//!
//! - **Entities** (`entities`): plain records embedding an [`AuditMetadata`](core::AuditMetadata)
//!   block, each with an explicit list of validation rules
//! - **Data access** (`core::repository`, `storage`): a generic
//!   [`Repository`](core::Repository) that validates, stamps audit fields and
//!   delegates to an [`EntityStore`](core::EntityStore) backend (in-memory or
//!   PostgreSQL)
//! - **REST** (`server`): generic handlers mounted per resource by
//!   [`ServerBuilder`](server::ServerBuilder)
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use catalog::prelude::*;
//!
//! let currencies = Repository::anonymous(InMemoryStore::<Currency>::new());
//! let usd = currencies
//!     .create(Currency::new("US Dollar", "USD", Some("$".into()), 2))
//!     .await?;
//! assert_eq!(usd.version(), Some(0));
//!
//! ServerBuilder::new()
//!     .with_catalog(currencies, products, PaginationConfig::default())
//!     .serve("127.0.0.1:8080")
//!     .await?;
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        audit::{AuditorProvider, Auditing, FixedAuditor, NoAuditor},
        entity::{AuditMetadata, Entity, UniqueKey},
        error::{
            CatalogError, CatalogResult, ConfigError, EntityError, RequestError, StorageError,
            ValidationFailure,
        },
        query::{Page, PageMetadata, PageParams, PageRequest, SortDirection},
        repository::Repository,
        store::EntityStore,
        validation::{Rule, RuleSet, Violation, validators},
    };

    // === Macros ===
    pub use crate::impl_entity;

    // === Entities ===
    pub use crate::entities::currency::{
        Currency, CurrencyCreateRequest, CurrencyDescriptor, CurrencyUpdateRequest,
    };
    pub use crate::entities::product::{
        Product, ProductCreateRequest, ProductDescriptor, ProductUpdateRequest,
    };

    // === Storage ===
    pub use crate::storage::InMemoryStore;
    #[cfg(feature = "postgres")]
    pub use crate::storage::{PgRecord, PostgresStore};

    // === Config ===
    pub use crate::config::{AppConfig, PaginationConfig, StorageBackend};

    // === Server ===
    pub use crate::server::{
        EntityDescriptor, EntityRegistry, ResourceState, RestResource, ServerBuilder,
    };

    // === External dependencies ===
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
}

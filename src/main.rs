//! Catalog server
//!
//! ```text
//! catalog-server [config.yaml]
//! ```
//!
//! The config path may also come from `CATALOG_CONFIG`. Without one, defaults
//! apply (in-memory storage on 127.0.0.1:8080), still subject to the
//! `CATALOG_*` environment overrides.

use anyhow::{Context, Result};
use catalog::config::{AppConfig, StorageBackend};
use catalog::core::{Auditing, FixedAuditor, Repository};
use catalog::entities::{Currency, Product};
use catalog::server::ServerBuilder;
use catalog::storage::InMemoryStore;
use std::sync::Arc;

const ENV_CONFIG: &str = "CATALOG_CONFIG";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalog=info,tower_http=info".into()),
        )
        .init();

    let config = load_config()?;
    let auditing = match &config.audit.default_actor {
        Some(actor) => Auditing::new(Arc::new(FixedAuditor(actor.clone()))),
        None => Auditing::anonymous(),
    };

    tracing::info!(backend = %config.storage.backend, "starting catalog");

    let (currencies, products) = match config.storage.backend {
        StorageBackend::Memory => (
            Repository::<Currency>::new(Arc::new(InMemoryStore::new()), auditing.clone()),
            Repository::<Product>::new(Arc::new(InMemoryStore::new()), auditing),
        ),
        StorageBackend::Postgres => postgres_repositories(&config, auditing).await?,
    };

    ServerBuilder::new()
        .with_catalog(currencies, products, config.pagination)
        .serve(&config.server.bind)
        .await
}

fn load_config() -> Result<AppConfig> {
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var(ENV_CONFIG).ok());

    let config = match path {
        Some(path) => {
            tracing::info!("loading configuration from {}", path);
            AppConfig::from_yaml_file(&path)?
        }
        None => AppConfig::default(),
    }
    .with_env_overrides()?;

    config.validate()?;
    Ok(config)
}

#[cfg(feature = "postgres")]
async fn postgres_repositories(
    config: &AppConfig,
    auditing: Auditing,
) -> Result<(Repository<Currency>, Repository<Product>)> {
    use catalog::storage::{PostgresStore, migrate};
    use sqlx::postgres::PgPoolOptions;

    let url = config
        .database
        .url
        .as_deref()
        .context("database.url is required for the postgres backend")?;

    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(url)
        .await
        .context("failed to connect to database")?;

    migrate(&pool).await?;
    tracing::info!("database migrations applied");

    Ok((
        Repository::new(Arc::new(PostgresStore::new(pool.clone())), auditing.clone()),
        Repository::new(Arc::new(PostgresStore::new(pool)), auditing),
    ))
}

#[cfg(not(feature = "postgres"))]
async fn postgres_repositories(
    _config: &AppConfig,
    _auditing: Auditing,
) -> Result<(Repository<Currency>, Repository<Product>)> {
    anyhow::bail!("storage backend 'postgres' requires building with the `postgres` feature")
}

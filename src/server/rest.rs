//! Generic CRUD handlers and routes
//!
//! Every resource gets the same five endpoints:
//!
//! | Method | Path                   | Success                 |
//! |--------|------------------------|-------------------------|
//! | POST   | `/{plural}`            | 201 + created record    |
//! | GET    | `/{plural}`            | 200 + paged envelope    |
//! | GET    | `/{plural}/{id}`       | 200 + record, 404       |
//! | PUT    | `/{plural}/{id}`       | 200 + updated record    |
//! | DELETE | `/{plural}/{id}`       | 204, 404                |

use crate::config::PaginationConfig;
use crate::core::entity::Entity;
use crate::core::error::{CatalogError, CatalogResult, EntityError};
use crate::core::extractors::{IdPath, JsonBody, QueryParams};
use crate::core::query::{Page, PageParams};
use crate::core::repository::Repository;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::de::DeserializeOwned;

/// An entity exposed over REST, with its request payloads
pub trait RestResource: Entity {
    type CreateRequest: DeserializeOwned + Send + 'static;
    type UpdateRequest: DeserializeOwned + Send + 'static;

    /// Build a transient candidate from a creation payload
    fn from_create_request(request: Self::CreateRequest) -> Self;

    /// Overwrite the updatable fields of a loaded record
    fn apply_update(&mut self, request: Self::UpdateRequest);
}

/// Shared state of one resource's routes
pub struct ResourceState<T: Entity> {
    pub repository: Repository<T>,
    pub pagination: PaginationConfig,
}

impl<T: Entity> Clone for ResourceState<T> {
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
            pagination: self.pagination,
        }
    }
}

impl<T: Entity> ResourceState<T> {
    pub fn new(repository: Repository<T>, pagination: PaginationConfig) -> Self {
        Self {
            repository,
            pagination,
        }
    }
}

fn not_found<T: Entity>(id: i64) -> CatalogError {
    EntityError::NotFound {
        entity_type: T::resource_name_singular(),
        id,
    }
    .into()
}

pub async fn create_resource<T: RestResource>(
    State(state): State<ResourceState<T>>,
    JsonBody(request): JsonBody<T::CreateRequest>,
) -> CatalogResult<(StatusCode, Json<T>)> {
    let created = state
        .repository
        .create(T::from_create_request(request))
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_resources<T: RestResource>(
    State(state): State<ResourceState<T>>,
    QueryParams(params): QueryParams<PageParams>,
) -> CatalogResult<Json<Page<T>>> {
    let request =
        params.into_request(state.pagination.default_size, state.pagination.max_size)?;
    let page = state.repository.find_all(&request).await?;
    Ok(Json(page))
}

pub async fn get_resource<T: RestResource>(
    State(state): State<ResourceState<T>>,
    IdPath(id): IdPath,
) -> CatalogResult<Json<T>> {
    state
        .repository
        .find_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| not_found::<T>(id))
}

/// Load, overwrite, re-validate and persist.
///
/// A `version` carried by the payload replaces the loaded one, so a client
/// holding a stale copy gets a conflict instead of silently overwriting.
pub async fn update_resource<T: RestResource>(
    State(state): State<ResourceState<T>>,
    IdPath(id): IdPath,
    JsonBody(request): JsonBody<T::UpdateRequest>,
) -> CatalogResult<Json<T>> {
    let mut entity = state
        .repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found::<T>(id))?;

    entity.apply_update(request);
    let updated = state.repository.update(entity).await?;
    Ok(Json(updated))
}

pub async fn delete_resource<T: RestResource>(
    State(state): State<ResourceState<T>>,
    IdPath(id): IdPath,
) -> CatalogResult<StatusCode> {
    state.repository.delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// CRUD routes for `T` under `/{plural}`
pub fn crud_routes<T: RestResource>(state: ResourceState<T>) -> Router {
    let collection = format!("/{}", T::resource_name());
    let item = format!("/{}/{{id}}", T::resource_name());

    Router::new()
        .route(
            &collection,
            get(list_resources::<T>).post(create_resource::<T>),
        )
        .route(
            &item,
            get(get_resource::<T>)
                .put(update_resource::<T>)
                .delete(delete_resource::<T>),
        )
        .with_state(state)
}

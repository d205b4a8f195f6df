//! Product request payloads

use super::model::Product;
use crate::core::entity::AuditMetadata;
use crate::server::rest::RestResource;
use serde::{Deserialize, Serialize};

/// Body of `POST /products`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductCreateRequest {
    pub name: Option<String>,
    pub barcode: Option<String>,
    pub description: Option<String>,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub sku: Option<String>,
    pub weight: Option<f64>,
    pub dimensions: Option<String>,
    /// Defaults to `true` when absent
    pub active: Option<bool>,
}

/// Body of `PUT /products/{id}`
///
/// Only the descriptive fields are updatable; `sku`, `weight`, `dimensions`
/// and `active` keep their stored values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductUpdateRequest {
    pub name: Option<String>,
    pub barcode: Option<String>,
    pub description: Option<String>,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub version: Option<i32>,
}

impl RestResource for Product {
    type CreateRequest = ProductCreateRequest;
    type UpdateRequest = ProductUpdateRequest;

    fn from_create_request(request: ProductCreateRequest) -> Self {
        Product {
            audit: AuditMetadata::default(),
            name: request.name,
            barcode: request.barcode,
            description: request.description,
            brand: request.brand,
            category: request.category,
            sku: request.sku,
            weight: request.weight,
            dimensions: request.dimensions,
            active: request.active.unwrap_or(true),
        }
    }

    fn apply_update(&mut self, request: ProductUpdateRequest) {
        self.name = request.name;
        self.barcode = request.barcode;
        self.description = request.description;
        self.brand = request.brand;
        self.category = request.category;
        if let Some(version) = request.version {
            self.audit.version = Some(version);
        }
    }
}

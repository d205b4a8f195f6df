//! Product entity model

use crate::core::entity::AuditMetadata;
use crate::core::validation::{Rule, RuleSet, validators};
use serde::{Deserialize, Serialize};

fn default_active() -> bool {
    true
}

/// A sellable item identified by its barcode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(flatten)]
    #[cfg_attr(feature = "postgres", sqlx(flatten))]
    pub audit: AuditMetadata,

    pub name: Option<String>,

    /// Unique across all products
    pub barcode: Option<String>,

    pub description: Option<String>,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub sku: Option<String>,

    /// Grams
    pub weight: Option<f64>,

    pub dimensions: Option<String>,

    #[serde(default = "default_active")]
    pub active: bool,
}

impl Default for Product {
    fn default() -> Self {
        Self {
            audit: AuditMetadata::default(),
            name: None,
            barcode: None,
            description: None,
            brand: None,
            category: None,
            sku: None,
            weight: None,
            dimensions: None,
            active: default_active(),
        }
    }
}

impl Product {
    pub fn new(name: impl Into<String>, barcode: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            barcode: Some(barcode.into()),
            ..Default::default()
        }
    }
}

pub static PRODUCT_RULES: RuleSet<Product> = RuleSet::new(&[
    Rule {
        field: "name",
        message: "Product name is required",
        check: |p: &Product| validators::not_blank(p.name.as_deref()),
    },
    Rule {
        field: "name",
        message: "Product name must be less than 255 characters",
        check: |p: &Product| validators::max_chars(p.name.as_deref(), 255),
    },
    Rule {
        field: "barcode",
        message: "Product barcode is required",
        check: |p: &Product| validators::not_blank(p.barcode.as_deref()),
    },
    Rule {
        field: "barcode",
        message: "Product barcode must be less than 50 characters",
        check: |p: &Product| validators::max_chars(p.barcode.as_deref(), 50),
    },
    Rule {
        field: "description",
        message: "Product description must be less than 1000 characters",
        check: |p: &Product| validators::max_chars(p.description.as_deref(), 1000),
    },
    Rule {
        field: "brand",
        message: "Product brand must be less than 100 characters",
        check: |p: &Product| validators::max_chars(p.brand.as_deref(), 100),
    },
    Rule {
        field: "category",
        message: "Product category must be less than 100 characters",
        check: |p: &Product| validators::max_chars(p.category.as_deref(), 100),
    },
    Rule {
        field: "sku",
        message: "Product SKU must be less than 50 characters",
        check: |p: &Product| validators::max_chars(p.sku.as_deref(), 50),
    },
    Rule {
        field: "dimensions",
        message: "Product dimensions must be less than 50 characters",
        check: |p: &Product| validators::max_chars(p.dimensions.as_deref(), 50),
    },
]);

crate::impl_entity!(
    Product,
    "product",
    "products",
    rules: PRODUCT_RULES,
    unique: barcode => "uk_product_barcode",
);

#[cfg(feature = "postgres")]
impl crate::storage::postgres::PgRecord for Product {
    const TABLE: &'static str = "products";
    const COLUMNS: &'static [&'static str] = &[
        "name",
        "barcode",
        "description",
        "brand",
        "category",
        "sku",
        "weight",
        "dimensions",
        "active",
    ];

    fn bind_columns<'q>(
        &'q self,
        query: crate::storage::postgres::PgQueryAs<'q, Self>,
    ) -> crate::storage::postgres::PgQueryAs<'q, Self> {
        query
            .bind(&self.name)
            .bind(&self.barcode)
            .bind(&self.description)
            .bind(&self.brand)
            .bind(&self.category)
            .bind(&self.sku)
            .bind(self.weight)
            .bind(&self.dimensions)
            .bind(self.active)
    }
}

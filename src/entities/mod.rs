//! Catalog entities: model, request payloads and route descriptor per resource

pub mod currency;
pub mod macros;
pub mod product;

pub use currency::Currency;
pub use product::Product;

//! Product entity module

pub mod descriptor;
pub mod dto;
pub mod model;

pub use descriptor::ProductDescriptor;
pub use dto::{ProductCreateRequest, ProductUpdateRequest};
pub use model::{PRODUCT_RULES, Product};

//! Currency entity module

pub mod descriptor;
pub mod dto;
pub mod model;

pub use descriptor::CurrencyDescriptor;
pub use dto::{CurrencyCreateRequest, CurrencyUpdateRequest};
pub use model::{CURRENCY_RULES, Currency};

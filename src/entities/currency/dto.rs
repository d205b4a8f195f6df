//! Currency request payloads

use super::model::Currency;
use crate::core::entity::AuditMetadata;
use crate::server::rest::RestResource;
use serde::{Deserialize, Serialize};

/// Body of `POST /currencies`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CurrencyCreateRequest {
    pub name: Option<String>,
    pub code: Option<String>,
    pub symbol: Option<String>,
    pub decimal_places: Option<i32>,
}

/// Body of `PUT /currencies/{id}`
///
/// Every field replaces the stored value, including absent ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CurrencyUpdateRequest {
    pub name: Option<String>,
    pub code: Option<String>,
    pub symbol: Option<String>,
    pub decimal_places: Option<i32>,
    /// Version the client last read
    pub version: Option<i32>,
}

impl RestResource for Currency {
    type CreateRequest = CurrencyCreateRequest;
    type UpdateRequest = CurrencyUpdateRequest;

    fn from_create_request(request: CurrencyCreateRequest) -> Self {
        Currency {
            audit: AuditMetadata::default(),
            name: request.name,
            code: request.code,
            symbol: request.symbol,
            decimal_places: request.decimal_places,
        }
    }

    fn apply_update(&mut self, request: CurrencyUpdateRequest) {
        self.name = request.name;
        self.code = request.code;
        self.symbol = request.symbol;
        self.decimal_places = request.decimal_places;
        if let Some(version) = request.version {
            self.audit.version = Some(version);
        }
    }
}

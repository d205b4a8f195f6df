//! Currency entity model

use crate::core::entity::AuditMetadata;
use crate::core::validation::{Rule, RuleSet, validators};
use serde::{Deserialize, Serialize};

/// A monetary currency identified by its three-letter code
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    #[serde(flatten)]
    #[cfg_attr(feature = "postgres", sqlx(flatten))]
    pub audit: AuditMetadata,

    pub name: Option<String>,

    /// ISO-style code, unique across all currencies
    pub code: Option<String>,

    pub symbol: Option<String>,

    pub decimal_places: Option<i32>,
}

impl Currency {
    pub fn new(
        name: impl Into<String>,
        code: impl Into<String>,
        symbol: Option<String>,
        decimal_places: i32,
    ) -> Self {
        Self {
            audit: AuditMetadata::default(),
            name: Some(name.into()),
            code: Some(code.into()),
            symbol,
            decimal_places: Some(decimal_places),
        }
    }
}

pub static CURRENCY_RULES: RuleSet<Currency> = RuleSet::new(&[
    Rule {
        field: "name",
        message: "Currency name is required",
        check: |c: &Currency| validators::not_blank(c.name.as_deref()),
    },
    Rule {
        field: "name",
        message: "Currency name must be less than 100 characters",
        check: |c: &Currency| validators::max_chars(c.name.as_deref(), 100),
    },
    Rule {
        field: "code",
        message: "Currency code is required",
        check: |c: &Currency| validators::not_blank(c.code.as_deref()),
    },
    Rule {
        field: "code",
        message: "Currency code must be exactly 3 characters",
        check: |c: &Currency| validators::exact_chars(c.code.as_deref(), 3),
    },
    Rule {
        field: "symbol",
        message: "Currency symbol must be less than 5 characters",
        check: |c: &Currency| validators::max_chars(c.symbol.as_deref(), 5),
    },
    Rule {
        field: "decimalPlaces",
        message: "Number of decimal places is required",
        check: |c: &Currency| validators::not_null(c.decimal_places.as_ref()),
    },
    Rule {
        field: "decimalPlaces",
        message: "Number of decimal places must not be negative",
        check: |c: &Currency| validators::at_least(c.decimal_places, 0),
    },
]);

crate::impl_entity!(
    Currency,
    "currency",
    "currencies",
    rules: CURRENCY_RULES,
    unique: code => "uk_currency_code",
);

#[cfg(feature = "postgres")]
impl crate::storage::postgres::PgRecord for Currency {
    const TABLE: &'static str = "currencies";
    const COLUMNS: &'static [&'static str] = &["name", "code", "symbol", "decimal_places"];

    fn bind_columns<'q>(
        &'q self,
        query: crate::storage::postgres::PgQueryAs<'q, Self>,
    ) -> crate::storage::postgres::PgQueryAs<'q, Self> {
        query
            .bind(&self.name)
            .bind(&self.code)
            .bind(&self.symbol)
            .bind(self.decimal_places)
    }
}

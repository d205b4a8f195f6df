//! Macros for reducing boilerplate when defining entities

/// Implement [`Entity`](crate::core::entity::Entity) and
/// [`validator::Validate`] for a struct that embeds an `audit: AuditMetadata`
/// field.
///
/// The `Validate` impl is a public interop surface for callers that already
/// speak `validator` (form layers, other services embedding these types).
/// It reports the same rule set as `Entity::violations`, grouped by field.
/// [`Repository`](crate::core::Repository) uses `violations()` directly
/// because it needs the rule order.
///
/// # Example
///
/// ```rust,ignore
/// use catalog::prelude::*;
///
/// #[derive(Debug, Clone, Default, Serialize, Deserialize)]
/// #[serde(rename_all = "camelCase")]
/// pub struct Warehouse {
///     #[serde(flatten)]
///     pub audit: AuditMetadata,
///     pub code: Option<String>,
/// }
///
/// static WAREHOUSE_RULES: RuleSet<Warehouse> = RuleSet::new(&[Rule {
///     field: "code",
///     message: "Warehouse code is required",
///     check: |w: &Warehouse| validators::not_blank(w.code.as_deref()),
/// }]);
///
/// impl_entity!(
///     Warehouse,
///     "warehouse",
///     "warehouses",
///     rules: WAREHOUSE_RULES,
///     unique: code => "uk_warehouse_code",
/// );
/// ```
#[macro_export]
macro_rules! impl_entity {
    (
        $type:ident,
        $singular:expr,
        $plural:expr,
        rules: $rules:path
        $(, unique: $unique_field:ident => $constraint:expr)?
        $(,)?
    ) => {
        impl $crate::core::entity::Entity for $type {
            fn resource_name() -> &'static str {
                $plural
            }

            fn resource_name_singular() -> &'static str {
                $singular
            }

            fn audit(&self) -> &$crate::core::entity::AuditMetadata {
                &self.audit
            }

            fn audit_mut(&mut self) -> &mut $crate::core::entity::AuditMetadata {
                &mut self.audit
            }

            fn rules() -> &'static $crate::core::validation::RuleSet<Self> {
                &$rules
            }

            $(
                fn unique_key(&self) -> Option<$crate::core::entity::UniqueKey> {
                    self.$unique_field
                        .as_ref()
                        .map(|value| $crate::core::entity::UniqueKey {
                            constraint: $constraint,
                            field: stringify!($unique_field),
                            value: value.to_string(),
                        })
                }
            )?
        }

        impl ::validator::Validate for $type {
            fn validate(&self) -> Result<(), ::validator::ValidationErrors> {
                $crate::core::validation::to_validation_errors(
                    &<Self as $crate::core::entity::Entity>::violations(self),
                )
            }
        }
    };
}

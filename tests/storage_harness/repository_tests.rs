//! Macro-generated test suite for the data access layer.
//!
//! The `repository_tests!` macro runs `Repository<Currency>` and
//! `Repository<Product>` over any pair of stores and validates the full
//! contract.
//!
//! # Generated Tests
//!
//! ## Create
//! - `test_create_stamps_identity_and_audit`: id, version 0, timestamps, actor
//! - `test_create_reports_every_violation`: empty code breaks two rules
//! - `test_create_missing_fields_report_required`: null fields, "required" only
//! - `test_create_duplicate_code`: uniqueness violation, nothing written
//! - `test_create_ignores_candidate_identity`: caller-supplied id/version dropped
//!
//! ## Read
//! - `test_find_by_id_round_trip` / `test_find_by_id_missing`
//! - `test_find_all_by_id_subset`
//! - `test_pagination_newest_first` / `test_pagination_ascending`
//! - `test_pagination_far_past_the_end`: overflowing offsets give an empty page
//!
//! ## Update
//! - `test_update_in_place`: USD becomes GBP, version bumped, creation kept
//! - `test_update_stale_version`: conflict, stored row unchanged
//! - `test_update_unknown_id` / `test_update_transient`
//! - `test_update_to_taken_code` / `test_update_invalid`
//!
//! ## Delete / count
//! - `test_delete_then_exists` / `test_delete_unknown_id`
//! - `test_count_and_delete_all`
//!
//! ## Products
//! - `test_product_round_trip`, `test_product_duplicate_barcode`
//! - `test_product_length_limits`: every size rule at and past its limit
//! - `test_validator_interop_agrees_with_repository`
//!
//! ## Concurrency
//! - `test_concurrent_creates`: parallel creates from spawned tasks

/// Generate the repository conformance suite.
///
/// `$currencies` / `$products` must evaluate to fresh, empty
/// `EntityStore<Currency>` / `EntityStore<Product>` instances. They are
/// re-evaluated for each test.
#[macro_export]
macro_rules! repository_tests {
    ($currencies:expr, $products:expr) => {
        mod repository_contract_tests {
            use super::*;
            use catalog::core::error::{CatalogError, EntityError};
            use catalog::core::{Entity, PageRequest, SortDirection};
            use catalog::entities::{Currency, Product};

            async fn currencies() -> catalog::core::Repository<Currency> {
                repository($currencies)
            }

            async fn products() -> catalog::core::Repository<Product> {
                repository($products)
            }

            // ==================================================================
            // Create
            // ==================================================================

            #[tokio::test]
            async fn test_create_stamps_identity_and_audit() {
                let repo = currencies().await;

                let created = repo.create(usd()).await.unwrap();

                assert!(created.id().is_some());
                assert_eq!(created.version(), Some(0));
                assert_eq!(created.code.as_deref(), Some("USD"));
                assert_eq!(created.symbol.as_deref(), Some("$"));
                assert_eq!(created.decimal_places, Some(2));

                let audit = created.audit();
                assert!(audit.created_date.is_some());
                assert_eq!(audit.created_date, audit.last_modified_date);
                assert_eq!(audit.created_by.as_deref(), Some(ACTOR));
                assert_eq!(audit.last_modified_by.as_deref(), Some(ACTOR));
            }

            #[tokio::test]
            async fn test_create_reports_every_violation() {
                let repo = currencies().await;
                let mut candidate = usd();
                candidate.code = Some(String::new());

                let err = repo.create(candidate).await.unwrap_err();

                assert!(matches!(err, CatalogError::Validation(_)));
                assert_eq!(
                    violation_messages(&err),
                    vec![
                        "Currency code is required",
                        "Currency code must be exactly 3 characters"
                    ]
                );
                assert_eq!(repo.count().await.unwrap(), 0);
            }

            #[tokio::test]
            async fn test_create_missing_fields_report_required() {
                let repo = currencies().await;
                let mut candidate = usd();
                candidate.decimal_places = None;
                candidate.name = None;

                let err = repo.create(candidate).await.unwrap_err();

                assert_eq!(
                    violation_messages(&err),
                    vec![
                        "Currency name is required",
                        "Number of decimal places is required"
                    ]
                );
                assert_eq!(repo.count().await.unwrap(), 0);
            }

            #[tokio::test]
            async fn test_create_duplicate_code() {
                let repo = currencies().await;
                repo.create(usd()).await.unwrap();

                let mut duplicate = eur();
                duplicate.code = Some("USD".to_string());
                let err = repo.create(duplicate).await.unwrap_err();

                match err {
                    CatalogError::Entity(EntityError::UniquenessViolation {
                        constraint,
                        value,
                        ..
                    }) => {
                        assert_eq!(constraint, "uk_currency_code");
                        assert_eq!(value, "USD");
                    }
                    other => panic!("expected UniquenessViolation, got {other:?}"),
                }
                assert_eq!(repo.count().await.unwrap(), 1);
            }

            #[tokio::test]
            async fn test_create_ignores_candidate_identity() {
                let repo = currencies().await;
                let mut candidate = usd();
                candidate.audit.id = Some(4242);
                candidate.audit.version = Some(9);

                let created = repo.create(candidate).await.unwrap();

                assert_ne!(created.id(), Some(4242));
                assert_eq!(created.version(), Some(0));
            }

            // ==================================================================
            // Read
            // ==================================================================

            #[tokio::test]
            async fn test_find_by_id_round_trip() {
                let repo = currencies().await;
                let created = repo.create(usd()).await.unwrap();

                let found = repo
                    .find_by_id(created.id().unwrap())
                    .await
                    .unwrap()
                    .expect("created currency should be found");

                assert_eq!(found, created);
            }

            #[tokio::test]
            async fn test_find_by_id_missing() {
                let repo = currencies().await;
                assert!(repo.find_by_id(987_654).await.unwrap().is_none());
                assert!(!repo.exists_by_id(987_654).await.unwrap());
            }

            #[tokio::test]
            async fn test_find_all_by_id_subset() {
                let repo = currencies().await;
                let a = repo.create(usd()).await.unwrap().id().unwrap();
                let b = repo.create(eur()).await.unwrap().id().unwrap();

                let mut found: Vec<i64> = repo
                    .find_all_by_id(&[a, b, 987_654])
                    .await
                    .unwrap()
                    .iter()
                    .filter_map(|c| c.id())
                    .collect();
                found.sort();

                let mut expected = vec![a, b];
                expected.sort();
                assert_eq!(found, expected);
                assert!(repo.find_all_by_id(&[]).await.unwrap().is_empty());
            }

            #[tokio::test]
            async fn test_pagination_newest_first() {
                let repo = currencies().await;
                for i in 0..25 {
                    repo.create(numbered_currency(i)).await.unwrap();
                }

                let first = repo.find_all(&PageRequest::default()).await.unwrap();
                assert_eq!(first.content.len(), 20);
                assert_eq!(first.page.size, 20);
                assert_eq!(first.page.number, 0);
                assert_eq!(first.page.total_elements, 25);
                assert_eq!(first.page.total_pages, 2);

                let ids: Vec<i64> = first.content.iter().filter_map(|c| c.id()).collect();
                assert!(ids.windows(2).all(|w| w[0] > w[1]), "ids must be descending");
                assert_eq!(first.content[0].code.as_deref(), Some("C24"));

                let second = repo.find_all(&PageRequest::of(1)).await.unwrap();
                assert_eq!(second.content.len(), 5);
                assert_eq!(second.content[4].code.as_deref(), Some("C00"));

                let beyond = repo.find_all(&PageRequest::of(5)).await.unwrap();
                assert!(beyond.content.is_empty());
                assert_eq!(beyond.page.total_elements, 25);
            }

            #[tokio::test]
            async fn test_pagination_ascending() {
                let repo = currencies().await;
                for i in 0..5 {
                    repo.create(numbered_currency(i)).await.unwrap();
                }

                let page = repo
                    .find_all(&PageRequest::new(0, 3, SortDirection::Asc))
                    .await
                    .unwrap();

                let codes: Vec<&str> = page
                    .content
                    .iter()
                    .filter_map(|c| c.code.as_deref())
                    .collect();
                assert_eq!(codes, vec!["C00", "C01", "C02"]);
                assert_eq!(page.page.total_pages, 2);
            }

            #[tokio::test]
            async fn test_pagination_far_past_the_end() {
                let repo = currencies().await;
                for i in 0..3 {
                    repo.create(numbered_currency(i)).await.unwrap();
                }

                // offset overflows usize
                let page = repo
                    .find_all(&PageRequest::new(usize::MAX / 2, 20, SortDirection::Desc))
                    .await
                    .unwrap();
                assert!(page.content.is_empty());
                assert_eq!(page.page.total_elements, 3);
                assert_eq!(page.page.number, usize::MAX / 2);

                // offset fits usize but not BIGINT
                let page = repo
                    .find_all(&PageRequest::new(500_000_000_000_000_000, 20, SortDirection::Asc))
                    .await
                    .unwrap();
                assert!(page.content.is_empty());
                assert_eq!(page.page.total_pages, 1);
            }

            // ==================================================================
            // Update
            // ==================================================================

            #[tokio::test]
            async fn test_update_in_place() {
                let repo = currencies().await;
                let created = repo.create(usd()).await.unwrap();

                let mut changed = created.clone();
                changed.name = Some("British Pound".to_string());
                changed.code = Some("GBP".to_string());
                changed.symbol = Some("£".to_string());
                let updated = repo.update(changed).await.unwrap();

                assert_eq!(updated.id(), created.id());
                assert_eq!(updated.version(), Some(1));
                assert_eq!(updated.code.as_deref(), Some("GBP"));
                assert_eq!(updated.audit().created_date, created.audit().created_date);
                assert_eq!(updated.audit().created_by, created.audit().created_by);
                assert!(updated.audit().last_modified_date >= created.audit().last_modified_date);

                let stored = repo.find_by_id(created.id().unwrap()).await.unwrap().unwrap();
                assert_eq!(stored.code.as_deref(), Some("GBP"));
                assert_eq!(stored.version(), Some(1));
                assert_eq!(repo.count().await.unwrap(), 1);
            }

            #[tokio::test]
            async fn test_update_resupplied_fields_unchanged() {
                let repo = currencies().await;
                let pound = repo
                    .create(Currency::new("British Pound", "GBP", Some("£".to_string()), 2))
                    .await
                    .unwrap();

                let mut sterling = pound.clone();
                sterling.name = Some("British Pound Sterling".to_string());
                sterling.symbol = Some("GBP".to_string());
                repo.update(sterling).await.unwrap();

                let stored = repo.find_by_id(pound.id().unwrap()).await.unwrap().unwrap();
                assert_eq!(stored.name.as_deref(), Some("British Pound Sterling"));
                assert_eq!(stored.symbol.as_deref(), Some("GBP"));
                assert_eq!(stored.code.as_deref(), Some("GBP"));
                assert_eq!(stored.decimal_places, Some(2));
                assert_eq!(stored.version(), Some(1));
            }

            #[tokio::test]
            async fn test_update_stale_version() {
                let repo = currencies().await;
                let created = repo.create(usd()).await.unwrap();

                let mut first = created.clone();
                first.name = Some("Dollar".to_string());
                repo.update(first).await.unwrap();

                let mut stale = created.clone();
                stale.name = Some("Greenback".to_string());
                let err = repo.update(stale).await.unwrap_err();

                assert!(matches!(
                    err,
                    CatalogError::Entity(EntityError::VersionConflict { expected: 0, .. })
                ));
                let stored = repo.find_by_id(created.id().unwrap()).await.unwrap().unwrap();
                assert_eq!(stored.name.as_deref(), Some("Dollar"));
                assert_eq!(stored.version(), Some(1));
            }

            #[tokio::test]
            async fn test_update_unknown_id() {
                let repo = currencies().await;
                let mut ghost = usd();
                ghost.audit.id = Some(987_654);
                ghost.audit.version = Some(0);

                let err = repo.update(ghost).await.unwrap_err();
                assert!(matches!(
                    err,
                    CatalogError::Entity(EntityError::NotFound { id: 987_654, .. })
                ));
            }

            #[tokio::test]
            async fn test_update_transient() {
                let repo = currencies().await;
                let err = repo.update(usd()).await.unwrap_err();
                assert!(matches!(err, CatalogError::Entity(EntityError::Transient { .. })));
            }

            #[tokio::test]
            async fn test_update_to_taken_code() {
                let repo = currencies().await;
                repo.create(usd()).await.unwrap();
                let euro = repo.create(eur()).await.unwrap();

                let mut clash = euro.clone();
                clash.code = Some("USD".to_string());
                let err = repo.update(clash).await.unwrap_err();

                assert!(matches!(
                    err,
                    CatalogError::Entity(EntityError::UniquenessViolation { .. })
                ));
                let stored = repo.find_by_id(euro.id().unwrap()).await.unwrap().unwrap();
                assert_eq!(stored.code.as_deref(), Some("EUR"));
            }

            #[tokio::test]
            async fn test_update_invalid() {
                let repo = currencies().await;
                let created = repo.create(usd()).await.unwrap();

                let mut invalid = created.clone();
                invalid.symbol = Some("DOLLARS".to_string());
                let err = repo.update(invalid).await.unwrap_err();

                assert_eq!(
                    violation_messages(&err),
                    vec!["Currency symbol must be less than 5 characters"]
                );
                let stored = repo.find_by_id(created.id().unwrap()).await.unwrap().unwrap();
                assert_eq!(stored, created);
            }

            // ==================================================================
            // Delete / count
            // ==================================================================

            #[tokio::test]
            async fn test_delete_then_exists() {
                let repo = currencies().await;
                let created = repo.create(usd()).await.unwrap();
                let id = created.id().unwrap();
                assert!(repo.exists_by_id(id).await.unwrap());

                repo.delete(&created).await.unwrap();

                assert!(!repo.exists_by_id(id).await.unwrap());
                assert!(repo.find_by_id(id).await.unwrap().is_none());
            }

            #[tokio::test]
            async fn test_delete_unknown_id() {
                let repo = currencies().await;
                let err = repo.delete_by_id(987_654).await.unwrap_err();
                assert!(matches!(err, CatalogError::Entity(EntityError::NotFound { .. })));
            }

            #[tokio::test]
            async fn test_count_and_delete_all() {
                let repo = currencies().await;
                assert_eq!(repo.count().await.unwrap(), 0);

                repo.create(usd()).await.unwrap();
                repo.create(eur()).await.unwrap();
                assert_eq!(repo.count().await.unwrap(), 2);

                repo.delete_all().await.unwrap();
                assert_eq!(repo.count().await.unwrap(), 0);

                // codes are free again
                repo.create(usd()).await.unwrap();
            }

            // ==================================================================
            // Products
            // ==================================================================

            #[tokio::test]
            async fn test_product_round_trip() {
                let repo = products().await;
                let created = repo.create(laptop()).await.unwrap();

                assert!(created.active);
                assert_eq!(created.version(), Some(0));
                assert_eq!(created.weight, Some(1250.0));

                let found = repo.find_by_id(created.id().unwrap()).await.unwrap().unwrap();
                assert_eq!(found, created);
            }

            #[tokio::test]
            async fn test_product_duplicate_barcode() {
                let repo = products().await;
                repo.create(laptop()).await.unwrap();

                let err = repo
                    .create(Product::new("Other laptop", "4006381333931"))
                    .await
                    .unwrap_err();

                match err {
                    CatalogError::Entity(EntityError::UniquenessViolation {
                        constraint, ..
                    }) => assert_eq!(constraint, "uk_product_barcode"),
                    other => panic!("expected UniquenessViolation, got {other:?}"),
                }
            }

            #[tokio::test]
            async fn test_product_reports_every_violation() {
                let repo = products().await;
                let candidate = Product {
                    sku: Some("S".repeat(51)),
                    ..Product::default()
                };

                let err = repo.create(candidate).await.unwrap_err();
                assert_eq!(
                    violation_messages(&err),
                    vec![
                        "Product name is required",
                        "Product barcode is required",
                        "Product SKU must be less than 50 characters"
                    ]
                );
            }

            #[tokio::test]
            async fn test_product_length_limits() {
                let repo = products().await;
                let at_limit = Product {
                    description: Some("d".repeat(1000)),
                    brand: Some("b".repeat(100)),
                    category: Some("c".repeat(100)),
                    sku: Some("s".repeat(50)),
                    dimensions: Some("x".repeat(50)),
                    ..Product::new("n".repeat(255), "9".repeat(50))
                };
                let created = repo.create(at_limit).await.unwrap();
                assert_eq!(created.brand.as_deref().map(str::len), Some(100));
                assert_eq!(created.dimensions.as_deref().map(str::len), Some(50));

                let past_limit = Product {
                    description: Some("d".repeat(1001)),
                    brand: Some("b".repeat(101)),
                    category: Some("c".repeat(101)),
                    dimensions: Some("x".repeat(51)),
                    ..Product::new("Laptop", "4006381333931")
                };
                let err = repo.create(past_limit).await.unwrap_err();
                assert_eq!(
                    violation_messages(&err),
                    vec![
                        "Product description must be less than 1000 characters",
                        "Product brand must be less than 100 characters",
                        "Product category must be less than 100 characters",
                        "Product dimensions must be less than 50 characters"
                    ]
                );
                assert_eq!(repo.count().await.unwrap(), 1);
            }

            #[tokio::test]
            async fn test_validator_interop_agrees_with_repository() {
                use validator::Validate;

                let repo = currencies().await;
                let candidate = Currency::new("x".repeat(101), "EURO", None, -1);

                let errors = candidate.validate().unwrap_err();
                let mut interop_fields: Vec<String> =
                    errors.field_errors().keys().map(|k| k.to_string()).collect();
                interop_fields.sort_unstable();

                let err = repo.create(candidate).await.unwrap_err();
                let mut rejected_fields: Vec<String> =
                    err.violations().iter().map(|v| v.field.to_string()).collect();
                rejected_fields.dedup();
                rejected_fields.sort_unstable();

                assert_eq!(interop_fields, rejected_fields);
                assert_eq!(interop_fields, vec!["code", "decimalPlaces", "name"]);
                assert!(usd().validate().is_ok());
            }

            // ==================================================================
            // Concurrency
            // ==================================================================

            #[tokio::test]
            async fn test_concurrent_creates() {
                let repo = currencies().await;

                let handles: Vec<_> = (0..10)
                    .map(|i| {
                        let repo = repo.clone();
                        tokio::spawn(async move { repo.create(numbered_currency(i)).await })
                    })
                    .collect();

                let mut ids = Vec::new();
                for handle in handles {
                    ids.push(handle.await.unwrap().unwrap().id().unwrap());
                }
                ids.sort();
                ids.dedup();

                assert_eq!(ids.len(), 10);
                assert_eq!(repo.count().await.unwrap(), 10);
            }
        }
    };
}

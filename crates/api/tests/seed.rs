//! Tests for the catalog seeding path.

mod common;

use assert_matches::assert_matches;
use common::MemoryStorage;
use nexaura_api::seed::{apply, validate_catalog, Catalog, SeedReport};
use nexaura_core::schema::EntityKind;
use nexaura_db::models::{validate_insertable, Insertable};
use nexaura_db::storage::Storage;
use serde_json::json;

fn catalog() -> Catalog {
    serde_json::from_value(json!({
        "products": [
            { "name": "Aloe Gel", "description": "Soothing gel", "price": "299.00", "category": "Personal Care" },
            { "name": "Tulsi Drops", "description": "Holy basil", "price": 19.99, "category": "Herbal" },
        ],
        "policies": [
            { "title": "Privacy Policy", "slug": "privacy-policy", "content": "..." },
            { "title": "Refund Policy", "slug": "refund-policy", "content": "..." },
        ],
    }))
    .unwrap()
}

#[test]
fn bundled_catalog_is_valid() {
    let text = include_str!("../../../db/seed/catalog.json");
    let catalog: Catalog = serde_json::from_str(text).unwrap();
    let items = validate_catalog(&catalog).unwrap();
    assert_eq!(items.len(), catalog.products.len() + catalog.policies.len());
}

#[test]
fn invalid_entry_is_located() {
    let mut catalog = catalog();
    catalog.policies[1]["slug"] = json!("");

    let err = validate_catalog(&catalog).unwrap_err();
    assert_eq!(err.section, "policies");
    assert_eq!(err.index, 1);
    assert_eq!(err.source.field(), Some("slug"));
}

#[test]
fn products_come_before_policies() {
    let items = validate_catalog(&catalog()).unwrap();
    assert_matches!(items[0], Insertable::Product(_));
    assert_matches!(items[3], Insertable::Policy(_));
}

#[tokio::test]
async fn apply_inserts_everything_into_empty_store() {
    let storage = MemoryStorage::new();
    let items = validate_catalog(&catalog()).unwrap();

    let report = apply(&storage, &items).await.unwrap();
    assert_eq!(
        report,
        SeedReport {
            products_created: 2,
            products_skipped: 0,
            policies_created: 2,
            policies_skipped: 0,
        }
    );

    let products = storage.list_products().await.unwrap();
    assert_eq!(products[1].price.to_string(), "19.99");
}

#[tokio::test]
async fn second_run_skips_existing_rows() {
    let storage = MemoryStorage::new();
    let items = validate_catalog(&catalog()).unwrap();
    apply(&storage, &items).await.unwrap();

    let report = apply(&storage, &items).await.unwrap();
    assert_eq!(report.products_created, 0);
    assert_eq!(report.products_skipped, 2);
    assert_eq!(report.policies_created, 0);
    assert_eq!(report.policies_skipped, 2);

    assert_eq!(storage.list_policies().await.unwrap().len(), 2);
    assert_eq!(storage.list_products().await.unwrap().len(), 2);
}

#[tokio::test]
async fn store_failure_aborts_the_run() {
    let storage = MemoryStorage::offline();
    let items = validate_catalog(&catalog()).unwrap();
    assert!(apply(&storage, &items).await.is_err());
}

#[tokio::test]
async fn contact_messages_are_rejected_before_any_write() {
    let storage = MemoryStorage::new();
    let mut items = validate_catalog(&catalog()).unwrap();
    items.push(
        validate_insertable(
            EntityKind::ContactMessage,
            &json!({ "name": "Asha", "email": "asha@example.com", "message": "Hello" }),
        )
        .unwrap(),
    );

    let err = apply(&storage, &items).await.unwrap_err();
    assert_eq!(err.field(), Some("ContactMessage"));

    assert_eq!(storage.contact_message_count(), 0);
    assert!(storage.list_products().await.unwrap().is_empty());
    assert!(storage.list_policies().await.unwrap().is_empty());
}

//! Administrative insert path: load products and policies from a catalog.
//!
//! A catalog is a JSON document:
//!
//! ```json
//! { "products": [ { "name": ..., "price": "19.99", ... } ],
//!   "policies": [ { "title": ..., "slug": ..., "content": ... } ] }
//! ```
//!
//! Every entry is validated with the same insertable rules as the HTTP
//! layer before anything is written.

use nexaura_core::error::CoreError;
use nexaura_core::schema::EntityKind;
use nexaura_db::models::{validate_insertable, Insertable};
use nexaura_db::storage::Storage;
use serde::Deserialize;
use serde_json::Value;

/// Raw catalog as read from disk.
#[derive(Debug, Default, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub products: Vec<Value>,
    #[serde(default)]
    pub policies: Vec<Value>,
}

/// A catalog entry failed validation.
#[derive(Debug, thiserror::Error)]
#[error("{section}[{index}]: {source}")]
pub struct CatalogError {
    pub section: &'static str,
    pub index: usize,
    #[source]
    pub source: CoreError,
}

/// Outcome of [`apply`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub products_created: usize,
    /// Products are skipped wholesale when the table already has rows.
    pub products_skipped: usize,
    pub policies_created: usize,
    /// Policies whose slug already existed.
    pub policies_skipped: usize,
}

/// Validate every entry, failing on the first invalid one.
pub fn validate_catalog(catalog: &Catalog) -> Result<Vec<Insertable>, CatalogError> {
    let sections = [
        ("products", EntityKind::Product, &catalog.products),
        ("policies", EntityKind::Policy, &catalog.policies),
    ];

    let mut items = Vec::with_capacity(catalog.products.len() + catalog.policies.len());
    for (section, kind, entries) in sections {
        for (index, raw) in entries.iter().enumerate() {
            let item = validate_insertable(kind, raw).map_err(|source| CatalogError {
                section,
                index,
                source,
            })?;
            items.push(item);
        }
    }
    Ok(items)
}

/// Insert validated items through the storage interface.
///
/// Products have no natural key, so they are only inserted into an empty
/// table. Duplicate policy slugs are reported and skipped; any other
/// failure aborts the run. Contact messages are not catalog data and are
/// rejected before anything is written.
pub async fn apply(storage: &dyn Storage, items: &[Insertable]) -> Result<SeedReport, CoreError> {
    let mut products = Vec::new();
    let mut policies = Vec::new();
    for item in items {
        match item {
            Insertable::Product(input) => products.push(input),
            Insertable::Policy(input) => policies.push(input),
            Insertable::ContactMessage(_) => {
                return Err(CoreError::validation(
                    item.kind().as_str(),
                    "is not catalog data",
                ));
            }
        }
    }

    let mut report = SeedReport::default();

    if storage.list_products().await?.is_empty() {
        for input in products {
            storage.create_product(input).await?;
            report.products_created += 1;
        }
    } else {
        tracing::debug!(count = products.len(), "Products already present, skipping");
        report.products_skipped = products.len();
    }

    for input in policies {
        match storage.create_policy(input).await {
            Ok(_) => report.policies_created += 1,
            Err(CoreError::Conflict(msg)) => {
                tracing::warn!(slug = %input.slug, reason = %msg, "Policy already exists, skipping");
                report.policies_skipped += 1;
            }
            Err(other) => return Err(other),
        }
    }

    Ok(report)
}

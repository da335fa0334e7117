//! Storage interface.
//!
//! [`Storage`] is the narrow, object-safe seam between request handlers and
//! the database. [`DatabaseStorage`] is the PostgreSQL implementation; it
//! delegates each call to one repository method and classifies driver
//! errors into [`CoreError`] variants.

use async_trait::async_trait;
use nexaura_core::error::CoreError;

use crate::models::contact_message::{ContactMessage, CreateContactMessage};
use crate::models::policy::{CreatePolicy, Policy};
use crate::models::product::{CreateProduct, Product};
use crate::repositories::{ContactMessageRepo, PolicyRepo, ProductRepo};
use crate::DbPool;

/// PostgreSQL SQLSTATE for `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";

/// Create and read operations over the three persisted entities.
///
/// Every method issues a single statement. Absence on a keyed lookup is
/// `Ok(None)`, never an error.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn create_contact_message(
        &self,
        input: &CreateContactMessage,
    ) -> Result<ContactMessage, CoreError>;

    async fn list_products(&self) -> Result<Vec<Product>, CoreError>;

    async fn create_product(&self, input: &CreateProduct) -> Result<Product, CoreError>;

    async fn list_policies(&self) -> Result<Vec<Policy>, CoreError>;

    async fn get_policy_by_slug(&self, slug: &str) -> Result<Option<Policy>, CoreError>;

    /// Fails with [`CoreError::Conflict`] when the slug already exists.
    async fn create_policy(&self, input: &CreatePolicy) -> Result<Policy, CoreError>;

    /// Whether the backing store is reachable.
    async fn health_check(&self) -> Result<(), CoreError>;
}

/// [`Storage`] backed by a PostgreSQL pool.
#[derive(Clone)]
pub struct DatabaseStorage {
    pool: DbPool,
}

impl DatabaseStorage {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Storage for DatabaseStorage {
    async fn create_contact_message(
        &self,
        input: &CreateContactMessage,
    ) -> Result<ContactMessage, CoreError> {
        let message = ContactMessageRepo::create(&self.pool, input)
            .await
            .map_err(classify_sqlx_error)?;
        tracing::debug!(id = message.id, "Contact message stored");
        Ok(message)
    }

    async fn list_products(&self) -> Result<Vec<Product>, CoreError> {
        ProductRepo::list(&self.pool)
            .await
            .map_err(classify_sqlx_error)
    }

    async fn create_product(&self, input: &CreateProduct) -> Result<Product, CoreError> {
        let product = ProductRepo::create(&self.pool, input)
            .await
            .map_err(classify_sqlx_error)?;
        tracing::debug!(id = product.id, name = %product.name, "Product created");
        Ok(product)
    }

    async fn list_policies(&self) -> Result<Vec<Policy>, CoreError> {
        PolicyRepo::list(&self.pool)
            .await
            .map_err(classify_sqlx_error)
    }

    async fn get_policy_by_slug(&self, slug: &str) -> Result<Option<Policy>, CoreError> {
        PolicyRepo::find_by_slug(&self.pool, slug)
            .await
            .map_err(classify_sqlx_error)
    }

    async fn create_policy(&self, input: &CreatePolicy) -> Result<Policy, CoreError> {
        let policy = PolicyRepo::create(&self.pool, input)
            .await
            .map_err(|err| match classify_sqlx_error(err) {
                CoreError::Conflict(_) => CoreError::Conflict(format!(
                    "A policy with slug '{}' already exists",
                    input.slug
                )),
                other => other,
            })?;
        tracing::debug!(id = policy.id, slug = %policy.slug, "Policy created");
        Ok(policy)
    }

    async fn health_check(&self) -> Result<(), CoreError> {
        crate::health_check(&self.pool)
            .await
            .map_err(classify_sqlx_error)
    }
}

/// Classify a sqlx error into a domain error.
///
/// - Unique constraint violations (SQLSTATE `23505`) map to `Conflict`.
/// - Everything else maps to `Internal`; the driver message is kept for
///   logging and is never shown to API callers.
pub fn classify_sqlx_error(err: sqlx::Error) -> CoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
            let constraint = db_err.constraint().unwrap_or("unknown");
            return CoreError::Conflict(format!(
                "Duplicate value violates unique constraint: {constraint}"
            ));
        }
    }
    CoreError::Internal(format!("Database error: {err}"))
}

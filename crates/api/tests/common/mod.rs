//! Shared helpers for HTTP-level integration tests.
//!
//! The app is driven in-process with `tower::ServiceExt::oneshot` against
//! an in-memory [`Storage`] double, so these tests need no database.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use nexaura_api::config::{DatabaseConfig, ServerConfig};
use nexaura_api::router::build_app_router;
use nexaura_api::state::AppState;
use nexaura_core::error::CoreError;
use nexaura_db::models::contact_message::{ContactMessage, CreateContactMessage};
use nexaura_db::models::policy::{CreatePolicy, Policy};
use nexaura_db::models::product::{CreateProduct, Product};
use nexaura_db::storage::Storage;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// In-memory storage
// ---------------------------------------------------------------------------

#[derive(Default)]
struct Tables {
    next_id: i64,
    contact_messages: Vec<ContactMessage>,
    products: Vec<Product>,
    policies: Vec<Policy>,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// [`Storage`] over vectors behind a mutex. Mirrors the database's
/// id assignment, default timestamps and slug uniqueness.
#[derive(Default)]
pub struct MemoryStorage {
    tables: Mutex<Tables>,
    offline: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every call fails like an unreachable database.
    pub fn offline() -> Self {
        Self {
            offline: true,
            ..Self::default()
        }
    }

    pub fn contact_message_count(&self) -> usize {
        self.tables.lock().unwrap().contact_messages.len()
    }

    fn check_online(&self) -> Result<(), CoreError> {
        if self.offline {
            Err(CoreError::Internal(
                "Database error: connection refused".to_string(),
            ))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn create_contact_message(
        &self,
        input: &CreateContactMessage,
    ) -> Result<ContactMessage, CoreError> {
        self.check_online()?;
        let mut tables = self.tables.lock().unwrap();
        let message = ContactMessage {
            id: tables.next_id(),
            name: input.name.clone(),
            email: input.email.clone(),
            phone: input.phone.clone(),
            subject: input.subject.clone(),
            message: input.message.clone(),
            created_at: chrono::Utc::now(),
        };
        tables.contact_messages.push(message.clone());
        Ok(message)
    }

    async fn list_products(&self) -> Result<Vec<Product>, CoreError> {
        self.check_online()?;
        Ok(self.tables.lock().unwrap().products.clone())
    }

    async fn create_product(&self, input: &CreateProduct) -> Result<Product, CoreError> {
        self.check_online()?;
        let mut tables = self.tables.lock().unwrap();
        let product = Product {
            id: tables.next_id(),
            name: input.name.clone(),
            description: input.description.clone(),
            price: input.price,
            image_url: input.image_url.clone(),
            category: input.category.clone(),
        };
        tables.products.push(product.clone());
        Ok(product)
    }

    async fn list_policies(&self) -> Result<Vec<Policy>, CoreError> {
        self.check_online()?;
        Ok(self.tables.lock().unwrap().policies.clone())
    }

    async fn get_policy_by_slug(&self, slug: &str) -> Result<Option<Policy>, CoreError> {
        self.check_online()?;
        let tables = self.tables.lock().unwrap();
        Ok(tables.policies.iter().find(|p| p.slug == slug).cloned())
    }

    async fn create_policy(&self, input: &CreatePolicy) -> Result<Policy, CoreError> {
        self.check_online()?;
        let mut tables = self.tables.lock().unwrap();
        if tables.policies.iter().any(|p| p.slug == input.slug) {
            return Err(CoreError::Conflict(format!(
                "A policy with slug '{}' already exists",
                input.slug
            )));
        }
        let policy = Policy {
            id: tables.next_id(),
            title: input.title.clone(),
            slug: input.slug.clone(),
            content: input.content.clone(),
            updated_at: chrono::Utc::now(),
        };
        tables.policies.push(policy.clone());
        Ok(policy)
    }

    async fn health_check(&self) -> Result<(), CoreError> {
        self.check_online()
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: [127, 0, 0, 1].into(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".parse().unwrap()],
        request_timeout_secs: 30,
        database: DatabaseConfig {
            url: "postgres://unused".to_string(),
            max_connections: 1,
        },
    }
}

/// Build the full application router (same middleware stack as
/// production) over the given storage.
pub fn build_test_app(storage: Arc<MemoryStorage>) -> Router {
    build_app_router(AppState::new(storage, test_config()))
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn post_raw(app: Router, uri: &str, content_type: &str, body: &str) -> Response {
    app.oneshot(
        Request::post(uri)
            .header("content-type", content_type)
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert the status and return the parsed body.
pub async fn expect_json(response: Response, status: StatusCode) -> serde_json::Value {
    assert_eq!(response.status(), status);
    body_json(response).await
}

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /health`.
///
/// `status` is `"degraded"` whenever the store does not answer. The
/// endpoint replies 200 either way.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
}

impl HealthReport {
    fn new(db_healthy: bool) -> Self {
        Self {
            status: if db_healthy { "ok" } else { "degraded" },
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
        }
    }
}

async fn report(State(state): State<AppState>) -> Json<HealthReport> {
    let result = state.storage.health_check().await;
    if let Err(err) = &result {
        tracing::warn!(error = %err, "Store health check failed");
    }
    Json(HealthReport::new(result.is_ok()))
}

/// `/health`, mounted beside the `/api` tree.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(report))
}

//! Handlers for the `/api/policies` resource.

use axum::extract::{Path, State};
use axum::Json;
use nexaura_core::error::CoreError;
use nexaura_db::models::policy::Policy;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/policies
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Policy>>> {
    let policies = state.storage.list_policies().await?;
    Ok(Json(policies))
}

/// GET /api/policies/{slug}
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<Policy>> {
    let policy = state
        .storage
        .get_policy_by_slug(&slug)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Policy",
                key: slug.clone(),
            })
        })?;
    Ok(Json(policy))
}

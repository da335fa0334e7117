//! Handlers for the `/api/products` resource.

use axum::extract::State;
use axum::Json;
use nexaura_db::models::product::Product;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/products
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    let products = state.storage.list_products().await?;
    Ok(Json(products))
}

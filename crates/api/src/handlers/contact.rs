//! Handlers for the `/api/contact` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use nexaura_core::contract::CONTACT_SUBMIT;
use nexaura_db::models::contact_message::{ContactMessage, CreateContactMessage};
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/contact
///
/// The body is validated in full before the store is touched.
pub async fn submit(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<(StatusCode, Json<ContactMessage>)> {
    let Json(raw) = body.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let input = CONTACT_SUBMIT
        .validate_body(&raw)
        .and_then(CreateContactMessage::from_fields)?;

    let message = state.storage.create_contact_message(&input).await?;
    tracing::info!(id = message.id, "Contact form submitted");
    Ok((StatusCode::CREATED, Json(message)))
}

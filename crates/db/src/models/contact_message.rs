//! Contact message model and insert DTO.

use nexaura_core::error::CoreError;
use nexaura_core::schema::{validate_fields, ValidatedFields, CONTACT_MESSAGE_RULES};
use nexaura_core::types::{DbId, Timestamp};
use serde::Serialize;
use serde_json::Value;
use sqlx::FromRow;

/// A row from the `contact_messages` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
    pub created_at: Timestamp,
}

/// Insertable projection of [`ContactMessage`]. `id` and `created_at` are
/// assigned by the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateContactMessage {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
}

impl CreateContactMessage {
    /// Validate a raw JSON body and build the DTO.
    pub fn from_raw(raw: &Value) -> Result<Self, CoreError> {
        validate_fields(CONTACT_MESSAGE_RULES, raw).and_then(Self::from_fields)
    }

    /// Build from already-validated fields.
    pub fn from_fields(mut fields: ValidatedFields) -> Result<Self, CoreError> {
        Ok(Self {
            name: fields.required_text("name")?,
            email: fields.required_text("email")?,
            phone: fields.optional_text("phone"),
            subject: fields.optional_text("subject"),
            message: fields.required_text("message")?,
        })
    }
}

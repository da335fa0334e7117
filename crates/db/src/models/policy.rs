//! Policy model and insert DTO.

use nexaura_core::error::CoreError;
use nexaura_core::schema::{validate_fields, ValidatedFields, POLICY_RULES};
use nexaura_core::types::{DbId, Timestamp};
use serde::Serialize;
use serde_json::Value;
use sqlx::FromRow;

/// A row from the `policies` table. `slug` is unique.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Policy {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub updated_at: Timestamp,
}

/// Insertable projection of [`Policy`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePolicy {
    pub title: String,
    pub slug: String,
    pub content: String,
}

impl CreatePolicy {
    pub fn from_raw(raw: &Value) -> Result<Self, CoreError> {
        validate_fields(POLICY_RULES, raw).and_then(Self::from_fields)
    }

    pub fn from_fields(mut fields: ValidatedFields) -> Result<Self, CoreError> {
        Ok(Self {
            title: fields.required_text("title")?,
            slug: fields.required_text("slug")?,
            content: fields.required_text("content")?,
        })
    }
}

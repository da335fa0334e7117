//! Product model and insert DTO.

use nexaura_core::error::CoreError;
use nexaura_core::schema::{validate_fields, ValidatedFields, PRODUCT_RULES};
use nexaura_core::types::DbId;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;
use sqlx::FromRow;

/// A row from the `products` table.
///
/// `price` is `NUMERIC(10, 2)` and serializes as a decimal string
/// (`"19.99"`).
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub image_url: Option<String>,
    pub category: String,
}

/// Insertable projection of [`Product`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProduct {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub image_url: Option<String>,
    pub category: String,
}

impl CreateProduct {
    pub fn from_raw(raw: &Value) -> Result<Self, CoreError> {
        validate_fields(PRODUCT_RULES, raw).and_then(Self::from_fields)
    }

    pub fn from_fields(mut fields: ValidatedFields) -> Result<Self, CoreError> {
        Ok(Self {
            name: fields.required_text("name")?,
            description: fields.required_text("description")?,
            price: fields.decimal("price")?,
            image_url: fields.optional_text("imageUrl"),
            category: fields.required_text("category")?,
        })
    }
}

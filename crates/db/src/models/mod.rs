//! Domain model structs and insert DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Create*` insert DTO holding only caller-supplied fields, built from
//!   raw JSON through the rule tables in `nexaura_core::schema`

pub mod contact_message;
pub mod policy;
pub mod product;

use nexaura_core::error::CoreError;
use nexaura_core::schema::{validate_fields, EntityKind};
use serde_json::Value;

use self::contact_message::CreateContactMessage;
use self::policy::CreatePolicy;
use self::product::CreateProduct;

/// A validated insertable projection of any entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Insertable {
    ContactMessage(CreateContactMessage),
    Product(CreateProduct),
    Policy(CreatePolicy),
}

impl Insertable {
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::ContactMessage(_) => EntityKind::ContactMessage,
            Self::Product(_) => EntityKind::Product,
            Self::Policy(_) => EntityKind::Policy,
        }
    }
}

/// Validate `raw` against the insertable rules of `kind`.
pub fn validate_insertable(kind: EntityKind, raw: &Value) -> Result<Insertable, CoreError> {
    let fields = validate_fields(kind.rules(), raw)?;
    match kind {
        EntityKind::ContactMessage => {
            CreateContactMessage::from_fields(fields).map(Insertable::ContactMessage)
        }
        EntityKind::Product => CreateProduct::from_fields(fields).map(Insertable::Product),
        EntityKind::Policy => CreatePolicy::from_fields(fields).map(Insertable::Policy),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use rust_decimal::Decimal;
    use serde_json::json;

    #[test]
    fn contact_message_projection() {
        let raw = json!({
            "name": "Ravi",
            "email": "ravi@example.in",
            "phone": "+91 98765 43210",
            "subject": "Business plan",
            "message": "Please call me back",
        });
        let insertable = validate_insertable(EntityKind::ContactMessage, &raw).unwrap();
        assert_eq!(insertable.kind(), EntityKind::ContactMessage);
        assert_matches!(insertable, Insertable::ContactMessage(m) => {
            assert_eq!(m.phone.as_deref(), Some("+91 98765 43210"));
            assert_eq!(m.subject.as_deref(), Some("Business plan"));
        });
    }

    #[test]
    fn product_projection_keeps_exact_price() {
        let raw = json!({
            "name": "Tulsi Drops",
            "description": "Herbal immunity drops",
            "price": "19.99",
            "imageUrl": "/images/tulsi.png",
            "category": "herbal",
        });
        let insertable = validate_insertable(EntityKind::Product, &raw).unwrap();
        assert_matches!(insertable, Insertable::Product(p) => {
            assert_eq!(p.price, Decimal::new(1999, 2));
            assert_eq!(p.image_url.as_deref(), Some("/images/tulsi.png"));
        });
    }

    #[test]
    fn policy_projection_rejects_id() {
        let raw = json!({ "id": 1, "title": "Privacy Policy", "slug": "privacy-policy", "content": "..." });
        let err = validate_insertable(EntityKind::Policy, &raw).unwrap_err();
        assert_eq!(err.field(), Some("id"));
    }

    #[test]
    fn from_raw_matches_validate_insertable() {
        let raw = json!({ "title": "Refund Policy", "slug": "refund-policy", "content": "..." });
        let direct = CreatePolicy::from_raw(&raw).unwrap();
        assert_eq!(
            validate_insertable(EntityKind::Policy, &raw).unwrap(),
            Insertable::Policy(direct)
        );
    }
}

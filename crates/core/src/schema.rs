//! Entity schema rules and the insertable-field validation engine.
//!
//! Each persisted entity has a rule table listing the fields a caller may
//! supply on create. [`validate_fields`] checks a raw JSON body against a
//! table and returns the normalized values; the database crate turns those
//! into its typed insert DTOs.

use std::collections::HashMap;
use std::fmt;

use rust_decimal::Decimal;
use serde_json::{Map, Value};
use validator::ValidateEmail;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Field name reported when the body itself is not a JSON object.
pub const BODY_FIELD: &str = "body";

/// Fields the store assigns. Input carrying any of them is rejected.
pub const SYSTEM_FIELDS: &[&str] = &["id", "createdAt", "created_at", "updatedAt", "updated_at"];

/// `products.price` is `NUMERIC(10, 2)`.
pub const PRICE_PRECISION: u32 = 10;
pub const PRICE_SCALE: u32 = 2;

// ---------------------------------------------------------------------------
// Rule tables
// ---------------------------------------------------------------------------

/// The kind of check applied to one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Must be present and a non-blank string.
    RequiredText,
    /// Absent, `null` or a string. Blank strings count as absent.
    OptionalText,
    /// Required text that must also parse as an email address.
    Email,
    /// A string or JSON number that fits `NUMERIC(precision, scale)`.
    Decimal { precision: u32, scale: u32 },
}

/// One row of a rule table: a wire field name and its check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub name: &'static str,
    pub kind: FieldKind,
}

const fn rule(name: &'static str, kind: FieldKind) -> FieldRule {
    FieldRule { name, kind }
}

/// Insertable fields of a contact message, also the input of
/// `POST /api/contact`.
pub const CONTACT_MESSAGE_RULES: &[FieldRule] = &[
    rule("name", FieldKind::RequiredText),
    rule("email", FieldKind::Email),
    rule("phone", FieldKind::OptionalText),
    rule("subject", FieldKind::OptionalText),
    rule("message", FieldKind::RequiredText),
];

/// Insertable fields of a product.
pub const PRODUCT_RULES: &[FieldRule] = &[
    rule("name", FieldKind::RequiredText),
    rule("description", FieldKind::RequiredText),
    rule(
        "price",
        FieldKind::Decimal {
            precision: PRICE_PRECISION,
            scale: PRICE_SCALE,
        },
    ),
    rule("imageUrl", FieldKind::OptionalText),
    rule("category", FieldKind::RequiredText),
];

/// Insertable fields of a policy.
pub const POLICY_RULES: &[FieldRule] = &[
    rule("title", FieldKind::RequiredText),
    rule("slug", FieldKind::RequiredText),
    rule("content", FieldKind::RequiredText),
];

/// The three persisted entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    ContactMessage,
    Product,
    Policy,
}

impl EntityKind {
    /// Human-readable entity name used in errors and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ContactMessage => "ContactMessage",
            Self::Product => "Product",
            Self::Policy => "Policy",
        }
    }

    /// Backing table name.
    pub fn table(&self) -> &'static str {
        match self {
            Self::ContactMessage => "contact_messages",
            Self::Product => "products",
            Self::Policy => "policies",
        }
    }

    /// Rule table for the insertable projection.
    pub fn rules(&self) -> &'static [FieldRule] {
        match self {
            Self::ContactMessage => CONTACT_MESSAGE_RULES,
            Self::Product => PRODUCT_RULES,
            Self::Policy => POLICY_RULES,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Validated values
// ---------------------------------------------------------------------------

/// A single field value after its rule passed.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Absent,
    Text(String),
    Decimal(Decimal),
}

/// Normalized field values keyed by wire name.
///
/// Accessors take the value out so DTO constructors can move strings
/// without cloning.
#[derive(Debug, Default)]
pub struct ValidatedFields {
    values: HashMap<&'static str, FieldValue>,
}

impl ValidatedFields {
    /// Take a required text field.
    pub fn required_text(&mut self, name: &'static str) -> Result<String, CoreError> {
        match self.values.remove(name) {
            Some(FieldValue::Text(s)) => Ok(s),
            _ => Err(CoreError::validation(name, "is required")),
        }
    }

    /// Take an optional text field.
    pub fn optional_text(&mut self, name: &'static str) -> Option<String> {
        match self.values.remove(name) {
            Some(FieldValue::Text(s)) => Some(s),
            _ => None,
        }
    }

    /// Take a decimal field.
    pub fn decimal(&mut self, name: &'static str) -> Result<Decimal, CoreError> {
        match self.values.remove(name) {
            Some(FieldValue::Decimal(d)) => Ok(d),
            _ => Err(CoreError::validation(name, "is required")),
        }
    }
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Validate a raw JSON body against a rule table.
///
/// Server-assigned fields are rejected, unknown fields are ignored, and the
/// first failing rule (in table order) is reported.
pub fn validate_fields(rules: &[FieldRule], raw: &Value) -> Result<ValidatedFields, CoreError> {
    let obj = raw
        .as_object()
        .ok_or_else(|| CoreError::validation(BODY_FIELD, "must be a JSON object"))?;

    reject_system_fields(obj)?;

    let mut values = HashMap::with_capacity(rules.len());
    for rule in rules {
        let value = check_field(rule, obj.get(rule.name))?;
        values.insert(rule.name, value);
    }
    Ok(ValidatedFields { values })
}

fn reject_system_fields(obj: &Map<String, Value>) -> Result<(), CoreError> {
    match SYSTEM_FIELDS.iter().find(|f| obj.contains_key(**f)) {
        Some(field) => Err(CoreError::validation(
            *field,
            "is assigned by the server and cannot be supplied",
        )),
        None => Ok(()),
    }
}

/// Apply a single rule to the (possibly missing) raw value.
pub fn check_field(rule: &FieldRule, value: Option<&Value>) -> Result<FieldValue, CoreError> {
    match rule.kind {
        FieldKind::RequiredText => required_text(rule.name, value).map(FieldValue::Text),
        FieldKind::OptionalText => optional_text(rule.name, value),
        FieldKind::Email => {
            let text = required_text(rule.name, value)?;
            if text.validate_email() {
                Ok(FieldValue::Text(text))
            } else {
                Err(CoreError::validation(rule.name, "must be a valid email address"))
            }
        }
        FieldKind::Decimal { precision, scale } => {
            let text = match value {
                None | Some(Value::Null) => {
                    return Err(CoreError::validation(rule.name, "is required"))
                }
                Some(Value::String(s)) => s.trim().to_string(),
                // serde_json prints the shortest round-tripping form, so
                // `19.99` arrives here as "19.99" without float drift.
                Some(Value::Number(n)) => n.to_string(),
                Some(_) => {
                    return Err(CoreError::validation(rule.name, "must be a decimal number"))
                }
            };
            parse_decimal(rule.name, &text, precision, scale).map(FieldValue::Decimal)
        }
    }
}

fn required_text(field: &str, value: Option<&Value>) -> Result<String, CoreError> {
    match value {
        None | Some(Value::Null) => Err(CoreError::validation(field, "is required")),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Err(CoreError::validation(field, "must not be empty"))
            } else {
                Ok(trimmed.to_string())
            }
        }
        Some(_) => Err(CoreError::validation(field, "must be a string")),
    }
}

fn optional_text(field: &str, value: Option<&Value>) -> Result<FieldValue, CoreError> {
    match value {
        None | Some(Value::Null) => Ok(FieldValue::Absent),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Ok(FieldValue::Absent)
            } else {
                Ok(FieldValue::Text(trimmed.to_string()))
            }
        }
        Some(_) => Err(CoreError::validation(field, "must be a string")),
    }
}

/// Parse `text` as an exact decimal fitting `NUMERIC(precision, scale)`.
///
/// The result is rescaled to exactly `scale` fractional digits, so
/// `"19.9"` becomes `19.90`.
pub fn parse_decimal(
    field: &str,
    text: &str,
    precision: u32,
    scale: u32,
) -> Result<Decimal, CoreError> {
    if text.is_empty() {
        return Err(CoreError::validation(field, "must not be empty"));
    }

    let mut value = Decimal::from_str_exact(text)
        .map_err(|_| CoreError::validation(field, "must be a decimal number"))?
        .normalize();

    if value.scale() > scale {
        return Err(CoreError::validation(
            field,
            format!("must have at most {scale} decimal places"),
        ));
    }

    let max_integer_digits = precision.saturating_sub(scale) as usize;
    let integer_digits = value.abs().trunc().to_string().len();
    if integer_digits > max_integer_digits {
        return Err(CoreError::validation(
            field,
            format!("must have at most {max_integer_digits} digits before the decimal point"),
        ));
    }

    value.rescale(scale);
    Ok(value)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

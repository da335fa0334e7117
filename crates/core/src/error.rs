/// Domain errors shared by every layer.
///
/// The API crate maps each variant to an HTTP status; storage code
/// classifies driver errors into `Conflict` or `Internal` before they
/// leave the database crate.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A keyed lookup found no row.
    #[error("Entity not found: {entity} with key {key}")]
    NotFound { entity: &'static str, key: String },

    /// Caller input failed a field rule.
    #[error("Validation failed on '{field}': {message}")]
    Validation { field: String, message: String },

    /// A uniqueness or integrity rule in the store was violated.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The store is unreachable or a statement failed for infrastructural
    /// reasons. The message is for logs only.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for a field-level validation failure.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// The offending field name, if this is a validation error.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_validation() {
        let err = CoreError::validation("name", "must not be empty");
        assert_eq!(
            err.to_string(),
            "Validation failed on 'name': must not be empty"
        );
        assert_eq!(err.field(), Some("name"));
    }

    #[test]
    fn display_not_found() {
        let err = CoreError::NotFound {
            entity: "Policy",
            key: "refund-policy".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Entity not found: Policy with key refund-policy"
        );
        assert_eq!(err.field(), None);
    }
}

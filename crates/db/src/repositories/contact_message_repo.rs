//! Repository for the `contact_messages` table.

use sqlx::PgPool;

use crate::models::contact_message::{ContactMessage, CreateContactMessage};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, phone, subject, message, created_at";

/// Insert-only access to contact form submissions.
pub struct ContactMessageRepo;

impl ContactMessageRepo {
    /// Insert a new message, returning the stored row with its assigned
    /// `id` and `created_at`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateContactMessage,
    ) -> Result<ContactMessage, sqlx::Error> {
        let query = format!(
            "INSERT INTO contact_messages (name, email, phone, subject, message)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContactMessage>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.subject)
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }
}

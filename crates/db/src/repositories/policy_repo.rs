//! Repository for the `policies` table.

use sqlx::PgPool;

use crate::models::policy::{CreatePolicy, Policy};

const COLUMNS: &str = "id, title, slug, content, updated_at";

/// Provides create, list and slug lookup for policies.
pub struct PolicyRepo;

impl PolicyRepo {
    /// Insert a new policy, returning the created row.
    ///
    /// Fails with a unique violation on `uq_policies_slug` if the slug is
    /// taken.
    pub async fn create(pool: &PgPool, input: &CreatePolicy) -> Result<Policy, sqlx::Error> {
        let query = format!(
            "INSERT INTO policies (title, slug, content)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Policy>(&query)
            .bind(&input.title)
            .bind(&input.slug)
            .bind(&input.content)
            .fetch_one(pool)
            .await
    }

    /// List all policies in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Policy>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM policies ORDER BY id");
        sqlx::query_as::<_, Policy>(&query).fetch_all(pool).await
    }

    /// Find a policy by its unique slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Policy>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM policies WHERE slug = $1");
        sqlx::query_as::<_, Policy>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }
}

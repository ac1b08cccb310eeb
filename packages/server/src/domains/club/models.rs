use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;

/// Club model - SQL persistence layer
#[derive(sqlx::FromRow, Debug, Clone, Serialize)]
pub struct Club {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub category: String,
    pub glyph: String,
    pub created_at: DateTime<Utc>,
}

impl Club {
    /// Find club by ID
    pub async fn find_by_id(id: i64, pool: &PgPool) -> sqlx::Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM clubs WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all clubs, newest first
    pub async fn list(pool: &PgPool) -> sqlx::Result<Vec<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM clubs ORDER BY created_at DESC")
            .fetch_all(pool)
            .await
    }

    /// Insert a new club
    pub async fn insert(
        name: &str,
        description: &str,
        category: &str,
        glyph: &str,
        pool: &PgPool,
    ) -> sqlx::Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO clubs (name, description, category, glyph)
             VALUES ($1, $2, $3, $4)
             RETURNING *",
        )
        .bind(name)
        .bind(description)
        .bind(category)
        .bind(glyph)
        .fetch_one(pool)
        .await
    }
}

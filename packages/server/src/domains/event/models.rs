use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;

/// Event model - SQL persistence layer
#[derive(sqlx::FromRow, Debug, Clone, Serialize)]
pub struct Event {
    pub id: i64,
    pub club_id: i64,
    pub title: String,
    pub description: String,
    pub date_time: DateTime<Utc>,
    pub location: String,
    pub created_by: i64,
    pub created_at: DateTime<Utc>,
}

impl Event {
    /// Find event by ID
    pub async fn find_by_id(id: i64, pool: &PgPool) -> sqlx::Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM events WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new event
    pub async fn insert(
        club_id: i64,
        title: &str,
        description: &str,
        date_time: DateTime<Utc>,
        location: &str,
        created_by: i64,
        pool: &PgPool,
    ) -> sqlx::Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO events (club_id, title, description, date_time, location, created_by)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING *",
        )
        .bind(club_id)
        .bind(title)
        .bind(description)
        .bind(date_time)
        .bind(location)
        .bind(created_by)
        .fetch_one(pool)
        .await
    }

    /// List all events, soonest first
    pub async fn list(pool: &PgPool) -> sqlx::Result<Vec<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM events ORDER BY date_time ASC")
            .fetch_all(pool)
            .await
    }
}

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;

/// RSVP model - SQL persistence layer
///
/// Row presence means attending; absence means not attending. The unique
/// constraint on (event_id, user_id) keeps the relation binary under
/// concurrent toggles.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Rsvp {
    pub id: i64,
    pub event_id: i64,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Attendee of an event, joined against the users table for display
#[derive(sqlx::FromRow, Debug, Clone, Serialize)]
pub struct Attendee {
    pub user_id: i64,
    pub name: String,
}

impl Rsvp {
    /// Insert an attending row
    pub async fn insert(event_id: i64, user_id: i64, pool: &PgPool) -> sqlx::Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO rsvps (event_id, user_id) VALUES ($1, $2) RETURNING *",
        )
        .bind(event_id)
        .bind(user_id)
        .fetch_one(pool)
        .await
    }

    /// Delete the attending row for a (event, user) pair, reporting whether
    /// one existed
    pub async fn delete_pair(event_id: i64, user_id: i64, pool: &PgPool) -> sqlx::Result<bool> {
        let result = sqlx::query("DELETE FROM rsvps WHERE event_id = $1 AND user_id = $2")
            .bind(event_id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List attendees of an event, earliest RSVP first
    pub async fn attendees(event_id: i64, pool: &PgPool) -> sqlx::Result<Vec<Attendee>> {
        sqlx::query_as::<_, Attendee>(
            "SELECT u.id AS user_id, u.name
             FROM rsvps r
             JOIN users u ON u.id = r.user_id
             WHERE r.event_id = $1
             ORDER BY r.created_at ASC",
        )
        .bind(event_id)
        .fetch_all(pool)
        .await
    }
}

use chrono::{DateTime, Utc};
use sqlx::PgPool;

/// User model - SQL persistence layer
///
/// The password digest never leaves this layer; API responses go through
/// [`crate::domains::user::UserData`].
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password_digest: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Find user by ID
    pub async fn find_by_id(id: i64, pool: &PgPool) -> sqlx::Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find user by email (login lookup)
    pub async fn find_by_email(email: &str, pool: &PgPool) -> sqlx::Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new user. A duplicate email violates the unique constraint
    /// and surfaces as a Conflict at the handler boundary.
    pub async fn insert(
        name: &str,
        email: &str,
        password_digest: &str,
        pool: &PgPool,
    ) -> sqlx::Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO users (name, email, password_digest)
             VALUES ($1, $2, $3)
             RETURNING *",
        )
        .bind(name)
        .bind(email)
        .bind(password_digest)
        .fetch_one(pool)
        .await
    }

    /// Update profile fields. A `None` digest keeps the existing password.
    pub async fn update_profile(
        id: i64,
        name: &str,
        email: &str,
        password_digest: Option<&str>,
        pool: &PgPool,
    ) -> sqlx::Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            "UPDATE users
             SET name = $2,
                 email = $3,
                 password_digest = COALESCE($4, password_digest)
             WHERE id = $1
             RETURNING *",
        )
        .bind(id)
        .bind(name)
        .bind(email)
        .bind(password_digest)
        .fetch_optional(pool)
        .await
    }
}

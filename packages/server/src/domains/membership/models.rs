use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;

/// Membership status: a join request starts pending and an officer decision
/// makes it active (or deletes the row).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MembershipStatus {
    Pending,
    Active,
}

impl MembershipStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MembershipStatus::Pending => "pending",
            MembershipStatus::Active => "active",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(MembershipStatus::Pending),
            "active" => Some(MembershipStatus::Active),
            _ => None,
        }
    }
}

/// Membership role. Officer is a privileged sub-state of an active
/// membership; an officer row always has active status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MembershipRole {
    Member,
    Officer,
}

impl MembershipRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MembershipRole::Member => "member",
            MembershipRole::Officer => "officer",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "member" => Some(MembershipRole::Member),
            "officer" => Some(MembershipRole::Officer),
            _ => None,
        }
    }
}

/// Membership (roster) model - SQL persistence layer
///
/// Rows are keyed by (club_id, member_name) with the display name
/// denormalized into the roster. The unique constraint on that pair is the
/// authoritative guard against duplicate join requests.
#[derive(sqlx::FromRow, Debug, Clone, Serialize)]
pub struct Membership {
    pub id: i64,
    pub club_id: i64,
    pub member_name: String,
    pub status: String,
    pub role: String,
    pub joined_at: DateTime<Utc>,
}

impl Membership {
    /// Find roster entry by ID
    pub async fn find_by_id(id: i64, pool: &PgPool) -> sqlx::Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM memberships WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the roster entry for a (club, member name) pair
    pub async fn find_pair(
        club_id: i64,
        member_name: &str,
        pool: &PgPool,
    ) -> sqlx::Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM memberships WHERE club_id = $1 AND member_name = $2",
        )
        .bind(club_id)
        .bind(member_name)
        .fetch_optional(pool)
        .await
    }

    /// List the roster for a club, pending entries first
    pub async fn list_for_club(club_id: i64, pool: &PgPool) -> sqlx::Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM memberships
             WHERE club_id = $1
             ORDER BY status DESC, joined_at ASC",
        )
        .bind(club_id)
        .fetch_all(pool)
        .await
    }

    /// Insert a roster entry. A duplicate (club_id, member_name) pair
    /// violates the unique constraint and surfaces as a Conflict.
    pub async fn insert(
        club_id: i64,
        member_name: &str,
        status: MembershipStatus,
        role: MembershipRole,
        pool: &PgPool,
    ) -> sqlx::Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO memberships (club_id, member_name, status, role)
             VALUES ($1, $2, $3, $4)
             RETURNING *",
        )
        .bind(club_id)
        .bind(member_name)
        .bind(status.as_str())
        .bind(role.as_str())
        .fetch_one(pool)
        .await
    }

    /// Apply an officer decision to a roster entry
    pub async fn update_decision(
        id: i64,
        status: MembershipStatus,
        role: MembershipRole,
        pool: &PgPool,
    ) -> sqlx::Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            "UPDATE memberships SET status = $2, role = $3 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status.as_str())
        .bind(role.as_str())
        .fetch_optional(pool)
        .await
    }

    /// Delete a roster entry (rejection or removal)
    pub async fn delete(id: i64, pool: &PgPool) -> sqlx::Result<u64> {
        let result = sqlx::query("DELETE FROM memberships WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Whether a member name holds an active officer role in a club
    pub async fn is_officer(club_id: i64, member_name: &str, pool: &PgPool) -> sqlx::Result<bool> {
        let row: Option<(i64,)> = sqlx::query_as(
            "SELECT id FROM memberships
             WHERE club_id = $1
               AND member_name = $2
               AND role = 'officer'
               AND status = 'active'",
        )
        .bind(club_id)
        .bind(member_name)
        .fetch_optional(pool)
        .await?;
        Ok(row.is_some())
    }

    /// Rewrite every roster entry recorded under an old display name.
    ///
    /// Roster rows carry the name, not a user id, so a profile rename has to
    /// cascade here. Two distinct users sharing a display name would cascade
    /// incorrectly — a known hazard of the legacy data model, kept for
    /// behavioral compatibility.
    pub async fn rename_member(
        old_name: &str,
        new_name: &str,
        pool: &PgPool,
    ) -> sqlx::Result<u64> {
        let result = sqlx::query("UPDATE memberships SET member_name = $2 WHERE member_name = $1")
            .bind(old_name)
            .bind(new_name)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}

//! Test fixtures for creating test data.
//!
//! These fixtures use the model methods and domain actions directly. The
//! database is shared across tests, so callers pass per-test names/emails.

use anyhow::Result;
use sqlx::PgPool;

use hub_core::common::auth::digest_password;
use hub_core::domains::club::{actions::create_club, Club};
use hub_core::domains::event::Event;
use hub_core::domains::user::User;

/// Create a test user with a fixed password
pub async fn create_test_user(name: &str, email: &str, pool: &PgPool) -> Result<User> {
    let user = User::insert(name, email, &digest_password("hunter2"), pool).await?;
    Ok(user)
}

/// Create a test club; the creator is seated as an active officer
pub async fn create_test_club(creator: &User, name: &str, pool: &PgPool) -> Result<Club> {
    let club = create_club(creator, name, "A test club", "general", "*", pool).await?;
    Ok(club)
}

/// Create a test event in a club, one week out
pub async fn create_test_event(
    club: &Club,
    creator: &User,
    title: &str,
    pool: &PgPool,
) -> Result<Event> {
    let event = Event::insert(
        club.id,
        title,
        "A test event",
        chrono::Utc::now() + chrono::Duration::days(7),
        "Community hall",
        creator.id,
        pool,
    )
    .await?;
    Ok(event)
}

//! Club creation action

use sqlx::PgPool;
use tracing::{error, info};

use crate::common::ApiError;
use crate::domains::club::Club;
use crate::domains::membership::{Membership, MembershipRole, MembershipStatus};
use crate::domains::user::User;

/// Create a club and seat its creator as an active officer.
///
/// The two inserts are independent sequential writes, matching the legacy
/// partial-failure policy: if the officer insert fails after the club insert
/// succeeded, the club stays (without an officer), the failure is logged,
/// and the caller sees a 500.
pub async fn create_club(
    creator: &User,
    name: &str,
    description: &str,
    category: &str,
    glyph: &str,
    pool: &PgPool,
) -> Result<Club, ApiError> {
    let club = Club::insert(name, description, category, glyph, pool).await?;

    match Membership::insert(
        club.id,
        &creator.name,
        MembershipStatus::Active,
        MembershipRole::Officer,
        pool,
    )
    .await
    {
        Ok(officer) => {
            info!(
                club_id = club.id,
                membership_id = officer.id,
                "Club created with founding officer"
            );
            Ok(club)
        }
        Err(e) => {
            error!(club_id = club.id, error = %e, "Officer insert failed after club insert");
            Err(ApiError::Upstream(anyhow::anyhow!(
                "club {} created but officer seat failed",
                club.id
            )))
        }
    }
}

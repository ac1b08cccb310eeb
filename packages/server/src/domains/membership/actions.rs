//! Roster state-machine actions
//!
//! Every Membership row write goes through one of these functions. Each takes
//! the acting user explicitly; nothing here reads an ambient "current user".

use sqlx::PgPool;
use tracing::{debug, info};

use crate::common::ApiError;
use crate::domains::club::Club;
use crate::domains::membership::models::{Membership, MembershipRole, MembershipStatus};
use crate::domains::user::User;

/// Request to join a club, creating a pending roster entry.
///
/// Allowed only when no roster entry exists for the (club, member name) pair.
/// The pre-check gives a clear Conflict message; two requests racing past it
/// are still caught by the unique constraint on insert.
pub async fn request_join(
    actor: &User,
    club_id: i64,
    member_name: Option<String>,
    pool: &PgPool,
) -> Result<Membership, ApiError> {
    let member_name = member_name.unwrap_or_else(|| actor.name.clone());

    if Club::find_by_id(club_id, pool).await?.is_none() {
        return Err(ApiError::NotFound(format!("Club {} not found", club_id)));
    }

    if let Some(existing) = Membership::find_pair(club_id, &member_name, pool).await? {
        debug!(
            membership_id = existing.id,
            status = %existing.status,
            "Duplicate join request"
        );
        return Err(ApiError::Conflict(format!(
            "{} already has a roster entry in club {}",
            member_name, club_id
        )));
    }

    let membership = Membership::insert(
        club_id,
        &member_name,
        MembershipStatus::Pending,
        MembershipRole::Member,
        pool,
    )
    .await?;

    info!(
        membership_id = membership.id,
        club_id, "Join request created"
    );
    Ok(membership)
}

/// Apply an officer decision to a pending (or active) roster entry.
///
/// Only an active officer of the same club may decide. Approving a pending
/// entry makes it active; the decision chooses the resulting role directly,
/// so a pending request can be approved straight into officer. Only the
/// active status is accepted here — rejection and removal are [`remove`].
pub async fn decide(
    actor: &User,
    membership_id: i64,
    new_status: MembershipStatus,
    new_role: MembershipRole,
    pool: &PgPool,
) -> Result<Membership, ApiError> {
    if new_status != MembershipStatus::Active {
        return Err(ApiError::Validation(
            "mem_status must be 'active'; reject by deleting the roster entry".to_string(),
        ));
    }

    let membership = Membership::find_by_id(membership_id, pool)
        .await?
        .ok_or_else(|| {
            ApiError::NotFound(format!("Roster entry {} not found", membership_id))
        })?;

    require_officer(actor, membership.club_id, pool).await?;

    let updated = Membership::update_decision(membership_id, new_status, new_role, pool)
        .await?
        .ok_or_else(|| {
            ApiError::NotFound(format!("Roster entry {} not found", membership_id))
        })?;

    info!(
        membership_id,
        club_id = updated.club_id,
        role = %updated.role,
        "Membership approved"
    );
    Ok(updated)
}

/// Reject a pending request or remove an existing member.
///
/// Shares the decide authorization rule: any active officer of the club may
/// delete any roster entry there, including active members. That is an
/// explicit capability, not an oversight.
pub async fn remove(actor: &User, membership_id: i64, pool: &PgPool) -> Result<(), ApiError> {
    let membership = Membership::find_by_id(membership_id, pool)
        .await?
        .ok_or_else(|| {
            ApiError::NotFound(format!("Roster entry {} not found", membership_id))
        })?;

    require_officer(actor, membership.club_id, pool).await?;

    Membership::delete(membership_id, pool).await?;

    info!(
        membership_id,
        club_id = membership.club_id,
        "Membership removed"
    );
    Ok(())
}

/// Cascade a display-name change into the roster.
///
/// Roster entries store the member name, not the user id, so every entry
/// recorded under the old name is rewritten. Returns the number of entries
/// touched.
pub async fn rename_cascade(
    old_name: &str,
    new_name: &str,
    pool: &PgPool,
) -> Result<u64, ApiError> {
    let updated = Membership::rename_member(old_name, new_name, pool).await?;
    if updated > 0 {
        info!(old_name, new_name, updated, "Roster names cascaded");
    }
    Ok(updated)
}

/// Authorization gate shared by decide and remove: the actor must hold an
/// active officer role in the club, checked against the denormalized name.
async fn require_officer(actor: &User, club_id: i64, pool: &PgPool) -> Result<(), ApiError> {
    if Membership::is_officer(club_id, &actor.name, pool).await? {
        Ok(())
    } else {
        Err(ApiError::Forbidden(format!(
            "officer role in club {} required",
            club_id
        )))
    }
}

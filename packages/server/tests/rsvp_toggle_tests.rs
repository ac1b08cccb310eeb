//! Integration tests for the RSVP toggle, against live Postgres.
//!
//! The toggle is its own inverse: for a fixed (user, event) pair the
//! outcomes alternate Added, Removed, Added, and the attendee list
//! reflects each flip.

mod common;

use common::{create_test_club, create_test_event, create_test_user, TestHarness};
use hub_core::common::ApiError;
use hub_core::domains::rsvp::{actions, Rsvp, ToggleOutcome};
use test_context::test_context;

#[test_context(TestHarness)]
#[tokio::test]
async fn test_toggle_alternates_added_removed_added(ctx: &TestHarness) {
    let host = create_test_user("Hana Host", "hana.togglelaw@example.com", &ctx.db_pool)
        .await
        .unwrap();
    let club = create_test_club(&host, "Toggle Law Club", &ctx.db_pool)
        .await
        .unwrap();
    let event = create_test_event(&club, &host, "Toggle Night", &ctx.db_pool)
        .await
        .unwrap();
    let guest = create_test_user("Gus Guest", "gus.togglelaw@example.com", &ctx.db_pool)
        .await
        .unwrap();

    let first = actions::toggle(&guest, event.id, &ctx.db_pool).await.unwrap();
    assert_eq!(first, ToggleOutcome::Added);

    let second = actions::toggle(&guest, event.id, &ctx.db_pool).await.unwrap();
    assert_eq!(second, ToggleOutcome::Removed);

    let third = actions::toggle(&guest, event.id, &ctx.db_pool).await.unwrap();
    assert_eq!(third, ToggleOutcome::Added);

    // One attendee row after an odd number of flips, not three.
    let attendees = Rsvp::attendees(event.id, &ctx.db_pool).await.unwrap();
    let guest_rows: Vec<_> = attendees
        .iter()
        .filter(|a| a.user_id == guest.id)
        .collect();
    assert_eq!(guest_rows.len(), 1);
    assert_eq!(guest_rows[0].name, guest.name);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_toggles_are_independent_per_user(ctx: &TestHarness) {
    let host = create_test_user("Hugo Host", "hugo.pairlaw@example.com", &ctx.db_pool)
        .await
        .unwrap();
    let club = create_test_club(&host, "Pair Law Club", &ctx.db_pool)
        .await
        .unwrap();
    let event = create_test_event(&club, &host, "Pair Night", &ctx.db_pool)
        .await
        .unwrap();
    let other = create_test_user("Olga Other", "olga.pairlaw@example.com", &ctx.db_pool)
        .await
        .unwrap();

    assert_eq!(
        actions::toggle(&host, event.id, &ctx.db_pool).await.unwrap(),
        ToggleOutcome::Added
    );
    assert_eq!(
        actions::toggle(&other, event.id, &ctx.db_pool).await.unwrap(),
        ToggleOutcome::Added
    );

    // Removing one user's RSVP leaves the other's in place.
    assert_eq!(
        actions::toggle(&host, event.id, &ctx.db_pool).await.unwrap(),
        ToggleOutcome::Removed
    );

    let attendees = Rsvp::attendees(event.id, &ctx.db_pool).await.unwrap();
    assert!(attendees.iter().any(|a| a.user_id == other.id));
    assert!(!attendees.iter().any(|a| a.user_id == host.id));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_toggle_on_unknown_event_is_not_found(ctx: &TestHarness) {
    let user = create_test_user("Nia Nobody", "nia.noeventlaw@example.com", &ctx.db_pool)
        .await
        .unwrap();

    let outcome = actions::toggle(&user, 999_999_999, &ctx.db_pool).await;
    assert!(matches!(outcome, Err(ApiError::NotFound(_))));
}

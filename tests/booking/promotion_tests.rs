use booking_axum_api::booking::domain::model::{
    enums::{
        booking_log_action::BookingLogAction, booking_status::BookingStatus,
        requester_role::RequesterRole,
    },
    value_objects::{event_id::EventId, tenant_id::TenantId},
};
use booking_axum_api::booking::domain::services::booking_command_service::BookingCommandService;

use crate::support::{
    ATTENDEE_1_ID, ATTENDEE_2_ID, ATTENDEE_3_ID, EVENT_1_ID, TENANT_A_ID, cancel_command,
    create_booking_harness, event_with_capacity, submit_command, uuid_of,
};

fn event_key() -> (EventId, TenantId) {
    (
        EventId::new(EVENT_1_ID.to_string()).expect("valid event id"),
        TenantId::new(TENANT_A_ID.to_string()).expect("valid tenant id"),
    )
}

#[tokio::test]
async fn promotes_the_longest_waiting_booking_first() {
    let harness = create_booking_harness();
    harness
        .event_repository
        .add_event(event_with_capacity(EVENT_1_ID, TENANT_A_ID, 1));

    let confirmed = harness
        .service
        .handle_submit_request(submit_command(EVENT_1_ID, ATTENDEE_1_ID))
        .await
        .expect("submit should succeed");
    let older_waitlisted = harness
        .service
        .handle_submit_request(submit_command(EVENT_1_ID, ATTENDEE_2_ID))
        .await
        .expect("submit should succeed");
    let newer_waitlisted = harness
        .service
        .handle_submit_request(submit_command(EVENT_1_ID, ATTENDEE_3_ID))
        .await
        .expect("submit should succeed");

    harness
        .service
        .handle_cancel(cancel_command(
            confirmed.id(),
            ATTENDEE_1_ID,
            RequesterRole::Attendee,
        ))
        .await
        .expect("cancel should succeed");

    assert_eq!(
        harness.booking_repository.status_of(&older_waitlisted.id()),
        Some(BookingStatus::Confirmed)
    );
    assert_eq!(
        harness.booking_repository.status_of(&newer_waitlisted.id()),
        Some(BookingStatus::Waitlisted)
    );
}

#[tokio::test]
async fn promote_is_a_noop_without_waitlisted_bookings() {
    let harness = create_booking_harness();
    harness
        .event_repository
        .add_event(event_with_capacity(EVENT_1_ID, TENANT_A_ID, 2));
    let (event_id, tenant_id) = event_key();

    harness
        .service
        .handle_submit_request(submit_command(EVENT_1_ID, ATTENDEE_1_ID))
        .await
        .expect("submit should succeed");

    let promoted = harness
        .service
        .handle_promote_if_possible(&event_id, &tenant_id)
        .await
        .expect("promotion should be a safe no-op");

    assert!(promoted.is_none());
}

#[tokio::test]
async fn promote_is_a_noop_while_event_is_still_full() {
    let harness = create_booking_harness();
    harness
        .event_repository
        .add_event(event_with_capacity(EVENT_1_ID, TENANT_A_ID, 1));
    let (event_id, tenant_id) = event_key();

    harness
        .service
        .handle_submit_request(submit_command(EVENT_1_ID, ATTENDEE_1_ID))
        .await
        .expect("submit should succeed");
    let waitlisted = harness
        .service
        .handle_submit_request(submit_command(EVENT_1_ID, ATTENDEE_2_ID))
        .await
        .expect("submit should succeed");

    let promoted = harness
        .service
        .handle_promote_if_possible(&event_id, &tenant_id)
        .await
        .expect("promotion should be a safe no-op");

    assert!(promoted.is_none());
    assert_eq!(
        harness.booking_repository.status_of(&waitlisted.id()),
        Some(BookingStatus::Waitlisted)
    );
}

#[tokio::test]
async fn promote_retried_after_success_is_a_noop() {
    let harness = create_booking_harness();
    harness
        .event_repository
        .add_event(event_with_capacity(EVENT_1_ID, TENANT_A_ID, 1));
    let (event_id, tenant_id) = event_key();

    let confirmed = harness
        .service
        .handle_submit_request(submit_command(EVENT_1_ID, ATTENDEE_1_ID))
        .await
        .expect("submit should succeed");
    harness
        .service
        .handle_submit_request(submit_command(EVENT_1_ID, ATTENDEE_2_ID))
        .await
        .expect("submit should succeed");

    harness
        .service
        .handle_cancel(cancel_command(
            confirmed.id(),
            ATTENDEE_1_ID,
            RequesterRole::Attendee,
        ))
        .await
        .expect("cancel should succeed");

    // The cancellation already promoted; a retried invocation finds the
    // event full again.
    let retried = harness
        .service
        .handle_promote_if_possible(&event_id, &tenant_id)
        .await
        .expect("retried promotion should be a safe no-op");

    assert!(retried.is_none());

    let promotions = harness
        .log_repository
        .records()
        .into_iter()
        .filter(|r| r.action() == BookingLogAction::PromotedFromWaitlist)
        .count();
    assert_eq!(promotions, 1);
}

#[tokio::test]
async fn capacity_two_scenario_promotes_only_the_waitlisted_attendee() {
    let harness = create_booking_harness();
    harness
        .event_repository
        .add_event(event_with_capacity(EVENT_1_ID, TENANT_A_ID, 2));

    let a = harness
        .service
        .handle_submit_request(submit_command(EVENT_1_ID, ATTENDEE_1_ID))
        .await
        .expect("submit should succeed");
    let b = harness
        .service
        .handle_submit_request(submit_command(EVENT_1_ID, ATTENDEE_2_ID))
        .await
        .expect("submit should succeed");
    let c = harness
        .service
        .handle_submit_request(submit_command(EVENT_1_ID, ATTENDEE_3_ID))
        .await
        .expect("submit should succeed");

    assert_eq!(a.status(), BookingStatus::Confirmed);
    assert_eq!(b.status(), BookingStatus::Confirmed);
    assert_eq!(c.status(), BookingStatus::Waitlisted);

    harness
        .service
        .handle_cancel(cancel_command(
            b.id(),
            ATTENDEE_2_ID,
            RequesterRole::Attendee,
        ))
        .await
        .expect("cancel should succeed");

    assert_eq!(
        harness.booking_repository.status_of(&a.id()),
        Some(BookingStatus::Confirmed)
    );
    assert_eq!(
        harness.booking_repository.status_of(&b.id()),
        Some(BookingStatus::Canceled)
    );
    assert_eq!(
        harness.booking_repository.status_of(&c.id()),
        Some(BookingStatus::Confirmed)
    );
}

#[tokio::test]
async fn promotion_emits_its_log_entry_and_notification() {
    let harness = create_booking_harness();
    harness
        .event_repository
        .add_event(event_with_capacity(EVENT_1_ID, TENANT_A_ID, 1));

    let confirmed = harness
        .service
        .handle_submit_request(submit_command(EVENT_1_ID, ATTENDEE_1_ID))
        .await
        .expect("submit should succeed");
    let waitlisted = harness
        .service
        .handle_submit_request(submit_command(EVENT_1_ID, ATTENDEE_2_ID))
        .await
        .expect("submit should succeed");

    harness
        .service
        .handle_cancel(cancel_command(
            confirmed.id(),
            ATTENDEE_1_ID,
            RequesterRole::Attendee,
        ))
        .await
        .expect("cancel should succeed");

    assert_eq!(
        harness.log_repository.actions_for(waitlisted.id().value()),
        vec![
            BookingLogAction::RequestCreated,
            BookingLogAction::AutoWaitlisted,
            BookingLogAction::PromotedFromWaitlist
        ]
    );

    let notifications = harness
        .notification_facade
        .deliveries_for(uuid_of(ATTENDEE_2_ID));
    assert!(
        notifications
            .iter()
            .any(|d| d.kind.as_str() == "waitlist_promoted")
    );
}

#[tokio::test]
async fn confirmed_count_never_exceeds_capacity_through_mixed_operations() {
    let harness = create_booking_harness();
    harness
        .event_repository
        .add_event(event_with_capacity(EVENT_1_ID, TENANT_A_ID, 2));
    let (event_id, tenant_id) = event_key();

    let a = harness
        .service
        .handle_submit_request(submit_command(EVENT_1_ID, ATTENDEE_1_ID))
        .await
        .expect("submit should succeed");
    let b = harness
        .service
        .handle_submit_request(submit_command(EVENT_1_ID, ATTENDEE_2_ID))
        .await
        .expect("submit should succeed");
    harness
        .service
        .handle_submit_request(submit_command(EVENT_1_ID, ATTENDEE_3_ID))
        .await
        .expect("submit should succeed");

    use booking_axum_api::booking::infrastructure::persistence::repositories::booking_repository::BookingRepository;

    let confirmed = harness
        .booking_repository
        .count_by_status(&event_id, &tenant_id, BookingStatus::Confirmed)
        .await
        .expect("count");
    assert!(confirmed <= 2);

    harness
        .service
        .handle_cancel(cancel_command(a.id(), ATTENDEE_1_ID, RequesterRole::Attendee))
        .await
        .expect("cancel should succeed");
    let confirmed = harness
        .booking_repository
        .count_by_status(&event_id, &tenant_id, BookingStatus::Confirmed)
        .await
        .expect("count");
    assert!(confirmed <= 2);

    harness
        .service
        .handle_cancel(cancel_command(b.id(), ATTENDEE_2_ID, RequesterRole::Attendee))
        .await
        .expect("cancel should succeed");
    let confirmed = harness
        .booking_repository
        .count_by_status(&event_id, &tenant_id, BookingStatus::Confirmed)
        .await
        .expect("count");
    assert!(confirmed <= 2);
}

use booking_axum_api::booking::domain::model::enums::{
    booking_domain_error::BookingDomainError, booking_log_action::BookingLogAction,
    booking_status::BookingStatus, requester_role::RequesterRole,
};
use booking_axum_api::booking::domain::services::booking_command_service::BookingCommandService;

use crate::support::{
    ATTENDEE_1_ID, ATTENDEE_2_ID, ATTENDEE_3_ID, EVENT_1_ID, ORGANIZER_1_ID, TENANT_A_ID,
    TENANT_B_ID, cancel_command, cancel_command_in_tenant, create_booking_harness,
    event_with_capacity, missing_booking_cancel_command, submit_command, submit_command_in_tenant,
    uuid_of,
};

#[tokio::test]
async fn owner_cancels_their_confirmed_booking() {
    let harness = create_booking_harness();
    harness
        .event_repository
        .add_event(event_with_capacity(EVENT_1_ID, TENANT_A_ID, 2));

    let booking = harness
        .service
        .handle_submit_request(submit_command(EVENT_1_ID, ATTENDEE_1_ID))
        .await
        .expect("submit should succeed");

    let canceled = harness
        .service
        .handle_cancel(cancel_command(
            booking.id(),
            ATTENDEE_1_ID,
            RequesterRole::Attendee,
        ))
        .await
        .expect("cancel should succeed");

    assert_eq!(canceled.status(), BookingStatus::Canceled);
    assert_eq!(
        harness.booking_repository.status_of(&booking.id()),
        Some(BookingStatus::Canceled)
    );
}

#[tokio::test]
async fn attendee_cannot_cancel_someone_elses_booking() {
    let harness = create_booking_harness();
    harness
        .event_repository
        .add_event(event_with_capacity(EVENT_1_ID, TENANT_A_ID, 2));

    let booking = harness
        .service
        .handle_submit_request(submit_command(EVENT_1_ID, ATTENDEE_1_ID))
        .await
        .expect("submit should succeed");

    let result = harness
        .service
        .handle_cancel(cancel_command(
            booking.id(),
            ATTENDEE_2_ID,
            RequesterRole::Attendee,
        ))
        .await;

    assert!(matches!(result, Err(BookingDomainError::Forbidden)));
    assert_eq!(
        harness.booking_repository.status_of(&booking.id()),
        Some(BookingStatus::Confirmed)
    );
}

#[tokio::test]
async fn organizer_cancels_any_booking_in_their_tenant() {
    let harness = create_booking_harness();
    harness
        .event_repository
        .add_event(event_with_capacity(EVENT_1_ID, TENANT_A_ID, 2));

    let booking = harness
        .service
        .handle_submit_request(submit_command(EVENT_1_ID, ATTENDEE_1_ID))
        .await
        .expect("submit should succeed");

    let canceled = harness
        .service
        .handle_cancel(cancel_command(
            booking.id(),
            ORGANIZER_1_ID,
            RequesterRole::Organizer,
        ))
        .await
        .expect("organizer cancel should succeed");

    assert_eq!(canceled.status(), BookingStatus::Canceled);
}

#[tokio::test]
async fn cancel_twice_reports_already_canceled() {
    let harness = create_booking_harness();
    harness
        .event_repository
        .add_event(event_with_capacity(EVENT_1_ID, TENANT_A_ID, 2));

    let booking = harness
        .service
        .handle_submit_request(submit_command(EVENT_1_ID, ATTENDEE_1_ID))
        .await
        .expect("submit should succeed");

    harness
        .service
        .handle_cancel(cancel_command(
            booking.id(),
            ATTENDEE_1_ID,
            RequesterRole::Attendee,
        ))
        .await
        .expect("first cancel should succeed");

    let second = harness
        .service
        .handle_cancel(cancel_command(
            booking.id(),
            ATTENDEE_1_ID,
            RequesterRole::Attendee,
        ))
        .await;

    assert!(matches!(second, Err(BookingDomainError::AlreadyCanceled)));
}

#[tokio::test]
async fn cancel_missing_booking_reports_not_found() {
    let harness = create_booking_harness();

    let result = harness
        .service
        .handle_cancel(missing_booking_cancel_command())
        .await;

    assert!(matches!(result, Err(BookingDomainError::BookingNotFound)));
}

#[tokio::test]
async fn cancel_hides_foreign_tenant_booking() {
    let harness = create_booking_harness();
    harness
        .event_repository
        .add_event(event_with_capacity(EVENT_1_ID, TENANT_B_ID, 2));

    let booking = harness
        .service
        .handle_submit_request(submit_command_in_tenant(
            EVENT_1_ID,
            ATTENDEE_1_ID,
            TENANT_B_ID,
        ))
        .await
        .expect("submit should succeed");

    // Same booking id, requested under another tenant: looks absent.
    let result = harness
        .service
        .handle_cancel(cancel_command_in_tenant(
            booking.id(),
            ATTENDEE_1_ID,
            TENANT_A_ID,
            RequesterRole::Admin,
        ))
        .await;

    assert!(matches!(result, Err(BookingDomainError::BookingNotFound)));
    assert_eq!(
        harness.booking_repository.status_of(&booking.id()),
        Some(BookingStatus::Confirmed)
    );
}

#[tokio::test]
async fn cancel_of_confirmed_promotes_oldest_waitlisted() {
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
        harness.booking_repository.status_of(&waitlisted.id()),
        Some(BookingStatus::Confirmed)
    );

    let promoted_notifications = harness
        .notification_facade
        .deliveries_for(uuid_of(ATTENDEE_2_ID));
    assert!(
        promoted_notifications
            .iter()
            .any(|d| d.kind.as_str() == "waitlist_promoted")
    );
    assert!(
        harness
            .log_repository
            .actions_for(waitlisted.id().value())
            .contains(&BookingLogAction::PromotedFromWaitlist)
    );
}

#[tokio::test]
async fn cancel_of_waitlisted_does_not_promote() {
    let harness = create_booking_harness();
    harness
        .event_repository
        .add_event(event_with_capacity(EVENT_1_ID, TENANT_A_ID, 1));

    harness
        .service
        .handle_submit_request(submit_command(EVENT_1_ID, ATTENDEE_1_ID))
        .await
        .expect("submit should succeed");
    let second = harness
        .service
        .handle_submit_request(submit_command(EVENT_1_ID, ATTENDEE_2_ID))
        .await
        .expect("submit should succeed");
    let third = harness
        .service
        .handle_submit_request(submit_command(EVENT_1_ID, ATTENDEE_3_ID))
        .await
        .expect("submit should succeed");

    harness
        .service
        .handle_cancel(cancel_command(
            second.id(),
            ATTENDEE_2_ID,
            RequesterRole::Attendee,
        ))
        .await
        .expect("cancel should succeed");

    // No seat was vacated, so the remaining waitlisted booking stays.
    assert_eq!(
        harness.booking_repository.status_of(&third.id()),
        Some(BookingStatus::Waitlisted)
    );
}

#[tokio::test]
async fn canceled_log_entry_records_the_prior_status() {
    let harness = create_booking_harness();
    harness
        .event_repository
        .add_event(event_with_capacity(EVENT_1_ID, TENANT_A_ID, 2));

    let booking = harness
        .service
        .handle_submit_request(submit_command(EVENT_1_ID, ATTENDEE_1_ID))
        .await
        .expect("submit should succeed");
    harness
        .service
        .handle_cancel(cancel_command(
            booking.id(),
            ATTENDEE_1_ID,
            RequesterRole::Attendee,
        ))
        .await
        .expect("cancel should succeed");

    let canceled_entry = harness
        .log_repository
        .records()
        .into_iter()
        .find(|r| r.action() == BookingLogAction::Canceled)
        .expect("canceled log entry should exist");
    assert_eq!(canceled_entry.note(), "confirmed booking canceled.");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_double_cancel_has_exactly_one_winner() {
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

    let service_a = harness.service.clone();
    let service_b = harness.service.clone();
    let booking_id = confirmed.id();

    let (first, second) = tokio::join!(
        tokio::spawn(async move {
            service_a
                .handle_cancel(cancel_command(
                    booking_id,
                    ATTENDEE_1_ID,
                    RequesterRole::Attendee,
                ))
                .await
        }),
        tokio::spawn(async move {
            service_b
                .handle_cancel(cancel_command(
                    booking_id,
                    ATTENDEE_1_ID,
                    RequesterRole::Attendee,
                ))
                .await
        }),
    );

    let outcomes = [first.expect("task"), second.expect("task")];
    let successes = outcomes.iter().filter(|r| r.is_ok()).count();
    let already_canceled = outcomes
        .iter()
        .filter(|r| matches!(r, Err(BookingDomainError::AlreadyCanceled)))
        .count();

    assert_eq!(successes, 1);
    assert_eq!(already_canceled, 1);

    // The vacated seat was handed over exactly once.
    assert_eq!(
        harness.booking_repository.status_of(&waitlisted.id()),
        Some(BookingStatus::Confirmed)
    );
    let promotions = harness
        .log_repository
        .records()
        .into_iter()
        .filter(|r| r.action() == BookingLogAction::PromotedFromWaitlist)
        .count();
    assert_eq!(promotions, 1);
}

use booking_axum_api::booking::domain::model::enums::{
    booking_domain_error::BookingDomainError, booking_log_action::BookingLogAction,
    requester_role::RequesterRole,
};
use booking_axum_api::booking::domain::services::{
    booking_command_service::BookingCommandService, booking_query_service::BookingQueryService,
};

use crate::support::{
    ATTENDEE_1_ID, ATTENDEE_2_ID, ATTENDEE_3_ID, EVENT_1_ID, EVENT_2_ID, TENANT_A_ID,
    cancel_command, create_booking_harness, dashboard_query, event_with_capacity,
    my_bookings_query, past_event_with_capacity, submit_command, uuid_of,
};

#[tokio::test]
async fn my_bookings_returns_only_the_callers_bookings() {
    let harness = create_booking_harness();
    harness
        .event_repository
        .add_event(event_with_capacity(EVENT_1_ID, TENANT_A_ID, 5));

    harness
        .service
        .handle_submit_request(submit_command(EVENT_1_ID, ATTENDEE_1_ID))
        .await
        .expect("submit should succeed");
    harness
        .service
        .handle_submit_request(submit_command(EVENT_1_ID, ATTENDEE_2_ID))
        .await
        .expect("submit should succeed");

    let own = harness
        .query_service
        .handle_list_my_bookings(my_bookings_query(ATTENDEE_1_ID))
        .await
        .expect("query should succeed");

    assert_eq!(own.len(), 1);
    assert_eq!(own[0].user_id().value(), uuid_of(ATTENDEE_1_ID));
}

#[tokio::test]
async fn my_bookings_are_listed_newest_first() {
    let harness = create_booking_harness();
    harness
        .event_repository
        .add_event(event_with_capacity(EVENT_1_ID, TENANT_A_ID, 5));
    harness
        .event_repository
        .add_event(event_with_capacity(EVENT_2_ID, TENANT_A_ID, 5));

    harness
        .service
        .handle_submit_request(submit_command(EVENT_1_ID, ATTENDEE_1_ID))
        .await
        .expect("submit should succeed");
    harness
        .service
        .handle_submit_request(submit_command(EVENT_2_ID, ATTENDEE_1_ID))
        .await
        .expect("submit should succeed");

    let own = harness
        .query_service
        .handle_list_my_bookings(my_bookings_query(ATTENDEE_1_ID))
        .await
        .expect("query should succeed");

    assert_eq!(own.len(), 2);
    assert!(own[0].created_at() >= own[1].created_at());
    assert_eq!(own[0].event_id().value(), uuid_of(EVENT_2_ID));
}

#[tokio::test]
async fn dashboard_requires_an_organizer_or_admin() {
    let harness = create_booking_harness();

    let result = harness
        .query_service
        .handle_organizer_dashboard(dashboard_query(RequesterRole::Attendee))
        .await;

    assert!(matches!(result, Err(BookingDomainError::Forbidden)));
}

#[tokio::test]
async fn dashboard_aggregates_are_derived_from_current_statuses() {
    let harness = create_booking_harness();
    harness
        .event_repository
        .add_event(event_with_capacity(EVENT_1_ID, TENANT_A_ID, 2));
    harness
        .log_repository
        .set_event_title(uuid_of(EVENT_1_ID), "Event 1");

    let a = harness
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
        .handle_submit_request(submit_command(EVENT_1_ID, ATTENDEE_3_ID))
        .await
        .expect("submit should succeed");

    // A cancels; the waitlisted attendee is promoted back to full.
    harness
        .service
        .handle_cancel(cancel_command(a.id(), ATTENDEE_1_ID, RequesterRole::Attendee))
        .await
        .expect("cancel should succeed");

    let dashboard = harness
        .query_service
        .handle_organizer_dashboard(dashboard_query(RequesterRole::Organizer))
        .await
        .expect("dashboard should succeed");

    assert_eq!(dashboard.upcoming_events.len(), 1);
    let summary = &dashboard.upcoming_events[0];
    assert_eq!(summary.confirmed_count, 2);
    assert_eq!(summary.waitlisted_count, 0);
    assert_eq!(summary.canceled_count, 1);
    assert_eq!(summary.percentage_filled, 100);

    assert_eq!(dashboard.summary_analytics.total_events, 1);
    assert_eq!(dashboard.summary_analytics.total_confirmed_bookings, 2);
    assert_eq!(dashboard.summary_analytics.total_canceled_bookings, 1);
}

#[tokio::test]
async fn dashboard_recent_activity_excludes_request_created_entries() {
    let harness = create_booking_harness();
    harness
        .event_repository
        .add_event(event_with_capacity(EVENT_1_ID, TENANT_A_ID, 1));

    harness
        .service
        .handle_submit_request(submit_command(EVENT_1_ID, ATTENDEE_1_ID))
        .await
        .expect("submit should succeed");

    let dashboard = harness
        .query_service
        .handle_organizer_dashboard(dashboard_query(RequesterRole::Admin))
        .await
        .expect("dashboard should succeed");

    assert!(!dashboard.recent_activity.is_empty());
    assert!(
        dashboard
            .recent_activity
            .iter()
            .all(|a| a.action != BookingLogAction::RequestCreated)
    );
}

#[tokio::test]
async fn dashboard_upcoming_events_exclude_past_events() {
    let harness = create_booking_harness();
    harness
        .event_repository
        .add_event(event_with_capacity(EVENT_1_ID, TENANT_A_ID, 2));
    harness
        .event_repository
        .add_event(past_event_with_capacity(EVENT_2_ID, TENANT_A_ID, 2));

    let dashboard = harness
        .query_service
        .handle_organizer_dashboard(dashboard_query(RequesterRole::Organizer))
        .await
        .expect("dashboard should succeed");

    assert_eq!(dashboard.upcoming_events.len(), 1);
    assert_eq!(dashboard.upcoming_events[0].event_id, uuid_of(EVENT_1_ID));
    // Past events still count toward the tenant-wide totals.
    assert_eq!(dashboard.summary_analytics.total_events, 2);
}

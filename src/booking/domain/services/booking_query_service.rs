use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::booking::domain::model::{
    entities::booking::Booking,
    enums::{booking_domain_error::BookingDomainError, booking_log_action::BookingLogAction},
    queries::{
        list_my_bookings_query::ListMyBookingsQuery,
        organizer_dashboard_query::OrganizerDashboardQuery,
    },
};

/// Derived per-event attendance figures; recomputed from the booking
/// statuses on every read, never stored.
#[derive(Clone, Debug)]
pub struct EventAttendanceSummary {
    pub event_id: Uuid,
    pub title: String,
    pub scheduled_at: DateTime<Utc>,
    pub capacity: i32,
    pub confirmed_count: i64,
    pub waitlisted_count: i64,
    pub canceled_count: i64,
    pub percentage_filled: i64,
}

#[derive(Clone, Debug)]
pub struct RecentBookingActivity {
    pub log_id: Uuid,
    pub booking_id: Uuid,
    pub event_id: Uuid,
    pub event_title: String,
    pub user_id: Uuid,
    pub action: BookingLogAction,
    pub note: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Default)]
pub struct DashboardSummaryAnalytics {
    pub total_events: usize,
    pub total_confirmed_bookings: i64,
    pub total_waitlisted_bookings: i64,
    pub total_canceled_bookings: i64,
}

#[derive(Clone, Debug)]
pub struct OrganizerDashboardView {
    pub upcoming_events: Vec<EventAttendanceSummary>,
    pub summary_analytics: DashboardSummaryAnalytics,
    pub recent_activity: Vec<RecentBookingActivity>,
}

#[async_trait]
pub trait BookingQueryService: Send + Sync {
    async fn handle_list_my_bookings(
        &self,
        query: ListMyBookingsQuery,
    ) -> Result<Vec<Booking>, BookingDomainError>;

    async fn handle_organizer_dashboard(
        &self,
        query: OrganizerDashboardQuery,
    ) -> Result<OrganizerDashboardView, BookingDomainError>;
}

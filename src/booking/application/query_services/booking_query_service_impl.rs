use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::booking::{
    domain::{
        model::{
            entities::booking::Booking,
            enums::{booking_domain_error::BookingDomainError, booking_status::BookingStatus},
            queries::{
                list_my_bookings_query::ListMyBookingsQuery,
                organizer_dashboard_query::OrganizerDashboardQuery,
            },
            value_objects::{event_id::EventId, tenant_id::TenantId},
        },
        services::booking_query_service::{
            BookingQueryService, DashboardSummaryAnalytics, EventAttendanceSummary,
            OrganizerDashboardView, RecentBookingActivity,
        },
    },
    infrastructure::persistence::repositories::{
        booking_log_repository::BookingLogRepository, booking_repository::BookingRepository,
        event_repository::{EventRecord, EventRepository},
    },
};

const RECENT_ACTIVITY_LIMIT: i64 = 5;

pub struct BookingQueryServiceImpl {
    booking_repository: Arc<dyn BookingRepository>,
    event_repository: Arc<dyn EventRepository>,
    log_repository: Arc<dyn BookingLogRepository>,
}

impl BookingQueryServiceImpl {
    pub fn new(
        booking_repository: Arc<dyn BookingRepository>,
        event_repository: Arc<dyn EventRepository>,
        log_repository: Arc<dyn BookingLogRepository>,
    ) -> Self {
        Self {
            booking_repository,
            event_repository,
            log_repository,
        }
    }

    /// Aggregates are always recomputed from the live statuses so they
    /// match the sum over current bookings.
    async fn attendance_summary(
        &self,
        event: &EventRecord,
        tenant_id: &TenantId,
    ) -> Result<EventAttendanceSummary, BookingDomainError> {
        let event_id = EventId::from_uuid(event.id);

        let confirmed_count = self
            .booking_repository
            .count_by_status(&event_id, tenant_id, BookingStatus::Confirmed)
            .await?;
        let waitlisted_count = self
            .booking_repository
            .count_by_status(&event_id, tenant_id, BookingStatus::Waitlisted)
            .await?;
        let canceled_count = self
            .booking_repository
            .count_by_status(&event_id, tenant_id, BookingStatus::Canceled)
            .await?;

        let percentage_filled = if event.capacity > 0 {
            (confirmed_count * 100 + i64::from(event.capacity) / 2) / i64::from(event.capacity)
        } else {
            0
        };

        Ok(EventAttendanceSummary {
            event_id: event.id,
            title: event.title.clone(),
            scheduled_at: event.scheduled_at,
            capacity: event.capacity,
            confirmed_count,
            waitlisted_count,
            canceled_count,
            percentage_filled,
        })
    }
}

#[async_trait]
impl BookingQueryService for BookingQueryServiceImpl {
    async fn handle_list_my_bookings(
        &self,
        query: ListMyBookingsQuery,
    ) -> Result<Vec<Booking>, BookingDomainError> {
        self.booking_repository
            .list_by_user(query.user_id(), query.tenant_id())
            .await
    }

    async fn handle_organizer_dashboard(
        &self,
        query: OrganizerDashboardQuery,
    ) -> Result<OrganizerDashboardView, BookingDomainError> {
        if !query.requester_role().can_manage_tenant_bookings() {
            return Err(BookingDomainError::Forbidden);
        }

        let events = self
            .event_repository
            .list_by_organizer(query.organizer_id(), query.tenant_id())
            .await?;

        let mut summaries = Vec::with_capacity(events.len());
        for event in &events {
            summaries.push(self.attendance_summary(event, query.tenant_id()).await?);
        }

        let summary_analytics = DashboardSummaryAnalytics {
            total_events: summaries.len(),
            total_confirmed_bookings: summaries.iter().map(|s| s.confirmed_count).sum(),
            total_waitlisted_bookings: summaries.iter().map(|s| s.waitlisted_count).sum(),
            total_canceled_bookings: summaries.iter().map(|s| s.canceled_count).sum(),
        };

        let now = Utc::now();
        let upcoming_events = summaries
            .into_iter()
            .filter(|summary| summary.scheduled_at > now)
            .collect();

        let recent_activity = self
            .log_repository
            .list_recent_activity(query.tenant_id().value(), RECENT_ACTIVITY_LIMIT)
            .await?
            .into_iter()
            .map(|record| RecentBookingActivity {
                log_id: record.log_id,
                booking_id: record.booking_id,
                event_id: record.event_id,
                event_title: record.event_title,
                user_id: record.user_id,
                action: record.action,
                note: record.note,
                created_at: record.created_at,
            })
            .collect();

        Ok(OrganizerDashboardView {
            upcoming_events,
            summary_analytics,
            recent_activity,
        })
    }
}

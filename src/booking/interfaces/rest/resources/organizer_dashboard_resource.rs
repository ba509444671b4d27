use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::booking::domain::services::booking_query_service::{
    EventAttendanceSummary, OrganizerDashboardView, RecentBookingActivity,
};

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct EventAttendanceSummaryResource {
    pub id: String,
    pub title: String,
    pub date: String,
    pub capacity: i32,
    pub confirmed_count: i64,
    pub waitlisted_count: i64,
    pub canceled_count: i64,
    pub percentage_filled: i64,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct RecentActivityResource {
    pub id: String,
    pub booking_id: String,
    pub event_id: String,
    pub event_title: String,
    pub user_id: String,
    pub action: String,
    pub note: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct DashboardSummaryAnalyticsResource {
    pub total_events: usize,
    pub total_confirmed_bookings: i64,
    pub total_waitlisted_bookings: i64,
    pub total_canceled_bookings: i64,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct OrganizerDashboardResource {
    pub upcoming_events: Vec<EventAttendanceSummaryResource>,
    pub summary_analytics: DashboardSummaryAnalyticsResource,
    pub recent_activity: Vec<RecentActivityResource>,
}

impl From<&EventAttendanceSummary> for EventAttendanceSummaryResource {
    fn from(summary: &EventAttendanceSummary) -> Self {
        Self {
            id: summary.event_id.to_string(),
            title: summary.title.clone(),
            date: summary.scheduled_at.to_rfc3339(),
            capacity: summary.capacity,
            confirmed_count: summary.confirmed_count,
            waitlisted_count: summary.waitlisted_count,
            canceled_count: summary.canceled_count,
            percentage_filled: summary.percentage_filled,
        }
    }
}

impl From<&RecentBookingActivity> for RecentActivityResource {
    fn from(activity: &RecentBookingActivity) -> Self {
        Self {
            id: activity.log_id.to_string(),
            booking_id: activity.booking_id.to_string(),
            event_id: activity.event_id.to_string(),
            event_title: activity.event_title.clone(),
            user_id: activity.user_id.to_string(),
            action: activity.action.as_str().to_string(),
            note: activity.note.clone(),
            created_at: activity.created_at.to_rfc3339(),
        }
    }
}

impl From<&OrganizerDashboardView> for OrganizerDashboardResource {
    fn from(view: &OrganizerDashboardView) -> Self {
        Self {
            upcoming_events: view.upcoming_events.iter().map(Into::into).collect(),
            summary_analytics: DashboardSummaryAnalyticsResource {
                total_events: view.summary_analytics.total_events,
                total_confirmed_bookings: view.summary_analytics.total_confirmed_bookings,
                total_waitlisted_bookings: view.summary_analytics.total_waitlisted_bookings,
                total_canceled_bookings: view.summary_analytics.total_canceled_bookings,
            },
            recent_activity: view.recent_activity.iter().map(Into::into).collect(),
        }
    }
}

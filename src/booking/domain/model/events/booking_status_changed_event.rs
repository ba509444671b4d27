use chrono::{DateTime, Utc};

use crate::booking::domain::model::{
    enums::booking_status::BookingStatus,
    value_objects::{
        booking_id::BookingId, event_id::EventId, tenant_id::TenantId, user_id::UserId,
    },
};

/// Which transition the booking just committed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BookingTransition {
    /// A new request was admitted with the given decision
    /// (confirmed or waitlisted).
    Requested { decided: BookingStatus },
    PromotedFromWaitlist,
    Canceled { prior: BookingStatus },
}

/// Handed to the side-effect dispatcher after the owning transition has
/// committed; carries everything needed to write the audit entries and
/// the user notification.
#[derive(Clone, Debug)]
pub struct BookingStatusChangedEvent {
    pub booking_id: BookingId,
    pub event_id: EventId,
    pub user_id: UserId,
    pub tenant_id: TenantId,
    pub transition: BookingTransition,
    pub occurred_at: DateTime<Utc>,
}

impl BookingStatusChangedEvent {
    pub fn new(
        booking_id: BookingId,
        event_id: EventId,
        user_id: UserId,
        tenant_id: TenantId,
        transition: BookingTransition,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self {
            booking_id,
            event_id,
            user_id,
            tenant_id,
            transition,
            occurred_at,
        }
    }
}

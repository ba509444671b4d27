use async_trait::async_trait;

use crate::booking::domain::model::events::booking_status_changed_event::BookingStatusChangedEvent;

/// Writes the audit log entries and the user notification for a
/// committed transition. Called after the transition has been persisted,
/// never inside the critical section; a failed side effect is recorded
/// and must never surface to the caller or undo the transition.
#[async_trait]
pub trait BookingSideEffectDispatcher: Send + Sync {
    async fn dispatch(&self, event: &BookingStatusChangedEvent);
}

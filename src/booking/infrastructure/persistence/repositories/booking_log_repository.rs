use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::booking::domain::model::enums::{
    booking_domain_error::BookingDomainError, booking_log_action::BookingLogAction,
};

/// Append-only audit entry for one booking state transition.
#[derive(Clone, Debug)]
pub struct BookingLogRecord {
    booking_id: Uuid,
    event_id: Uuid,
    user_id: Uuid,
    tenant_id: Uuid,
    action: BookingLogAction,
    note: String,
    created_at: DateTime<Utc>,
}

impl BookingLogRecord {
    pub fn new(
        booking_id: Uuid,
        event_id: Uuid,
        user_id: Uuid,
        tenant_id: Uuid,
        action: BookingLogAction,
        note: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            booking_id,
            event_id,
            user_id,
            tenant_id,
            action,
            note: note.into(),
            created_at,
        }
    }

    pub fn booking_id(&self) -> Uuid {
        self.booking_id
    }

    pub fn event_id(&self) -> Uuid {
        self.event_id
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn tenant_id(&self) -> Uuid {
        self.tenant_id
    }

    pub fn action(&self) -> BookingLogAction {
        self.action
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// A recent-activity row joined with its event title for the dashboard.
#[derive(Clone, Debug)]
pub struct BookingActivityRecord {
    pub log_id: Uuid,
    pub booking_id: Uuid,
    pub event_id: Uuid,
    pub event_title: String,
    pub user_id: Uuid,
    pub action: BookingLogAction,
    pub note: String,
    pub created_at: DateTime<Utc>,
}

#[async_trait]
pub trait BookingLogRepository: Send + Sync {
    async fn append(&self, record: &BookingLogRecord) -> Result<(), BookingDomainError>;

    /// Latest non-`request_created` entries for the tenant, newest
    /// first.
    async fn list_recent_activity(
        &self,
        tenant_id: Uuid,
        limit: i64,
    ) -> Result<Vec<BookingActivityRecord>, BookingDomainError>;
}

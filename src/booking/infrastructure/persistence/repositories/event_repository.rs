use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::booking::domain::model::{
    enums::booking_domain_error::BookingDomainError,
    value_objects::{event_id::EventId, tenant_id::TenantId, user_id::UserId},
};

/// Events are configuration from this context's point of view: read to
/// learn capacity and ownership, never written.
#[derive(Clone, Debug)]
pub struct EventRecord {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub title: String,
    pub scheduled_at: DateTime<Utc>,
    pub capacity: i32,
    pub organizer_id: Uuid,
}

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn find_by_id(
        &self,
        event_id: &EventId,
        tenant_id: &TenantId,
    ) -> Result<Option<EventRecord>, BookingDomainError>;

    async fn list_by_organizer(
        &self,
        organizer_id: &UserId,
        tenant_id: &TenantId,
    ) -> Result<Vec<EventRecord>, BookingDomainError>;
}

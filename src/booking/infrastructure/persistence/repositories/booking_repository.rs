use async_trait::async_trait;

use crate::booking::domain::model::{
    entities::booking::Booking,
    enums::{booking_domain_error::BookingDomainError, booking_status::BookingStatus},
    value_objects::{
        booking_id::BookingId, event_id::EventId, tenant_id::TenantId, user_id::UserId,
    },
};

#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn insert(&self, booking: &Booking) -> Result<(), BookingDomainError>;

    async fn find_by_id(
        &self,
        booking_id: &BookingId,
        tenant_id: &TenantId,
    ) -> Result<Option<Booking>, BookingDomainError>;

    /// The capacity ledger. Callers deciding an admission or promotion
    /// must hold the (tenant, event) lock across this read and the write
    /// that depends on it.
    async fn count_by_status(
        &self,
        event_id: &EventId,
        tenant_id: &TenantId,
        status: BookingStatus,
    ) -> Result<i64, BookingDomainError>;

    /// Oldest waitlisted booking by (created_at, id) ascending.
    async fn find_oldest_waitlisted(
        &self,
        event_id: &EventId,
        tenant_id: &TenantId,
    ) -> Result<Option<Booking>, BookingDomainError>;

    /// Compare-and-set status update. Returns `false` when the booking
    /// no longer holds `from`, so racing writers resolve to one winner.
    async fn transition_status(
        &self,
        booking_id: &BookingId,
        tenant_id: &TenantId,
        from: BookingStatus,
        to: BookingStatus,
    ) -> Result<bool, BookingDomainError>;

    async fn list_by_user(
        &self,
        user_id: &UserId,
        tenant_id: &TenantId,
    ) -> Result<Vec<Booking>, BookingDomainError>;
}

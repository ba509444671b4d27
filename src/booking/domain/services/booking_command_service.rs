use async_trait::async_trait;

use crate::booking::domain::model::{
    commands::{
        cancel_booking_command::CancelBookingCommand,
        submit_booking_request_command::SubmitBookingRequestCommand,
    },
    entities::booking::Booking,
    enums::booking_domain_error::BookingDomainError,
    value_objects::{event_id::EventId, tenant_id::TenantId},
};

#[async_trait]
pub trait BookingCommandService: Send + Sync {
    /// Admits a booking request: confirmed while the event has free
    /// capacity, waitlisted otherwise. The capacity read and the booking
    /// write are serialized per (tenant, event).
    async fn handle_submit_request(
        &self,
        command: SubmitBookingRequestCommand,
    ) -> Result<Booking, BookingDomainError>;

    /// Cancels a booking exactly once; a cancellation that vacated a
    /// confirmed seat triggers one waitlist promotion for the event.
    async fn handle_cancel(
        &self,
        command: CancelBookingCommand,
    ) -> Result<Booking, BookingDomainError>;

    /// Promotes the longest-waiting waitlisted booking if a seat is
    /// free. At most one promotion per invocation; with no free seat or
    /// no waitlisted booking this is a no-op returning `None`.
    async fn handle_promote_if_possible(
        &self,
        event_id: &EventId,
        tenant_id: &TenantId,
    ) -> Result<Option<Booking>, BookingDomainError>;
}

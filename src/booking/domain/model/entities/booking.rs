use chrono::{DateTime, Utc};

use crate::booking::domain::model::{
    enums::{booking_domain_error::BookingDomainError, booking_status::BookingStatus},
    value_objects::{
        booking_id::BookingId, event_id::EventId, tenant_id::TenantId, user_id::UserId,
    },
};

/// A seat request for one event. `created_at` is assigned once at
/// admission and is the FIFO ordering key for waitlist promotion.
#[derive(Clone, Debug)]
pub struct Booking {
    id: BookingId,
    event_id: EventId,
    user_id: UserId,
    tenant_id: TenantId,
    status: BookingStatus,
    created_at: DateTime<Utc>,
}

impl Booking {
    /// The admission decision: confirmed while seats remain, waitlisted
    /// once the confirmed count has reached capacity.
    pub fn admit(
        id: BookingId,
        event_id: EventId,
        user_id: UserId,
        tenant_id: TenantId,
        confirmed_count: i64,
        capacity: i32,
        created_at: DateTime<Utc>,
    ) -> Self {
        let status = if confirmed_count < i64::from(capacity) {
            BookingStatus::Confirmed
        } else {
            BookingStatus::Waitlisted
        };

        Self {
            id,
            event_id,
            user_id,
            tenant_id,
            status,
            created_at,
        }
    }

    pub fn restore(
        id: BookingId,
        event_id: EventId,
        user_id: UserId,
        tenant_id: TenantId,
        status: BookingStatus,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            event_id,
            user_id,
            tenant_id,
            status,
            created_at,
        }
    }

    pub fn confirm_from_waitlist(&mut self) -> Result<(), BookingDomainError> {
        if self.status != BookingStatus::Waitlisted {
            return Err(BookingDomainError::InvalidStatusTransition);
        }
        self.status = BookingStatus::Confirmed;
        Ok(())
    }

    /// Cancels once, returning the status the booking held before; a
    /// canceled booking is terminal and can never leave that state.
    pub fn cancel(&mut self) -> Result<BookingStatus, BookingDomainError> {
        if self.status == BookingStatus::Canceled {
            return Err(BookingDomainError::AlreadyCanceled);
        }
        let prior = self.status;
        self.status = BookingStatus::Canceled;
        Ok(prior)
    }

    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        self.user_id == *user_id
    }

    pub fn id(&self) -> BookingId {
        self.id
    }

    pub fn event_id(&self) -> EventId {
        self.event_id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }

    pub fn status(&self) -> BookingStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

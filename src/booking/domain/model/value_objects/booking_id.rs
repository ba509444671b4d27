use uuid::Uuid;

use crate::booking::domain::model::enums::booking_domain_error::BookingDomainError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct BookingId(Uuid);

impl BookingId {
    pub fn new(value: String) -> Result<Self, BookingDomainError> {
        let parsed =
            Uuid::parse_str(value.trim()).map_err(|_| BookingDomainError::InvalidBookingId)?;
        Ok(Self(parsed))
    }

    /// Fresh time-ordered id, so insertion order doubles as a stable
    /// tiebreaker for the FIFO waitlist.
    pub fn generate() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(value: Uuid) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

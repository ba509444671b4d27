use uuid::Uuid;

use crate::booking::domain::model::enums::booking_domain_error::BookingDomainError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct EventId(Uuid);

impl EventId {
    pub fn new(value: String) -> Result<Self, BookingDomainError> {
        let parsed =
            Uuid::parse_str(value.trim()).map_err(|_| BookingDomainError::InvalidEventId)?;
        Ok(Self(parsed))
    }

    pub fn from_uuid(value: Uuid) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

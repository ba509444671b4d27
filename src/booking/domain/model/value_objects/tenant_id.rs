use uuid::Uuid;

use crate::booking::domain::model::enums::booking_domain_error::BookingDomainError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct TenantId(Uuid);

impl TenantId {
    pub fn new(value: String) -> Result<Self, BookingDomainError> {
        let parsed =
            Uuid::parse_str(value.trim()).map_err(|_| BookingDomainError::InvalidTenantId)?;
        Ok(Self(parsed))
    }

    pub fn from_uuid(value: Uuid) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

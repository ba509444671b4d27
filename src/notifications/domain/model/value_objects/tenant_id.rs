use uuid::Uuid;

use crate::notifications::domain::model::enums::notification_domain_error::NotificationDomainError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct TenantId(Uuid);

impl TenantId {
    pub fn new(value: String) -> Result<Self, NotificationDomainError> {
        let parsed =
            Uuid::parse_str(value.trim()).map_err(|_| NotificationDomainError::InvalidTenantId)?;
        Ok(Self(parsed))
    }

    pub fn from_uuid(value: Uuid) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

use uuid::Uuid;

use crate::notifications::domain::model::enums::notification_domain_error::NotificationDomainError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct NotificationId(Uuid);

impl NotificationId {
    pub fn new(value: String) -> Result<Self, NotificationDomainError> {
        let parsed = Uuid::parse_str(value.trim())
            .map_err(|_| NotificationDomainError::InvalidNotificationId)?;
        Ok(Self(parsed))
    }

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

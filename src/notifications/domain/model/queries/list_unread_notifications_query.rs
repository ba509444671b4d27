use crate::notifications::domain::model::{
    enums::notification_domain_error::NotificationDomainError,
    value_objects::{tenant_id::TenantId, user_id::UserId},
};

#[derive(Clone, Debug)]
pub struct ListUnreadNotificationsQuery {
    user_id: UserId,
    tenant_id: TenantId,
}

impl ListUnreadNotificationsQuery {
    pub fn new(user_id: String, tenant_id: String) -> Result<Self, NotificationDomainError> {
        Ok(Self {
            user_id: UserId::new(user_id)?,
            tenant_id: TenantId::new(tenant_id)?,
        })
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn tenant_id(&self) -> &TenantId {
        &self.tenant_id
    }
}

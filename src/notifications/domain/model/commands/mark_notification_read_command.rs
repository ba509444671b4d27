use crate::notifications::domain::model::{
    enums::{notification_domain_error::NotificationDomainError, requester_role::RequesterRole},
    value_objects::{notification_id::NotificationId, tenant_id::TenantId, user_id::UserId},
};

#[derive(Clone, Debug)]
pub struct MarkNotificationReadCommand {
    notification_id: NotificationId,
    requester_id: UserId,
    tenant_id: TenantId,
    requester_role: RequesterRole,
}

impl MarkNotificationReadCommand {
    pub fn new(
        notification_id: String,
        requester_id: String,
        tenant_id: String,
        requester_role: RequesterRole,
    ) -> Result<Self, NotificationDomainError> {
        Ok(Self {
            notification_id: NotificationId::new(notification_id)?,
            requester_id: UserId::new(requester_id)?,
            tenant_id: TenantId::new(tenant_id)?,
            requester_role,
        })
    }

    pub fn notification_id(&self) -> &NotificationId {
        &self.notification_id
    }

    pub fn requester_id(&self) -> &UserId {
        &self.requester_id
    }

    pub fn tenant_id(&self) -> &TenantId {
        &self.tenant_id
    }

    pub fn requester_role(&self) -> RequesterRole {
        self.requester_role
    }
}

use async_trait::async_trait;

use crate::notifications::domain::model::{
    entities::notification::Notification,
    enums::notification_domain_error::NotificationDomainError,
    value_objects::{notification_id::NotificationId, tenant_id::TenantId, user_id::UserId},
};

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    async fn insert(&self, notification: &Notification) -> Result<(), NotificationDomainError>;

    async fn find_by_id(
        &self,
        notification_id: &NotificationId,
        tenant_id: &TenantId,
    ) -> Result<Option<Notification>, NotificationDomainError>;

    async fn mark_read(
        &self,
        notification_id: &NotificationId,
        tenant_id: &TenantId,
    ) -> Result<(), NotificationDomainError>;

    async fn list_unread_by_user(
        &self,
        user_id: &UserId,
        tenant_id: &TenantId,
    ) -> Result<Vec<Notification>, NotificationDomainError>;
}

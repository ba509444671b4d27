use std::sync::Arc;

use async_trait::async_trait;

use crate::notifications::{
    domain::{
        model::{
            commands::mark_notification_read_command::MarkNotificationReadCommand,
            entities::notification::Notification,
            enums::{
                notification_domain_error::NotificationDomainError,
                requester_role::RequesterRole,
            },
        },
        services::notification_command_service::NotificationCommandService,
    },
    infrastructure::persistence::repositories::notification_repository::NotificationRepository,
};

pub struct NotificationCommandServiceImpl {
    notification_repository: Arc<dyn NotificationRepository>,
}

impl NotificationCommandServiceImpl {
    pub fn new(notification_repository: Arc<dyn NotificationRepository>) -> Self {
        Self {
            notification_repository,
        }
    }
}

#[async_trait]
impl NotificationCommandService for NotificationCommandServiceImpl {
    async fn handle_mark_read(
        &self,
        command: MarkNotificationReadCommand,
    ) -> Result<Notification, NotificationDomainError> {
        // A foreign-tenant notification looks exactly like a missing one.
        let mut notification = self
            .notification_repository
            .find_by_id(command.notification_id(), command.tenant_id())
            .await?
            .ok_or(NotificationDomainError::NotificationNotFound)?;

        if command.requester_role() == RequesterRole::Attendee
            && !notification.is_owned_by(command.requester_id())
        {
            return Err(NotificationDomainError::Forbidden);
        }

        notification.mark_read();
        self.notification_repository
            .mark_read(command.notification_id(), command.tenant_id())
            .await?;

        Ok(notification)
    }
}

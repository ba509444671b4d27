use async_trait::async_trait;

use crate::notifications::domain::model::{
    commands::mark_notification_read_command::MarkNotificationReadCommand,
    entities::notification::Notification,
    enums::notification_domain_error::NotificationDomainError,
};

#[async_trait]
pub trait NotificationCommandService: Send + Sync {
    async fn handle_mark_read(
        &self,
        command: MarkNotificationReadCommand,
    ) -> Result<Notification, NotificationDomainError>;
}

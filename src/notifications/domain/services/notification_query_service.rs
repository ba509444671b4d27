use async_trait::async_trait;

use crate::notifications::domain::model::{
    entities::notification::Notification,
    enums::notification_domain_error::NotificationDomainError,
    queries::list_unread_notifications_query::ListUnreadNotificationsQuery,
};

#[async_trait]
pub trait NotificationQueryService: Send + Sync {
    async fn handle_list_unread(
        &self,
        query: ListUnreadNotificationsQuery,
    ) -> Result<Vec<Notification>, NotificationDomainError>;
}

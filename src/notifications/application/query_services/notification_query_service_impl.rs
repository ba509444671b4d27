use std::sync::Arc;

use async_trait::async_trait;

use crate::notifications::{
    domain::{
        model::{
            entities::notification::Notification,
            enums::notification_domain_error::NotificationDomainError,
            queries::list_unread_notifications_query::ListUnreadNotificationsQuery,
        },
        services::notification_query_service::NotificationQueryService,
    },
    infrastructure::persistence::repositories::notification_repository::NotificationRepository,
};

pub struct NotificationQueryServiceImpl {
    notification_repository: Arc<dyn NotificationRepository>,
}

impl NotificationQueryServiceImpl {
    pub fn new(notification_repository: Arc<dyn NotificationRepository>) -> Self {
        Self {
            notification_repository,
        }
    }
}

#[async_trait]
impl NotificationQueryService for NotificationQueryServiceImpl {
    async fn handle_list_unread(
        &self,
        query: ListUnreadNotificationsQuery,
    ) -> Result<Vec<Notification>, NotificationDomainError> {
        self.notification_repository
            .list_unread_by_user(query.user_id(), query.tenant_id())
            .await
    }
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::notifications::domain::model::entities::notification::Notification;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct NotificationResource {
    pub id: String,
    pub booking_id: String,
    pub kind: String,
    pub title: String,
    pub message: String,
    pub read: bool,
    pub created_at: String,
}

impl From<&Notification> for NotificationResource {
    fn from(notification: &Notification) -> Self {
        Self {
            id: notification.id().value().to_string(),
            booking_id: notification.booking_id().to_string(),
            kind: notification.kind().as_str().to_string(),
            title: notification.title().to_string(),
            message: notification.message().to_string(),
            read: notification.read(),
            created_at: notification.created_at().to_rfc3339(),
        }
    }
}

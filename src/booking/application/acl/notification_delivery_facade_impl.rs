use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::{
    booking::interfaces::acl::notification_delivery_facade::{
        NotificationDelivery, NotificationDeliveryError, NotificationDeliveryFacade,
        NotificationKind,
    },
    notifications::{
        domain::model::{
            entities::notification::Notification,
            enums::notification_kind::NotificationKind as StoredNotificationKind,
            value_objects::{
                notification_id::NotificationId, tenant_id::TenantId, user_id::UserId,
            },
        },
        infrastructure::persistence::repositories::notification_repository::NotificationRepository,
    },
};

/// Bridges booking-side deliveries into the notifications context's
/// repository.
pub struct NotificationDeliveryFacadeImpl {
    notification_repository: Arc<dyn NotificationRepository>,
}

impl NotificationDeliveryFacadeImpl {
    pub fn new(notification_repository: Arc<dyn NotificationRepository>) -> Self {
        Self {
            notification_repository,
        }
    }

    fn stored_kind(kind: NotificationKind) -> StoredNotificationKind {
        match kind {
            NotificationKind::BookingConfirmed => StoredNotificationKind::BookingConfirmed,
            NotificationKind::Waitlisted => StoredNotificationKind::Waitlisted,
            NotificationKind::WaitlistPromoted => StoredNotificationKind::WaitlistPromoted,
            NotificationKind::BookingCanceled => StoredNotificationKind::BookingCanceled,
        }
    }
}

#[async_trait]
impl NotificationDeliveryFacade for NotificationDeliveryFacadeImpl {
    async fn deliver(
        &self,
        delivery: NotificationDelivery,
    ) -> Result<(), NotificationDeliveryError> {
        let notification = Notification::new_unread(
            NotificationId::generate(),
            UserId::from_uuid(delivery.user_id),
            delivery.booking_id,
            Self::stored_kind(delivery.kind),
            delivery.title,
            delivery.message,
            TenantId::from_uuid(delivery.tenant_id),
            Utc::now(),
        );

        self.notification_repository
            .insert(&notification)
            .await
            .map_err(|e| NotificationDeliveryError::DeliveryFailed(e.to_string()))
    }
}

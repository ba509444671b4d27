use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::notifications::domain::model::{
    enums::notification_kind::NotificationKind,
    value_objects::{notification_id::NotificationId, tenant_id::TenantId, user_id::UserId},
};

/// A message for one user about one booking. `read` is the only mutable
/// field and only ever moves false→true.
#[derive(Clone, Debug)]
pub struct Notification {
    id: NotificationId,
    user_id: UserId,
    booking_id: Uuid,
    kind: NotificationKind,
    title: String,
    message: String,
    read: bool,
    tenant_id: TenantId,
    created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new_unread(
        id: NotificationId,
        user_id: UserId,
        booking_id: Uuid,
        kind: NotificationKind,
        title: String,
        message: String,
        tenant_id: TenantId,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            booking_id,
            kind,
            title,
            message,
            read: false,
            tenant_id,
            created_at,
        }
    }

    pub fn restore(
        id: NotificationId,
        user_id: UserId,
        booking_id: Uuid,
        kind: NotificationKind,
        title: String,
        message: String,
        read: bool,
        tenant_id: TenantId,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            booking_id,
            kind,
            title,
            message,
            read,
            tenant_id,
            created_at,
        }
    }

    /// Idempotent; marking an already-read notification keeps it read.
    pub fn mark_read(&mut self) {
        self.read = true;
    }

    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        self.user_id == *user_id
    }

    pub fn id(&self) -> NotificationId {
        self.id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn booking_id(&self) -> Uuid {
        self.booking_id
    }

    pub fn kind(&self) -> NotificationKind {
        self.kind
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn read(&self) -> bool {
        self.read
    }

    pub fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

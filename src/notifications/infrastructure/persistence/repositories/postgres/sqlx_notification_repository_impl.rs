use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row, postgres::PgRow};
use uuid::Uuid;

use crate::notifications::{
    domain::model::{
        entities::notification::Notification,
        enums::{
            notification_domain_error::NotificationDomainError,
            notification_kind::NotificationKind,
        },
        value_objects::{notification_id::NotificationId, tenant_id::TenantId, user_id::UserId},
    },
    infrastructure::persistence::repositories::notification_repository::NotificationRepository,
};

pub struct SqlxNotificationRepositoryImpl {
    pool: PgPool,
}

impl SqlxNotificationRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn notification_from_row(row: &PgRow) -> Result<Notification, NotificationDomainError> {
        let kind_raw: String = row
            .try_get("kind")
            .map_err(|e| NotificationDomainError::InfrastructureError(e.to_string()))?;
        let kind = NotificationKind::from_str(&kind_raw).map_err(|_| {
            NotificationDomainError::InfrastructureError(format!(
                "unknown notification kind '{kind_raw}' in storage"
            ))
        })?;

        let id: Uuid = row
            .try_get("id")
            .map_err(|e| NotificationDomainError::InfrastructureError(e.to_string()))?;
        let user_id: Uuid = row
            .try_get("user_id")
            .map_err(|e| NotificationDomainError::InfrastructureError(e.to_string()))?;
        let booking_id: Uuid = row
            .try_get("booking_id")
            .map_err(|e| NotificationDomainError::InfrastructureError(e.to_string()))?;
        let title: String = row
            .try_get("title")
            .map_err(|e| NotificationDomainError::InfrastructureError(e.to_string()))?;
        let message: String = row
            .try_get("message")
            .map_err(|e| NotificationDomainError::InfrastructureError(e.to_string()))?;
        let read: bool = row
            .try_get("read")
            .map_err(|e| NotificationDomainError::InfrastructureError(e.to_string()))?;
        let tenant_id: Uuid = row
            .try_get("tenant_id")
            .map_err(|e| NotificationDomainError::InfrastructureError(e.to_string()))?;
        let created_at: DateTime<Utc> = row
            .try_get("created_at")
            .map_err(|e| NotificationDomainError::InfrastructureError(e.to_string()))?;

        Ok(Notification::restore(
            NotificationId::from_uuid(id),
            UserId::from_uuid(user_id),
            booking_id,
            kind,
            title,
            message,
            read,
            TenantId::from_uuid(tenant_id),
            created_at,
        ))
    }
}

#[async_trait]
impl NotificationRepository for SqlxNotificationRepositoryImpl {
    async fn insert(&self, notification: &Notification) -> Result<(), NotificationDomainError> {
        let statement = r#"
            INSERT INTO notifications (id, user_id, booking_id, kind, title, message, read, tenant_id, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        "#;

        sqlx::query(statement)
            .bind(notification.id().value())
            .bind(notification.user_id().value())
            .bind(notification.booking_id())
            .bind(notification.kind().as_str())
            .bind(notification.title())
            .bind(notification.message())
            .bind(notification.read())
            .bind(notification.tenant_id().value())
            .bind(notification.created_at())
            .execute(&self.pool)
            .await
            .map_err(|e| NotificationDomainError::InfrastructureError(e.to_string()))?;

        Ok(())
    }

    async fn find_by_id(
        &self,
        notification_id: &NotificationId,
        tenant_id: &TenantId,
    ) -> Result<Option<Notification>, NotificationDomainError> {
        let statement = r#"
            SELECT id, user_id, booking_id, kind, title, message, read, tenant_id, created_at
            FROM notifications
            WHERE id = $1 AND tenant_id = $2
        "#;

        let row = sqlx::query(statement)
            .bind(notification_id.value())
            .bind(tenant_id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| NotificationDomainError::InfrastructureError(e.to_string()))?;

        row.as_ref().map(Self::notification_from_row).transpose()
    }

    async fn mark_read(
        &self,
        notification_id: &NotificationId,
        tenant_id: &TenantId,
    ) -> Result<(), NotificationDomainError> {
        let statement = r#"
            UPDATE notifications
            SET read = TRUE
            WHERE id = $1 AND tenant_id = $2
        "#;

        sqlx::query(statement)
            .bind(notification_id.value())
            .bind(tenant_id.value())
            .execute(&self.pool)
            .await
            .map_err(|e| NotificationDomainError::InfrastructureError(e.to_string()))?;

        Ok(())
    }

    async fn list_unread_by_user(
        &self,
        user_id: &UserId,
        tenant_id: &TenantId,
    ) -> Result<Vec<Notification>, NotificationDomainError> {
        let statement = r#"
            SELECT id, user_id, booking_id, kind, title, message, read, tenant_id, created_at
            FROM notifications
            WHERE user_id = $1 AND tenant_id = $2 AND read = FALSE
            ORDER BY created_at DESC
        "#;

        let rows = sqlx::query(statement)
            .bind(user_id.value())
            .bind(tenant_id.value())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| NotificationDomainError::InfrastructureError(e.to_string()))?;

        rows.iter().map(Self::notification_from_row).collect()
    }
}

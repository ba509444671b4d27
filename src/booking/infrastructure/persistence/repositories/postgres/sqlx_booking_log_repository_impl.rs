use std::str::FromStr;

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::booking::{
    domain::model::enums::{
        booking_domain_error::BookingDomainError, booking_log_action::BookingLogAction,
    },
    infrastructure::persistence::repositories::booking_log_repository::{
        BookingActivityRecord, BookingLogRecord, BookingLogRepository,
    },
};

pub struct SqlxBookingLogRepositoryImpl {
    pool: PgPool,
}

impl SqlxBookingLogRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingLogRepository for SqlxBookingLogRepositoryImpl {
    async fn append(&self, record: &BookingLogRecord) -> Result<(), BookingDomainError> {
        let statement = r#"
            INSERT INTO booking_logs (booking_id, event_id, user_id, tenant_id, action, note, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
        "#;

        sqlx::query(statement)
            .bind(record.booking_id())
            .bind(record.event_id())
            .bind(record.user_id())
            .bind(record.tenant_id())
            .bind(record.action().as_str())
            .bind(record.note())
            .bind(record.created_at())
            .execute(&self.pool)
            .await
            .map_err(|e| BookingDomainError::InfrastructureError(e.to_string()))?;

        Ok(())
    }

    async fn list_recent_activity(
        &self,
        tenant_id: uuid::Uuid,
        limit: i64,
    ) -> Result<Vec<BookingActivityRecord>, BookingDomainError> {
        let statement = r#"
            SELECT l.id, l.booking_id, l.event_id, e.title AS event_title,
                   l.user_id, l.action, l.note, l.created_at
            FROM booking_logs l
            JOIN events e ON e.id = l.event_id AND e.tenant_id = l.tenant_id
            WHERE l.tenant_id = $1 AND l.action <> 'request_created'
            ORDER BY l.created_at DESC
            LIMIT $2
        "#;

        let rows = sqlx::query(statement)
            .bind(tenant_id)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| BookingDomainError::InfrastructureError(e.to_string()))?;

        rows.iter()
            .map(|row| {
                let action_raw: String = row
                    .try_get("action")
                    .map_err(|e| BookingDomainError::InfrastructureError(e.to_string()))?;
                let action = BookingLogAction::from_str(&action_raw).map_err(|_| {
                    BookingDomainError::InfrastructureError(format!(
                        "unknown booking log action '{action_raw}' in storage"
                    ))
                })?;

                Ok(BookingActivityRecord {
                    log_id: row
                        .try_get("id")
                        .map_err(|e| BookingDomainError::InfrastructureError(e.to_string()))?,
                    booking_id: row
                        .try_get("booking_id")
                        .map_err(|e| BookingDomainError::InfrastructureError(e.to_string()))?,
                    event_id: row
                        .try_get("event_id")
                        .map_err(|e| BookingDomainError::InfrastructureError(e.to_string()))?,
                    event_title: row
                        .try_get("event_title")
                        .map_err(|e| BookingDomainError::InfrastructureError(e.to_string()))?,
                    user_id: row
                        .try_get("user_id")
                        .map_err(|e| BookingDomainError::InfrastructureError(e.to_string()))?,
                    action,
                    note: row
                        .try_get("note")
                        .map_err(|e| BookingDomainError::InfrastructureError(e.to_string()))?,
                    created_at: row
                        .try_get("created_at")
                        .map_err(|e| BookingDomainError::InfrastructureError(e.to_string()))?,
                })
            })
            .collect()
    }
}

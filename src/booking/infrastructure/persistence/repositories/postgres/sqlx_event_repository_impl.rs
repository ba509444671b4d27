use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};

use crate::booking::{
    domain::model::{
        enums::booking_domain_error::BookingDomainError,
        value_objects::{event_id::EventId, tenant_id::TenantId, user_id::UserId},
    },
    infrastructure::persistence::repositories::event_repository::{EventRecord, EventRepository},
};

pub struct SqlxEventRepositoryImpl {
    pool: PgPool,
}

impl SqlxEventRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn record_from_row(row: &PgRow) -> Result<EventRecord, BookingDomainError> {
        Ok(EventRecord {
            id: row
                .try_get("id")
                .map_err(|e| BookingDomainError::InfrastructureError(e.to_string()))?,
            tenant_id: row
                .try_get("tenant_id")
                .map_err(|e| BookingDomainError::InfrastructureError(e.to_string()))?,
            title: row
                .try_get("title")
                .map_err(|e| BookingDomainError::InfrastructureError(e.to_string()))?,
            scheduled_at: row
                .try_get("scheduled_at")
                .map_err(|e| BookingDomainError::InfrastructureError(e.to_string()))?,
            capacity: row
                .try_get("capacity")
                .map_err(|e| BookingDomainError::InfrastructureError(e.to_string()))?,
            organizer_id: row
                .try_get("organizer_id")
                .map_err(|e| BookingDomainError::InfrastructureError(e.to_string()))?,
        })
    }
}

#[async_trait]
impl EventRepository for SqlxEventRepositoryImpl {
    async fn find_by_id(
        &self,
        event_id: &EventId,
        tenant_id: &TenantId,
    ) -> Result<Option<EventRecord>, BookingDomainError> {
        let statement = r#"
            SELECT id, tenant_id, title, scheduled_at, capacity, organizer_id
            FROM events
            WHERE id = $1 AND tenant_id = $2
        "#;

        let row = sqlx::query(statement)
            .bind(event_id.value())
            .bind(tenant_id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| BookingDomainError::InfrastructureError(e.to_string()))?;

        row.as_ref().map(Self::record_from_row).transpose()
    }

    async fn list_by_organizer(
        &self,
        organizer_id: &UserId,
        tenant_id: &TenantId,
    ) -> Result<Vec<EventRecord>, BookingDomainError> {
        let statement = r#"
            SELECT id, tenant_id, title, scheduled_at, capacity, organizer_id
            FROM events
            WHERE organizer_id = $1 AND tenant_id = $2
            ORDER BY scheduled_at ASC
        "#;

        let rows = sqlx::query(statement)
            .bind(organizer_id.value())
            .bind(tenant_id.value())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| BookingDomainError::InfrastructureError(e.to_string()))?;

        rows.iter().map(Self::record_from_row).collect()
    }
}

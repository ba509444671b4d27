use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row, postgres::PgRow};
use uuid::Uuid;

use crate::booking::{
    domain::model::{
        entities::booking::Booking,
        enums::{booking_domain_error::BookingDomainError, booking_status::BookingStatus},
        value_objects::{
            booking_id::BookingId, event_id::EventId, tenant_id::TenantId, user_id::UserId,
        },
    },
    infrastructure::persistence::repositories::booking_repository::BookingRepository,
};

pub struct SqlxBookingRepositoryImpl {
    pool: PgPool,
}

impl SqlxBookingRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn booking_from_row(row: &PgRow) -> Result<Booking, BookingDomainError> {
        let status_raw: String = row
            .try_get("status")
            .map_err(|e| BookingDomainError::InfrastructureError(e.to_string()))?;
        let status = BookingStatus::from_str(&status_raw).map_err(|_| {
            BookingDomainError::InfrastructureError(format!(
                "unknown booking status '{status_raw}' in storage"
            ))
        })?;

        let id: Uuid = row
            .try_get("id")
            .map_err(|e| BookingDomainError::InfrastructureError(e.to_string()))?;
        let event_id: Uuid = row
            .try_get("event_id")
            .map_err(|e| BookingDomainError::InfrastructureError(e.to_string()))?;
        let user_id: Uuid = row
            .try_get("user_id")
            .map_err(|e| BookingDomainError::InfrastructureError(e.to_string()))?;
        let tenant_id: Uuid = row
            .try_get("tenant_id")
            .map_err(|e| BookingDomainError::InfrastructureError(e.to_string()))?;
        let created_at: DateTime<Utc> = row
            .try_get("created_at")
            .map_err(|e| BookingDomainError::InfrastructureError(e.to_string()))?;

        Ok(Booking::restore(
            BookingId::from_uuid(id),
            EventId::from_uuid(event_id),
            UserId::from_uuid(user_id),
            TenantId::from_uuid(tenant_id),
            status,
            created_at,
        ))
    }
}

#[async_trait]
impl BookingRepository for SqlxBookingRepositoryImpl {
    async fn insert(&self, booking: &Booking) -> Result<(), BookingDomainError> {
        let statement = r#"
            INSERT INTO bookings (id, event_id, user_id, tenant_id, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
        "#;

        sqlx::query(statement)
            .bind(booking.id().value())
            .bind(booking.event_id().value())
            .bind(booking.user_id().value())
            .bind(booking.tenant_id().value())
            .bind(booking.status().as_str())
            .bind(booking.created_at())
            .execute(&self.pool)
            .await
            .map_err(|e| BookingDomainError::InfrastructureError(e.to_string()))?;

        Ok(())
    }

    async fn find_by_id(
        &self,
        booking_id: &BookingId,
        tenant_id: &TenantId,
    ) -> Result<Option<Booking>, BookingDomainError> {
        let statement = r#"
            SELECT id, event_id, user_id, tenant_id, status, created_at
            FROM bookings
            WHERE id = $1 AND tenant_id = $2
        "#;

        let row = sqlx::query(statement)
            .bind(booking_id.value())
            .bind(tenant_id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| BookingDomainError::InfrastructureError(e.to_string()))?;

        row.as_ref().map(Self::booking_from_row).transpose()
    }

    async fn count_by_status(
        &self,
        event_id: &EventId,
        tenant_id: &TenantId,
        status: BookingStatus,
    ) -> Result<i64, BookingDomainError> {
        let statement = r#"
            SELECT COUNT(*)
            FROM bookings
            WHERE event_id = $1 AND tenant_id = $2 AND status = $3
        "#;

        let count = sqlx::query_scalar::<_, i64>(statement)
            .bind(event_id.value())
            .bind(tenant_id.value())
            .bind(status.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| BookingDomainError::InfrastructureError(e.to_string()))?;

        Ok(count)
    }

    async fn find_oldest_waitlisted(
        &self,
        event_id: &EventId,
        tenant_id: &TenantId,
    ) -> Result<Option<Booking>, BookingDomainError> {
        let statement = r#"
            SELECT id, event_id, user_id, tenant_id, status, created_at
            FROM bookings
            WHERE event_id = $1 AND tenant_id = $2 AND status = 'waitlisted'
            ORDER BY created_at ASC, id ASC
            LIMIT 1
        "#;

        let row = sqlx::query(statement)
            .bind(event_id.value())
            .bind(tenant_id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| BookingDomainError::InfrastructureError(e.to_string()))?;

        row.as_ref().map(Self::booking_from_row).transpose()
    }

    async fn transition_status(
        &self,
        booking_id: &BookingId,
        tenant_id: &TenantId,
        from: BookingStatus,
        to: BookingStatus,
    ) -> Result<bool, BookingDomainError> {
        let statement = r#"
            UPDATE bookings
            SET status = $4
            WHERE id = $1 AND tenant_id = $2 AND status = $3
        "#;

        let result = sqlx::query(statement)
            .bind(booking_id.value())
            .bind(tenant_id.value())
            .bind(from.as_str())
            .bind(to.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| BookingDomainError::InfrastructureError(e.to_string()))?;

        Ok(result.rows_affected() == 1)
    }

    async fn list_by_user(
        &self,
        user_id: &UserId,
        tenant_id: &TenantId,
    ) -> Result<Vec<Booking>, BookingDomainError> {
        let statement = r#"
            SELECT id, event_id, user_id, tenant_id, status, created_at
            FROM bookings
            WHERE user_id = $1 AND tenant_id = $2
            ORDER BY created_at DESC
        "#;

        let rows = sqlx::query(statement)
            .bind(user_id.value())
            .bind(tenant_id.value())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| BookingDomainError::InfrastructureError(e.to_string()))?;

        rows.iter().map(Self::booking_from_row).collect()
    }
}

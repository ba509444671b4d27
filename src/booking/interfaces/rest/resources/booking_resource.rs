use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::booking::domain::model::entities::booking::Booking;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct BookingResource {
    pub id: String,
    pub event_id: String,
    pub user_id: String,
    pub tenant_id: String,
    pub status: String,
    pub created_at: String,
}

impl From<&Booking> for BookingResource {
    fn from(booking: &Booking) -> Self {
        Self {
            id: booking.id().value().to_string(),
            event_id: booking.event_id().value().to_string(),
            user_id: booking.user_id().value().to_string(),
            tenant_id: booking.tenant_id().value().to_string(),
            status: booking.status().as_str().to_string(),
            created_at: booking.created_at().to_rfc3339(),
        }
    }
}

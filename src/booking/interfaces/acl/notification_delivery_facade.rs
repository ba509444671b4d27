use async_trait::async_trait;
use uuid::Uuid;

/// User-visible message category, one per booking transition.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NotificationKind {
    BookingConfirmed,
    Waitlisted,
    WaitlistPromoted,
    BookingCanceled,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BookingConfirmed => "booking_confirmed",
            Self::Waitlisted => "waitlisted",
            Self::WaitlistPromoted => "waitlist_promoted",
            Self::BookingCanceled => "booking_canceled",
        }
    }
}

#[derive(Clone, Debug)]
pub struct NotificationDelivery {
    pub user_id: Uuid,
    pub booking_id: Uuid,
    pub tenant_id: Uuid,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum NotificationDeliveryError {
    #[error("notification delivery failed: {0}")]
    DeliveryFailed(String),
}

/// Anti-corruption boundary into the notifications context; the booking
/// core only ever pushes deliveries through here.
#[async_trait]
pub trait NotificationDeliveryFacade: Send + Sync {
    async fn deliver(
        &self,
        delivery: NotificationDelivery,
    ) -> Result<(), NotificationDeliveryError>;
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BookingDomainError {
    #[error("booking id is invalid")]
    InvalidBookingId,

    #[error("event id is invalid")]
    InvalidEventId,

    #[error("user id is invalid")]
    InvalidUserId,

    #[error("tenant id is invalid")]
    InvalidTenantId,

    #[error("event not found")]
    EventNotFound,

    #[error("booking not found")]
    BookingNotFound,

    #[error("operation not allowed for this user")]
    Forbidden,

    #[error("booking is already canceled")]
    AlreadyCanceled,

    #[error("invalid booking status transition")]
    InvalidStatusTransition,

    #[error("booking state changed concurrently, retries exhausted")]
    Unavailable,

    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}

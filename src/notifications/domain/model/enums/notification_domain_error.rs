use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotificationDomainError {
    #[error("notification id is invalid")]
    InvalidNotificationId,

    #[error("user id is invalid")]
    InvalidUserId,

    #[error("tenant id is invalid")]
    InvalidTenantId,

    #[error("notification not found")]
    NotificationNotFound,

    #[error("operation not allowed for this user")]
    Forbidden,

    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}

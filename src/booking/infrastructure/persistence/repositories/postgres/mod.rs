pub mod sqlx_booking_log_repository_impl;
pub mod sqlx_booking_repository_impl;
pub mod sqlx_event_repository_impl;

pub mod notification_repository;
pub mod postgres;

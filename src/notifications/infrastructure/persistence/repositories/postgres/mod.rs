pub mod sqlx_notification_repository_impl;

pub mod notification_id;
pub mod tenant_id;
pub mod user_id;

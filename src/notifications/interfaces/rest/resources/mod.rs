pub mod notification_error_response_resource;
pub mod notification_resource;

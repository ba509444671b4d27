pub mod booking_error_response_resource;
pub mod booking_resource;
pub mod organizer_dashboard_resource;
pub mod submit_booking_request_resource;

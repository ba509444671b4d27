pub mod cancel_booking_command;
pub mod submit_booking_request_command;

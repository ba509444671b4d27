pub mod booking_command_service_impl;

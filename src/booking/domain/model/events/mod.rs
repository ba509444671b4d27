pub mod booking_status_changed_event;

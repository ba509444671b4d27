#[path = "support/harness.rs"]
mod harness;

pub use fixtures::{
    ATTENDEE_1_ID, ATTENDEE_2_ID, ATTENDEE_3_ID, EVENT_1_ID, EVENT_2_ID, ORGANIZER_1_ID,
    TENANT_A_ID, TENANT_B_ID, cancel_command, cancel_command_in_tenant, dashboard_query,
    event_with_capacity, missing_booking_cancel_command, my_bookings_query,
    past_event_with_capacity, submit_command, submit_command_in_tenant, submit_command_with_role,
    uuid_of,
};
pub use harness::{BookingHarness, create_booking_harness};

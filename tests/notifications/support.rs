#[path = "support/harness.rs"]
mod harness;

pub use fixtures::{
    ADMIN_1_ID, ATTENDEE_1_ID, ATTENDEE_2_ID, TENANT_A_ID, TENANT_B_ID, list_unread_query,
    mark_read_command, mark_read_command_in_tenant, missing_mark_read_command,
    unread_notification, unread_notification_aged, uuid_of,
};
pub use harness::{NotificationHarness, create_notification_harness};

/// What the caller may do at each operation boundary: attendees book and
/// cancel their own reservations, organizers and admins manage any
/// booking inside their tenant and read the dashboard.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RequesterRole {
    Attendee,
    Organizer,
    Admin,
}

impl RequesterRole {
    pub fn can_manage_tenant_bookings(&self) -> bool {
        matches!(self, Self::Organizer | Self::Admin)
    }
}

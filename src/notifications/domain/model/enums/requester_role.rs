#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RequesterRole {
    Attendee,
    Organizer,
    Admin,
}

impl RequesterRole {
    pub fn can_read_tenant_notifications(&self) -> bool {
        matches!(self, Self::Organizer | Self::Admin)
    }
}

use crate::booking::domain::model::{
    enums::{booking_domain_error::BookingDomainError, requester_role::RequesterRole},
    value_objects::{tenant_id::TenantId, user_id::UserId},
};

#[derive(Clone, Debug)]
pub struct OrganizerDashboardQuery {
    organizer_id: UserId,
    tenant_id: TenantId,
    requester_role: RequesterRole,
}

impl OrganizerDashboardQuery {
    pub fn new(
        organizer_id: String,
        tenant_id: String,
        requester_role: RequesterRole,
    ) -> Result<Self, BookingDomainError> {
        Ok(Self {
            organizer_id: UserId::new(organizer_id)?,
            tenant_id: TenantId::new(tenant_id)?,
            requester_role,
        })
    }

    pub fn organizer_id(&self) -> &UserId {
        &self.organizer_id
    }

    pub fn tenant_id(&self) -> &TenantId {
        &self.tenant_id
    }

    pub fn requester_role(&self) -> RequesterRole {
        self.requester_role
    }
}

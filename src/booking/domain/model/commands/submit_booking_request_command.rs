use crate::booking::domain::model::{
    enums::{booking_domain_error::BookingDomainError, requester_role::RequesterRole},
    value_objects::{event_id::EventId, tenant_id::TenantId, user_id::UserId},
};

#[derive(Clone, Debug)]
pub struct SubmitBookingRequestCommand {
    event_id: EventId,
    user_id: UserId,
    tenant_id: TenantId,
    requester_role: RequesterRole,
}

impl SubmitBookingRequestCommand {
    pub fn new(
        event_id: String,
        user_id: String,
        tenant_id: String,
        requester_role: RequesterRole,
    ) -> Result<Self, BookingDomainError> {
        Ok(Self {
            event_id: EventId::new(event_id)?,
            user_id: UserId::new(user_id)?,
            tenant_id: TenantId::new(tenant_id)?,
            requester_role,
        })
    }

    pub fn event_id(&self) -> &EventId {
        &self.event_id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn tenant_id(&self) -> &TenantId {
        &self.tenant_id
    }

    pub fn requester_role(&self) -> RequesterRole {
        self.requester_role
    }
}

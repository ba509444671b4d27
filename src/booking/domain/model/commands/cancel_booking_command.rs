use crate::booking::domain::model::{
    enums::{booking_domain_error::BookingDomainError, requester_role::RequesterRole},
    value_objects::{booking_id::BookingId, tenant_id::TenantId, user_id::UserId},
};

#[derive(Clone, Debug)]
pub struct CancelBookingCommand {
    booking_id: BookingId,
    requester_id: UserId,
    tenant_id: TenantId,
    requester_role: RequesterRole,
}

impl CancelBookingCommand {
    pub fn new(
        booking_id: String,
        requester_id: String,
        tenant_id: String,
        requester_role: RequesterRole,
    ) -> Result<Self, BookingDomainError> {
        Ok(Self {
            booking_id: BookingId::new(booking_id)?,
            requester_id: UserId::new(requester_id)?,
            tenant_id: TenantId::new(tenant_id)?,
            requester_role,
        })
    }

    pub fn booking_id(&self) -> &BookingId {
        &self.booking_id
    }

    pub fn requester_id(&self) -> &UserId {
        &self.requester_id
    }

    pub fn tenant_id(&self) -> &TenantId {
        &self.tenant_id
    }

    pub fn requester_role(&self) -> RequesterRole {
        self.requester_role
    }
}

use crate::booking::domain::model::{
    enums::booking_domain_error::BookingDomainError,
    value_objects::{tenant_id::TenantId, user_id::UserId},
};

#[derive(Clone, Debug)]
pub struct ListMyBookingsQuery {
    user_id: UserId,
    tenant_id: TenantId,
}

impl ListMyBookingsQuery {
    pub fn new(user_id: String, tenant_id: String) -> Result<Self, BookingDomainError> {
        Ok(Self {
            user_id: UserId::new(user_id)?,
            tenant_id: TenantId::new(tenant_id)?,
        })
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn tenant_id(&self) -> &TenantId {
        &self.tenant_id
    }
}

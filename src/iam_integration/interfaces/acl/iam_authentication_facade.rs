use async_trait::async_trait;

use crate::iam_integration::domain::model::{
    enums::principal_role::PrincipalRole,
    value_objects::{
        authenticated_tenant_id::AuthenticatedTenantId, authenticated_user_id::AuthenticatedUserId,
    },
};

/// The resolved identity scope every request runs under: who the caller
/// is, which tenant confines their reads and writes, and what they may do.
#[derive(Clone, Debug)]
pub struct VerifiedPrincipalContext {
    pub subject_id: AuthenticatedUserId,
    pub tenant_id: AuthenticatedTenantId,
    pub role: PrincipalRole,
    pub jti: Option<String>,
    pub exp_epoch_seconds: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum IamIntegrationError {
    #[error("invalid token: {0}")]
    InvalidToken(String),

    #[error("iam unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait IamAuthenticationFacade: Send + Sync {
    async fn resolve_principal(
        &self,
        access_token: &str,
    ) -> Result<VerifiedPrincipalContext, IamIntegrationError>;
}

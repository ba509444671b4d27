pub mod authenticated_tenant_id;
pub mod authenticated_user_id;

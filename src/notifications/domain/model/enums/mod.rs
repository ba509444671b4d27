pub mod notification_domain_error;
pub mod notification_kind;
pub mod requester_role;

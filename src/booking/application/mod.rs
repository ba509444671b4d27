pub mod acl;
pub mod command_services;
pub mod concurrency;
pub mod dispatchers;
pub mod query_services;

pub mod notification_query_service_impl;

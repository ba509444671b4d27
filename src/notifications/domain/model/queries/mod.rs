pub mod list_unread_notifications_query;

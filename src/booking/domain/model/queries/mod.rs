pub mod list_my_bookings_query;
pub mod organizer_dashboard_query;

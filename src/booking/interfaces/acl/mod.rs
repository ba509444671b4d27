pub mod notification_delivery_facade;

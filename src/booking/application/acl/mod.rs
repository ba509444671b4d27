pub mod notification_delivery_facade_impl;

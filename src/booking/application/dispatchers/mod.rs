pub mod booking_side_effect_dispatcher_impl;

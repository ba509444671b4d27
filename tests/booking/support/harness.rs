use std::sync::Arc;

use booking_axum_api::booking::application::{
    command_services::booking_command_service_impl::BookingCommandServiceImpl,
    concurrency::event_lock_registry::EventLockRegistry,
    dispatchers::booking_side_effect_dispatcher_impl::BookingSideEffectDispatcherImpl,
    query_services::booking_query_service_impl::BookingQueryServiceImpl,
};

use super::fakes::{
    FakeBookingLogRepository, FakeBookingRepository, FakeEventRepository,
    FakeNotificationDeliveryFacade,
};

pub struct BookingHarness {
    pub event_repository: Arc<FakeEventRepository>,
    pub booking_repository: Arc<FakeBookingRepository>,
    pub log_repository: Arc<FakeBookingLogRepository>,
    pub notification_facade: Arc<FakeNotificationDeliveryFacade>,
    pub service: Arc<BookingCommandServiceImpl>,
    pub query_service: BookingQueryServiceImpl,
}

/// Wires the real command/query services and the real side-effect
/// dispatcher to in-memory fakes.
pub fn create_booking_harness() -> BookingHarness {
    let event_repository = Arc::new(FakeEventRepository::new());
    let booking_repository = Arc::new(FakeBookingRepository::new());
    let log_repository = Arc::new(FakeBookingLogRepository::new());
    let notification_facade = Arc::new(FakeNotificationDeliveryFacade::new());

    let dispatcher = Arc::new(BookingSideEffectDispatcherImpl::new(
        log_repository.clone(),
        notification_facade.clone(),
    ));

    let service = Arc::new(BookingCommandServiceImpl::new(
        booking_repository.clone(),
        event_repository.clone(),
        dispatcher,
        Arc::new(EventLockRegistry::new()),
    ));

    let query_service = BookingQueryServiceImpl::new(
        booking_repository.clone(),
        event_repository.clone(),
        log_repository.clone(),
    );

    BookingHarness {
        event_repository,
        booking_repository,
        log_repository,
        notification_facade,
        service,
        query_service,
    }
}

use std::sync::Arc;

use booking_axum_api::notifications::application::{
    command_services::notification_command_service_impl::NotificationCommandServiceImpl,
    query_services::notification_query_service_impl::NotificationQueryServiceImpl,
};

use super::fakes::FakeNotificationRepository;

pub struct NotificationHarness {
    pub repository: Arc<FakeNotificationRepository>,
    pub command_service: NotificationCommandServiceImpl,
    pub query_service: NotificationQueryServiceImpl,
}

pub fn create_notification_harness() -> NotificationHarness {
    let repository = Arc::new(FakeNotificationRepository::new());

    let command_service = NotificationCommandServiceImpl::new(repository.clone());
    let query_service = NotificationQueryServiceImpl::new(repository.clone());

    NotificationHarness {
        repository,
        command_service,
        query_service,
    }
}

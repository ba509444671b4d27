use std::{sync::Arc, time::Duration};

use axum::Router;
use sqlx::PgPool;

use crate::{
    booking::{
        application::{
            acl::notification_delivery_facade_impl::NotificationDeliveryFacadeImpl,
            command_services::booking_command_service_impl::BookingCommandServiceImpl,
            concurrency::event_lock_registry::EventLockRegistry,
            dispatchers::booking_side_effect_dispatcher_impl::BookingSideEffectDispatcherImpl,
            query_services::booking_query_service_impl::BookingQueryServiceImpl,
        },
        infrastructure::persistence::repositories::postgres::{
            sqlx_booking_log_repository_impl::SqlxBookingLogRepositoryImpl,
            sqlx_booking_repository_impl::SqlxBookingRepositoryImpl,
            sqlx_event_repository_impl::SqlxEventRepositoryImpl,
        },
        interfaces::rest::controllers::booking_rest_controller::{
            BookingRestControllerState, router,
        },
    },
    config::app_config::AppConfig,
    iam_integration::application::acl::grpc_iam_authentication_facade_impl::GrpcIamAuthenticationFacadeImpl,
    notifications::infrastructure::persistence::repositories::postgres::sqlx_notification_repository_impl::SqlxNotificationRepositoryImpl,
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub async fn build_booking_router(config: &AppConfig) -> Result<Router, String> {
    let pool = PgPool::connect(&config.database_url())
        .await
        .map_err(|e| e.to_string())?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(|e| e.to_string())?;

    let booking_repository = Arc::new(SqlxBookingRepositoryImpl::new(pool.clone()));
    let event_repository = Arc::new(SqlxEventRepositoryImpl::new(pool.clone()));
    let log_repository = Arc::new(SqlxBookingLogRepositoryImpl::new(pool.clone()));
    let notification_repository = Arc::new(SqlxNotificationRepositoryImpl::new(pool));

    let notification_facade = Arc::new(NotificationDeliveryFacadeImpl::new(
        notification_repository,
    ));
    let side_effect_dispatcher = Arc::new(BookingSideEffectDispatcherImpl::new(
        log_repository.clone(),
        notification_facade,
    ));

    let command_service = Arc::new(BookingCommandServiceImpl::new(
        booking_repository.clone(),
        event_repository.clone(),
        side_effect_dispatcher,
        Arc::new(EventLockRegistry::new()),
    ));
    let query_service = Arc::new(BookingQueryServiceImpl::new(
        booking_repository,
        event_repository,
        log_repository,
    ));

    let iam_authentication_facade = Arc::new(GrpcIamAuthenticationFacadeImpl::new(
        config.iam_grpc_endpoint.clone(),
        Duration::from_millis(config.iam_timeout_ms),
        Duration::from_secs(config.iam_cache_ttl_seconds),
        config.iam_failure_threshold,
        Duration::from_secs(config.iam_circuit_open_seconds),
    ));

    Ok(router(BookingRestControllerState {
        command_service,
        query_service,
        iam_authentication_facade,
    }))
}

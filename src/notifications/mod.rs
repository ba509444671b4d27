use std::{sync::Arc, time::Duration};

use axum::Router;
use sqlx::PgPool;

use crate::{
    config::app_config::AppConfig,
    iam_integration::application::acl::grpc_iam_authentication_facade_impl::GrpcIamAuthenticationFacadeImpl,
    notifications::{
        application::{
            command_services::notification_command_service_impl::NotificationCommandServiceImpl,
            query_services::notification_query_service_impl::NotificationQueryServiceImpl,
        },
        infrastructure::persistence::repositories::postgres::sqlx_notification_repository_impl::SqlxNotificationRepositoryImpl,
        interfaces::rest::controllers::notification_rest_controller::{
            NotificationRestControllerState, router,
        },
    },
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub async fn build_notifications_router(config: &AppConfig) -> Result<Router, String> {
    let pool = PgPool::connect(&config.database_url())
        .await
        .map_err(|e| e.to_string())?;

    let notification_repository = Arc::new(SqlxNotificationRepositoryImpl::new(pool));

    let command_service = Arc::new(NotificationCommandServiceImpl::new(
        notification_repository.clone(),
    ));
    let query_service = Arc::new(NotificationQueryServiceImpl::new(notification_repository));

    let iam_authentication_facade = Arc::new(GrpcIamAuthenticationFacadeImpl::new(
        config.iam_grpc_endpoint.clone(),
        Duration::from_millis(config.iam_timeout_ms),
        Duration::from_secs(config.iam_cache_ttl_seconds),
        config.iam_failure_threshold,
        Duration::from_secs(config.iam_circuit_open_seconds),
    ));

    Ok(router(NotificationRestControllerState {
        command_service,
        query_service,
        iam_authentication_facade,
    }))
}

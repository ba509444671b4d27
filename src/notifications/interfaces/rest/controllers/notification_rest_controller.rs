use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
};

use crate::{
    iam_integration::{
        domain::model::enums::principal_role::PrincipalRole,
        interfaces::acl::iam_authentication_facade::{
            IamAuthenticationFacade, IamIntegrationError, VerifiedPrincipalContext,
        },
    },
    notifications::{
        domain::{
            model::{
                commands::mark_notification_read_command::MarkNotificationReadCommand,
                enums::{
                    notification_domain_error::NotificationDomainError,
                    requester_role::RequesterRole,
                },
                queries::list_unread_notifications_query::ListUnreadNotificationsQuery,
            },
            services::{
                notification_command_service::NotificationCommandService,
                notification_query_service::NotificationQueryService,
            },
        },
        interfaces::rest::resources::{
            notification_error_response_resource::NotificationErrorResponseResource,
            notification_resource::NotificationResource,
        },
    },
    shared::interfaces::rest::bearer_token::bearer_token,
};

#[derive(Clone)]
pub struct NotificationRestControllerState {
    pub command_service: Arc<dyn NotificationCommandService>,
    pub query_service: Arc<dyn NotificationQueryService>,
    pub iam_authentication_facade: Arc<dyn IamAuthenticationFacade>,
}

pub fn router(state: NotificationRestControllerState) -> Router {
    Router::new()
        .route("/notifications/my", get(list_my_notifications))
        .route(
            "/notifications/:notification_id/read",
            post(mark_notification_read),
        )
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/notifications/my",
    tag = "notifications",
    security(
        ("bearerAuth" = [])
    ),
    responses(
        (status = 200, description = "Caller's unread notifications, newest first", body = [NotificationResource]),
        (status = 401, description = "Missing or invalid auth", body = NotificationErrorResponseResource),
        (status = 500, description = "Infrastructure error", body = NotificationErrorResponseResource),
        (status = 503, description = "IAM unavailable", body = NotificationErrorResponseResource)
    )
)]
pub async fn list_my_notifications(
    State(state): State<NotificationRestControllerState>,
    headers: HeaderMap,
) -> Result<Json<Vec<NotificationResource>>, (StatusCode, Json<NotificationErrorResponseResource>)>
{
    let principal = authenticate(&state, &headers).await?;

    let query = ListUnreadNotificationsQuery::new(
        principal.subject_id.as_string(),
        principal.tenant_id.as_string(),
    )
    .map_err(map_domain_error)?;

    let notifications = state
        .query_service
        .handle_list_unread(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(
        notifications.iter().map(NotificationResource::from).collect(),
    ))
}

#[utoipa::path(
    post,
    path = "/notifications/{notification_id}/read",
    tag = "notifications",
    params(
        ("notification_id" = String, Path, description = "Notification id")
    ),
    security(
        ("bearerAuth" = [])
    ),
    responses(
        (status = 200, description = "Notification marked as read", body = NotificationResource),
        (status = 400, description = "Invalid request", body = NotificationErrorResponseResource),
        (status = 401, description = "Missing or invalid auth", body = NotificationErrorResponseResource),
        (status = 403, description = "Attendees can only mark their own notifications", body = NotificationErrorResponseResource),
        (status = 404, description = "Notification not found", body = NotificationErrorResponseResource),
        (status = 500, description = "Infrastructure error", body = NotificationErrorResponseResource),
        (status = 503, description = "IAM unavailable", body = NotificationErrorResponseResource)
    )
)]
pub async fn mark_notification_read(
    State(state): State<NotificationRestControllerState>,
    Path(notification_id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<NotificationResource>, (StatusCode, Json<NotificationErrorResponseResource>)> {
    let principal = authenticate(&state, &headers).await?;

    let command = MarkNotificationReadCommand::new(
        notification_id,
        principal.subject_id.as_string(),
        principal.tenant_id.as_string(),
        requester_role(&principal),
    )
    .map_err(map_domain_error)?;

    let notification = state
        .command_service
        .handle_mark_read(command)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(NotificationResource::from(&notification)))
}

async fn authenticate(
    state: &NotificationRestControllerState,
    headers: &HeaderMap,
) -> Result<VerifiedPrincipalContext, (StatusCode, Json<NotificationErrorResponseResource>)> {
    let token = bearer_token(headers).ok_or_else(|| {
        (
            StatusCode::UNAUTHORIZED,
            Json(NotificationErrorResponseResource {
                message: "missing bearer token".to_string(),
            }),
        )
    })?;

    state
        .iam_authentication_facade
        .resolve_principal(token)
        .await
        .map_err(map_iam_error)
}

fn requester_role(principal: &VerifiedPrincipalContext) -> RequesterRole {
    match principal.role {
        PrincipalRole::Attendee => RequesterRole::Attendee,
        PrincipalRole::Organizer => RequesterRole::Organizer,
        PrincipalRole::Admin => RequesterRole::Admin,
    }
}

fn map_iam_error(
    error: IamIntegrationError,
) -> (StatusCode, Json<NotificationErrorResponseResource>) {
    let status = match error {
        IamIntegrationError::InvalidToken(_) => StatusCode::UNAUTHORIZED,
        IamIntegrationError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
    };

    (
        status,
        Json(NotificationErrorResponseResource {
            message: error.to_string(),
        }),
    )
}

fn map_domain_error(
    error: NotificationDomainError,
) -> (StatusCode, Json<NotificationErrorResponseResource>) {
    let status = match error {
        NotificationDomainError::InvalidNotificationId
        | NotificationDomainError::InvalidUserId
        | NotificationDomainError::InvalidTenantId => StatusCode::BAD_REQUEST,
        NotificationDomainError::NotificationNotFound => StatusCode::NOT_FOUND,
        NotificationDomainError::Forbidden => StatusCode::FORBIDDEN,
        NotificationDomainError::InfrastructureError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(NotificationErrorResponseResource {
            message: error.to_string(),
        }),
    )
}

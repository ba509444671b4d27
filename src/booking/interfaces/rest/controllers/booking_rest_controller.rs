use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
};
use validator::Validate;

use crate::{
    booking::{
        domain::{
            model::{
                commands::{
                    cancel_booking_command::CancelBookingCommand,
                    submit_booking_request_command::SubmitBookingRequestCommand,
                },
                enums::{
                    booking_domain_error::BookingDomainError, requester_role::RequesterRole,
                },
                queries::{
                    list_my_bookings_query::ListMyBookingsQuery,
                    organizer_dashboard_query::OrganizerDashboardQuery,
                },
            },
            services::{
                booking_command_service::BookingCommandService,
                booking_query_service::BookingQueryService,
            },
        },
        interfaces::rest::resources::{
            booking_error_response_resource::BookingErrorResponseResource,
            booking_resource::BookingResource,
            organizer_dashboard_resource::OrganizerDashboardResource,
            submit_booking_request_resource::SubmitBookingRequestResource,
        },
    },
    iam_integration::{
        domain::model::enums::principal_role::PrincipalRole,
        interfaces::acl::iam_authentication_facade::{
            IamAuthenticationFacade, IamIntegrationError, VerifiedPrincipalContext,
        },
    },
    shared::interfaces::rest::bearer_token::bearer_token,
};

#[derive(Clone)]
pub struct BookingRestControllerState {
    pub command_service: Arc<dyn BookingCommandService>,
    pub query_service: Arc<dyn BookingQueryService>,
    pub iam_authentication_facade: Arc<dyn IamAuthenticationFacade>,
}

pub fn router(state: BookingRestControllerState) -> Router {
    Router::new()
        .route("/bookings", post(submit_booking_request))
        .route("/bookings/my", get(list_my_bookings))
        .route("/bookings/:booking_id/cancel", post(cancel_booking))
        .route("/dashboard/organizer", get(organizer_dashboard))
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/bookings",
    tag = "bookings",
    request_body = SubmitBookingRequestResource,
    security(
        ("bearerAuth" = [])
    ),
    responses(
        (status = 201, description = "Booking admitted (confirmed or waitlisted)", body = BookingResource),
        (status = 400, description = "Invalid request", body = BookingErrorResponseResource),
        (status = 401, description = "Missing or invalid auth", body = BookingErrorResponseResource),
        (status = 403, description = "Only attendees can book events", body = BookingErrorResponseResource),
        (status = 404, description = "Event not found", body = BookingErrorResponseResource),
        (status = 500, description = "Infrastructure error", body = BookingErrorResponseResource),
        (status = 503, description = "IAM unavailable or retries exhausted", body = BookingErrorResponseResource)
    )
)]
pub async fn submit_booking_request(
    State(state): State<BookingRestControllerState>,
    headers: HeaderMap,
    Json(request): Json<SubmitBookingRequestResource>,
) -> Result<(StatusCode, Json<BookingResource>), (StatusCode, Json<BookingErrorResponseResource>)> {
    if let Err(validation_error) = request.validate() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(BookingErrorResponseResource {
                message: validation_error.to_string(),
            }),
        ));
    }

    let principal = authenticate(&state, &headers).await?;

    let command = SubmitBookingRequestCommand::new(
        request.event_id,
        principal.subject_id.as_string(),
        principal.tenant_id.as_string(),
        requester_role(&principal),
    )
    .map_err(map_domain_error)?;

    let booking = state
        .command_service
        .handle_submit_request(command)
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(BookingResource::from(&booking))))
}

#[utoipa::path(
    post,
    path = "/bookings/{booking_id}/cancel",
    tag = "bookings",
    params(
        ("booking_id" = String, Path, description = "Booking id")
    ),
    security(
        ("bearerAuth" = [])
    ),
    responses(
        (status = 200, description = "Booking canceled", body = BookingResource),
        (status = 400, description = "Invalid request", body = BookingErrorResponseResource),
        (status = 401, description = "Missing or invalid auth", body = BookingErrorResponseResource),
        (status = 403, description = "Attendees can only cancel their own bookings", body = BookingErrorResponseResource),
        (status = 404, description = "Booking not found", body = BookingErrorResponseResource),
        (status = 409, description = "Booking already canceled", body = BookingErrorResponseResource),
        (status = 500, description = "Infrastructure error", body = BookingErrorResponseResource),
        (status = 503, description = "IAM unavailable or retries exhausted", body = BookingErrorResponseResource)
    )
)]
pub async fn cancel_booking(
    State(state): State<BookingRestControllerState>,
    Path(booking_id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<BookingResource>, (StatusCode, Json<BookingErrorResponseResource>)> {
    let principal = authenticate(&state, &headers).await?;

    let command = CancelBookingCommand::new(
        booking_id,
        principal.subject_id.as_string(),
        principal.tenant_id.as_string(),
        requester_role(&principal),
    )
    .map_err(map_domain_error)?;

    let booking = state
        .command_service
        .handle_cancel(command)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(BookingResource::from(&booking)))
}

#[utoipa::path(
    get,
    path = "/bookings/my",
    tag = "bookings",
    security(
        ("bearerAuth" = [])
    ),
    responses(
        (status = 200, description = "Caller's bookings, newest first", body = [BookingResource]),
        (status = 401, description = "Missing or invalid auth", body = BookingErrorResponseResource),
        (status = 500, description = "Infrastructure error", body = BookingErrorResponseResource),
        (status = 503, description = "IAM unavailable", body = BookingErrorResponseResource)
    )
)]
pub async fn list_my_bookings(
    State(state): State<BookingRestControllerState>,
    headers: HeaderMap,
) -> Result<Json<Vec<BookingResource>>, (StatusCode, Json<BookingErrorResponseResource>)> {
    let principal = authenticate(&state, &headers).await?;

    let query = ListMyBookingsQuery::new(
        principal.subject_id.as_string(),
        principal.tenant_id.as_string(),
    )
    .map_err(map_domain_error)?;

    let bookings = state
        .query_service
        .handle_list_my_bookings(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(bookings.iter().map(BookingResource::from).collect()))
}

#[utoipa::path(
    get,
    path = "/dashboard/organizer",
    tag = "bookings",
    security(
        ("bearerAuth" = [])
    ),
    responses(
        (status = 200, description = "Organizer dashboard with derived attendance aggregates", body = OrganizerDashboardResource),
        (status = 401, description = "Missing or invalid auth", body = BookingErrorResponseResource),
        (status = 403, description = "Only organizers and admins can access the dashboard", body = BookingErrorResponseResource),
        (status = 500, description = "Infrastructure error", body = BookingErrorResponseResource),
        (status = 503, description = "IAM unavailable", body = BookingErrorResponseResource)
    )
)]
pub async fn organizer_dashboard(
    State(state): State<BookingRestControllerState>,
    headers: HeaderMap,
) -> Result<Json<OrganizerDashboardResource>, (StatusCode, Json<BookingErrorResponseResource>)> {
    let principal = authenticate(&state, &headers).await?;

    let query = OrganizerDashboardQuery::new(
        principal.subject_id.as_string(),
        principal.tenant_id.as_string(),
        requester_role(&principal),
    )
    .map_err(map_domain_error)?;

    let dashboard = state
        .query_service
        .handle_organizer_dashboard(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(OrganizerDashboardResource::from(&dashboard)))
}

async fn authenticate(
    state: &BookingRestControllerState,
    headers: &HeaderMap,
) -> Result<VerifiedPrincipalContext, (StatusCode, Json<BookingErrorResponseResource>)> {
    let token = bearer_token(headers).ok_or_else(|| {
        (
            StatusCode::UNAUTHORIZED,
            Json(BookingErrorResponseResource {
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
) -> (StatusCode, Json<BookingErrorResponseResource>) {
    let status = match error {
        IamIntegrationError::InvalidToken(_) => StatusCode::UNAUTHORIZED,
        IamIntegrationError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
    };

    (
        status,
        Json(BookingErrorResponseResource {
            message: error.to_string(),
        }),
    )
}

fn map_domain_error(
    error: BookingDomainError,
) -> (StatusCode, Json<BookingErrorResponseResource>) {
    let status = match error {
        BookingDomainError::InvalidBookingId
        | BookingDomainError::InvalidEventId
        | BookingDomainError::InvalidUserId
        | BookingDomainError::InvalidTenantId => StatusCode::BAD_REQUEST,
        BookingDomainError::EventNotFound | BookingDomainError::BookingNotFound => {
            StatusCode::NOT_FOUND
        }
        BookingDomainError::Forbidden => StatusCode::FORBIDDEN,
        BookingDomainError::AlreadyCanceled | BookingDomainError::InvalidStatusTransition => {
            StatusCode::CONFLICT
        }
        BookingDomainError::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
        BookingDomainError::InfrastructureError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(BookingErrorResponseResource {
            message: error.to_string(),
        }),
    )
}

use axum::Router;
use booking_axum_api::{
    booking::{
        build_booking_router,
        interfaces::rest::resources::{
            booking_error_response_resource::BookingErrorResponseResource,
            booking_resource::BookingResource,
            organizer_dashboard_resource::{
                DashboardSummaryAnalyticsResource, EventAttendanceSummaryResource,
                OrganizerDashboardResource, RecentActivityResource,
            },
            submit_booking_request_resource::SubmitBookingRequestResource,
        },
    },
    config::app_config::AppConfig,
    notifications::{
        build_notifications_router,
        interfaces::rest::resources::{
            notification_error_response_resource::NotificationErrorResponseResource,
            notification_resource::NotificationResource,
        },
    },
    shared::interfaces::rest::openapi::security::BearerSecurityAddon,
};
use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        booking_axum_api::booking::interfaces::rest::controllers::booking_rest_controller::submit_booking_request,
        booking_axum_api::booking::interfaces::rest::controllers::booking_rest_controller::cancel_booking,
        booking_axum_api::booking::interfaces::rest::controllers::booking_rest_controller::list_my_bookings,
        booking_axum_api::booking::interfaces::rest::controllers::booking_rest_controller::organizer_dashboard,
        booking_axum_api::notifications::interfaces::rest::controllers::notification_rest_controller::list_my_notifications,
        booking_axum_api::notifications::interfaces::rest::controllers::notification_rest_controller::mark_notification_read
    ),
    components(
        schemas(
            SubmitBookingRequestResource,
            BookingResource,
            BookingErrorResponseResource,
            OrganizerDashboardResource,
            EventAttendanceSummaryResource,
            DashboardSummaryAnalyticsResource,
            RecentActivityResource,
            NotificationResource,
            NotificationErrorResponseResource
        )
    ),
    tags(
        (name = "bookings", description = "Capacity-limited admission and waitlist bounded context"),
        (name = "notifications", description = "User notifications bounded context")
    ),
    modifiers(&BearerSecurityAddon)
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = AppConfig::from_env();

    let booking_router = build_booking_router(&config)
        .await
        .expect("failed to build booking router");
    let notifications_router = build_notifications_router(&config)
        .await
        .expect("failed to build notifications router");

    let app = Router::new()
        .merge(booking_router)
        .merge(notifications_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind server address");

    println!("Servidor corriendo en http://localhost:{}", config.port);
    println!(
        "Swagger UI disponible en http://localhost:{}/swagger-ui",
        config.port
    );

    axum::serve(listener, app)
        .await
        .expect("failed to start axum server");
}

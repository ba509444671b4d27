pub mod booking;
pub mod config;
pub mod iam_integration;
pub mod notifications;
pub mod shared;
pub mod iam_grpc {
    tonic::include_proto!("principal_resolution");
}

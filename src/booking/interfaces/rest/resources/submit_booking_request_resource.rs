use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct SubmitBookingRequestResource {
    #[validate(length(min = 1))]
    pub event_id: String,
}

use serde::Serialize;
use utoipa::ToSchema;

/// Envelope of every 2xx JSON body.
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    #[schema(example = true)]
    pub success: bool,
    pub data: T,
}

/// Envelope of every error body.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// One of `DEMO_MODE`, `NOT_FOUND`, `POST_NOT_FOUND`, `VALIDATION_ERROR`,
    /// `CONTENT_SOURCE_ERROR`, `ADMIN_MODE_REQUIRED`, `INVALID_CREDENTIALS`,
    /// `NOT_CONFIGURED`, `IDENTITY_PROVIDER_ERROR`, `INTERNAL_ERROR`.
    #[schema(example = "DEMO_MODE")]
    pub code: String,

    /// Text suitable for a transient notification.
    #[schema(example = "Editing is unavailable in demo mode")]
    pub message: String,
}

use actix_web::HttpResponse;
use std::fmt::Display;
use tracing::error;

use crate::modules::content::application::ports::incoming::use_cases::WriteError;
use crate::shared::api::ApiResponse;

/// Maps a rejected content write onto the response envelope. `what` names
/// the record kind in messages.
pub fn write_error_response(what: impl Display, err: WriteError) -> HttpResponse {
    match err {
        WriteError::DemoMode => ApiResponse::service_unavailable("DEMO_MODE", &err.to_string()),

        WriteError::NotFound(id) => {
            ApiResponse::not_found("NOT_FOUND", &format!("No {} with id '{}'", what, id))
        }

        WriteError::InvalidPatch(msg) => ApiResponse::bad_request("VALIDATION_ERROR", &msg),

        WriteError::Source(msg) => {
            error!("Failed to write {}: {}", what, msg);
            ApiResponse::bad_gateway(
                "CONTENT_SOURCE_ERROR",
                &format!("Could not save {}: {}", what, msg),
            )
        }
    }
}

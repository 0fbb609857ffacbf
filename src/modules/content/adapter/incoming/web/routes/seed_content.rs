use actix_web::{post, web, Responder};
use tracing::info;

use super::write_error::write_error_response;
use crate::modules::admin::adapter::incoming::web::extractors::AdminSession;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Overwrites the writable source with the default record set.
#[utoipa::path(
    post,
    path = "/api/dashboard/seed",
    tag = "dashboard",
    responses(
        (status = 200, description = "Default content restored and reloaded"),
        (status = 403, description = "Admin mode is off", body = crate::api::schemas::ErrorResponse),
        (status = 502, description = "Content API failed", body = crate::api::schemas::ErrorResponse),
        (status = 503, description = "Demo mode", body = crate::api::schemas::ErrorResponse)
    )
)]
#[post("/api/dashboard/seed")]
pub async fn seed_content_handler(
    _admin: AdminSession,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.content.source.seed().await {
        Ok(report) => {
            info!("Content seeded on {}", report.status.active);
            ApiResponse::success(report)
        }
        Err(e) => write_error_response("content", e),
    }
}

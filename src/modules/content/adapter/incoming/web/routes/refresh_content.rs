use actix_web::{post, web, Responder};
use tracing::info;

use crate::shared::api::ApiResponse;
use crate::AppState;

/// Re-probes the backends and reloads every section.
#[utoipa::path(
    post,
    path = "/api/refresh",
    tag = "content",
    responses(
        (status = 200, description = "Refresh report: new source status and sections served from demo data")
    )
)]
#[post("/api/refresh")]
pub async fn refresh_content_handler(data: web::Data<AppState>) -> impl Responder {
    let report = data.content.source.refresh().await;
    info!(
        active = %report.status.active,
        api_available = report.status.api_available,
        fallbacks = report.fallbacks.len(),
        "Content refreshed"
    );
    ApiResponse::success(report)
}

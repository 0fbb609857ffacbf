use actix_web::{get, web, Responder};

use crate::modules::admin::adapter::incoming::web::extractors::AdminSession;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Last computed summary; refreshed in the background on an interval.
#[utoipa::path(
    get,
    path = "/api/dashboard/analytics",
    tag = "dashboard",
    responses(
        (status = 200, description = "Content counts, top posts and technologies, recent activity"),
        (status = 403, description = "Admin mode is off", body = crate::api::schemas::ErrorResponse)
    )
)]
#[get("/api/dashboard/analytics")]
pub async fn get_analytics_handler(
    _admin: AdminSession,
    data: web::Data<AppState>,
) -> impl Responder {
    ApiResponse::success(data.content.analytics.current().await)
}

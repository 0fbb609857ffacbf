use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;

use crate::modules::content::domain::source::DataOrigin;
use crate::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReadinessResponse {
    status: &'static str,
    content_source: DataOrigin,
    api_available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    banner: Option<&'static str>,
}

/// LIVENESS PROBE
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Reports the active content source
/// - Always 200: demo content is still a working service
#[get("/ready")]
pub async fn readiness(data: web::Data<AppState>) -> impl Responder {
    let status = data.content.source.status();

    HttpResponse::Ok().json(ReadinessResponse {
        status: if status.banner().is_none() { "ok" } else { "degraded" },
        content_source: status.active,
        api_available: status.api_available,
        banner: status.banner(),
    })
}

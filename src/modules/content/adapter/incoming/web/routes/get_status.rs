use actix_web::{get, web, Responder};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::admin::adapter::incoming::web::extractors::ViewerMode;
use crate::modules::content::domain::source::{DataOrigin, SourceStatus};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusView {
    #[schema(value_type = String, example = "remote")]
    pub active: DataOrigin,
    pub api_available: bool,
    pub admin_mode: bool,
    /// Whether writes are currently accepted.
    pub editable: bool,
    #[schema(value_type = Option<String>)]
    pub last_probe_at: Option<DateTime<Utc>>,
    pub banner: Option<String>,
}

impl StatusView {
    pub fn new(status: &SourceStatus, admin_mode: bool) -> Self {
        Self {
            active: status.active,
            api_available: status.api_available,
            admin_mode,
            editable: status.accepts_writes(),
            last_probe_at: status.last_probe_at,
            banner: status.banner().map(str::to_string),
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/status",
    tag = "content",
    responses(
        (status = 200, description = "Active content source and admin mode", body = inline(crate::api::schemas::SuccessResponse<StatusView>))
    )
)]
#[get("/api/status")]
pub async fn get_status_handler(viewer: ViewerMode, data: web::Data<AppState>) -> impl Responder {
    let status = data.content.source.status();
    ApiResponse::success(StatusView::new(&status, viewer.admin))
}

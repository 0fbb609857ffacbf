use actix_web::{post, web, Responder};
use tracing::info;

use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    post,
    path = "/api/admin/logout",
    tag = "admin",
    responses(
        (status = 200, description = "Admin mode disabled", body = inline(crate::api::schemas::SuccessResponse<crate::modules::admin::domain::session::AdminStatus>))
    )
)]
#[post("/api/admin/logout")]
pub async fn logout_admin_handler(data: web::Data<AppState>) -> impl Responder {
    let status = data.admin.logout().await;
    info!("Admin mode disabled");
    ApiResponse::success(status)
}

use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;

use super::admin_access_error_response;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AdminLoginRequest {
    #[schema(example = "correct horse battery staple")]
    pub password: String,
}

#[utoipa::path(
    post,
    path = "/api/admin/login",
    tag = "admin",
    request_body = AdminLoginRequest,
    responses(
        (
            status = 200,
            description = "Admin mode enabled",
            body = inline(crate::api::schemas::SuccessResponse<crate::modules::admin::domain::session::AdminStatus>),
            example = json!({
                "success": true,
                "data": { "adminMode": true, "user": null, "remoteSignIn": false }
            })
        ),
        (status = 401, description = "Wrong password", body = crate::api::schemas::ErrorResponse),
        (status = 503, description = "No admin password configured", body = crate::api::schemas::ErrorResponse)
    )
)]
#[post("/api/admin/login")]
pub async fn login_admin_handler(
    req: web::Json<AdminLoginRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.admin.login_with_password(&req.password).await {
        Ok(status) => {
            info!("Admin mode enabled with password");
            ApiResponse::success(status)
        }
        Err(e) => admin_access_error_response(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::shared::api::custom_json_config;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::STUB_ADMIN_PASSWORD;

    async fn post_login(body: Value) -> (StatusCode, Value) {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .app_data(custom_json_config())
                .service(login_admin_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/login")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn correct_password_enables_admin_mode() {
        let (status, body) = post_login(json!({ "password": STUB_ADMIN_PASSWORD })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["adminMode"], true);
    }

    #[actix_web::test]
    async fn wrong_password_is_401() {
        let (status, body) = post_login(json!({ "password": "nope" })).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["code"], "INVALID_CREDENTIALS");
    }

    #[actix_web::test]
    async fn missing_password_field_is_validation_error() {
        let (status, body) = post_login(json!({})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}

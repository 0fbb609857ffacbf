use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;

use super::admin_access_error_response;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AdminSignInRequest {
    #[schema(example = "owner@example.com")]
    pub email: String,
    pub password: String,
}

/// Email/password sign-in against the remote identity provider.
#[utoipa::path(
    post,
    path = "/api/admin/sign-in",
    tag = "admin",
    request_body = AdminSignInRequest,
    responses(
        (status = 200, description = "Signed in; admin mode enabled", body = inline(crate::api::schemas::SuccessResponse<crate::modules::admin::domain::session::AdminStatus>)),
        (status = 400, description = "Malformed email", body = crate::api::schemas::ErrorResponse),
        (status = 401, description = "Rejected credentials", body = crate::api::schemas::ErrorResponse),
        (status = 502, description = "Identity provider failed", body = crate::api::schemas::ErrorResponse),
        (status = 503, description = "Remote sign-in not configured", body = crate::api::schemas::ErrorResponse)
    )
)]
#[post("/api/admin/sign-in")]
pub async fn sign_in_admin_handler(
    req: web::Json<AdminSignInRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    match data.admin.sign_in(&req.email, &req.password).await {
        Ok(status) => {
            info!("Admin signed in remotely");
            ApiResponse::success(status)
        }
        Err(e) => admin_access_error_response(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::{json, Value};

    use crate::modules::admin::application::ports::incoming::use_cases::{
        AdminAccessError, AdminAccessUseCase,
    };
    use crate::modules::admin::domain::session::{AdminStatus, SessionUser};
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    /* --------------------------------------------------
     * Stub admin access with a fixed sign-in result
     * -------------------------------------------------- */

    struct FixedSignIn {
        result: Result<AdminStatus, AdminAccessError>,
    }

    #[async_trait]
    impl AdminAccessUseCase for FixedSignIn {
        fn status(&self) -> AdminStatus {
            AdminStatus {
                admin_mode: false,
                user: None,
                remote_sign_in: true,
            }
        }

        async fn login_with_password(
            &self,
            _password: &str,
        ) -> Result<AdminStatus, AdminAccessError> {
            unimplemented!("not used in sign-in route tests")
        }

        async fn sign_in(
            &self,
            _email: &str,
            _password: &str,
        ) -> Result<AdminStatus, AdminAccessError> {
            self.result.clone()
        }

        async fn logout(&self) -> AdminStatus {
            unimplemented!("not used in sign-in route tests")
        }
    }

    async fn post_sign_in(admin: FixedSignIn) -> (StatusCode, Value) {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().with_admin(admin).build())
                .service(sign_in_admin_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/sign-in")
            .set_json(json!({ "email": "owner@example.com", "password": "secret" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn successful_sign_in_returns_user() {
        let (status, body) = post_sign_in(FixedSignIn {
            result: Ok(AdminStatus {
                admin_mode: true,
                user: Some(SessionUser {
                    id: "u-1".to_string(),
                    email: "owner@example.com".to_string(),
                }),
                remote_sign_in: true,
            }),
        })
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["user"]["email"], "owner@example.com");
    }

    #[actix_web::test]
    async fn error_mapping() {
        let cases = [
            (AdminAccessError::InvalidEmail, StatusCode::BAD_REQUEST),
            (AdminAccessError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (
                AdminAccessError::Provider("timeout".to_string()),
                StatusCode::BAD_GATEWAY,
            ),
            (
                AdminAccessError::NotConfigured("Remote sign-in"),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
        ];

        for (err, expected) in cases {
            let (status, body) = post_sign_in(FixedSignIn { result: Err(err) }).await;
            assert_eq!(status, expected);
            assert_eq!(body["success"], false);
        }
    }
}

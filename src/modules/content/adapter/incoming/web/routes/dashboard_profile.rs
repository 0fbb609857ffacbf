use actix_web::{get, patch, put, web, Responder};
use serde_json::Value;
use tracing::info;

use super::write_error::write_error_response;
use crate::modules::admin::adapter::incoming::web::extractors::AdminSession;
use crate::modules::content::domain::entities::{EntityKind, Profile};
use crate::modules::content::domain::patch::EntityPatch;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/dashboard/profile",
    tag = "dashboard",
    responses(
        (status = 200, description = "Profile with its load state"),
        (status = 403, description = "Admin mode is off", body = crate::api::schemas::ErrorResponse)
    )
)]
#[get("/api/dashboard/profile")]
pub async fn get_profile_handler(
    _admin: AdminSession,
    data: web::Data<AppState>,
) -> impl Responder {
    ApiResponse::success(data.content.profile.current().await)
}

/// Replaces the whole profile.
#[utoipa::path(
    put,
    path = "/api/dashboard/profile",
    tag = "dashboard",
    request_body = Profile,
    responses(
        (status = 200, description = "Saved profile"),
        (status = 400, description = "Malformed profile", body = crate::api::schemas::ErrorResponse),
        (status = 503, description = "Demo mode", body = crate::api::schemas::ErrorResponse)
    )
)]
#[put("/api/dashboard/profile")]
pub async fn replace_profile_handler(
    _admin: AdminSession,
    req: web::Json<Profile>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.content.profile.save(req.into_inner()).await {
        Ok(saved) => {
            info!("Profile replaced");
            ApiResponse::success(saved)
        }
        Err(e) => write_error_response(EntityKind::Profile, e),
    }
}

/// Merges the given fields over the stored profile.
#[utoipa::path(
    patch,
    path = "/api/dashboard/profile",
    tag = "dashboard",
    responses(
        (status = 200, description = "Saved profile"),
        (status = 400, description = "Patch is not an object or yields an invalid profile", body = crate::api::schemas::ErrorResponse),
        (status = 503, description = "Demo mode", body = crate::api::schemas::ErrorResponse)
    )
)]
#[patch("/api/dashboard/profile")]
pub async fn patch_profile_handler(
    _admin: AdminSession,
    req: web::Json<Value>,
    data: web::Data<AppState>,
) -> impl Responder {
    let patch = match EntityPatch::from_value(req.into_inner()) {
        Ok(patch) => patch,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.content.profile.update(patch).await {
        Ok(saved) => {
            info!("Profile updated");
            ApiResponse::success(saved)
        }
        Err(e) => write_error_response(EntityKind::Profile, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::json;

    use crate::shared::api::custom_json_config;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::local_content;

    macro_rules! profile_app {
        ($builder:expr) => {
            test::init_service(
                App::new()
                    .app_data($builder.build())
                    .app_data(custom_json_config())
                    .service(get_profile_handler)
                    .service(replace_profile_handler)
                    .service(patch_profile_handler),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn visitors_cannot_read_the_editor() {
        let app = profile_app!(TestAppStateBuilder::default());

        let req = test::TestRequest::get()
            .uri("/api/dashboard/profile")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn patch_merges_into_stored_profile() {
        let app = profile_app!(TestAppStateBuilder::default()
            .with_content(local_content().await)
            .with_admin_mode());

        let req = test::TestRequest::patch()
            .uri("/api/dashboard/profile")
            .set_json(json!({ "available": false, "location": "Berlin" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["data"]["available"], false);
        assert_eq!(body["data"]["location"], "Berlin");
        assert_eq!(body["data"]["name"], "Олег Кононенко");

        let req = test::TestRequest::get()
            .uri("/api/dashboard/profile")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["profile"]["location"], "Berlin");
        assert_eq!(body["data"]["origin"], "local");
    }

    #[actix_web::test]
    async fn put_replaces_profile() {
        let app = profile_app!(TestAppStateBuilder::default()
            .with_content(local_content().await)
            .with_admin_mode());

        let req = test::TestRequest::put()
            .uri("/api/dashboard/profile")
            .set_json(json!({ "name": "Jane Roe", "title": "Product Lead" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["data"]["name"], "Jane Roe");
        assert_eq!(body["data"]["description"], "");
    }

    #[actix_web::test]
    async fn demo_mode_rejects_profile_edits() {
        let app = profile_app!(TestAppStateBuilder::default().with_admin_mode());

        let req = test::TestRequest::patch()
            .uri("/api/dashboard/profile")
            .set_json(json!({ "available": false }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}

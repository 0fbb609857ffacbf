use actix_web::{get, HttpResponse, Responder};
use utoipa::openapi::path::{HttpMethod, OperationBuilder, ParameterBuilder, ParameterIn};
use utoipa::openapi::response::Response;
use utoipa::openapi::Required;
use utoipa::OpenApi;

use crate::api::schemas::{ErrorDetail, ErrorResponse};
use crate::modules::admin::adapter::incoming::web::routes::{AdminLoginRequest, AdminSignInRequest};
use crate::modules::admin::domain::session::{AdminStatus, SessionUser};
use crate::modules::content::adapter::incoming::web::routes::StatusView;
use crate::modules::content::domain::entities::{ContactLinks, Profile};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio Content Service API",
        version = "1.0.0",
        description = "Page views and content dashboard of a single-owner portfolio site"
    ),
    paths(
        // Admin
        crate::modules::admin::adapter::incoming::web::routes::login_admin_handler,
        crate::modules::admin::adapter::incoming::web::routes::sign_in_admin_handler,
        crate::modules::admin::adapter::incoming::web::routes::logout_admin_handler,

        // Page views
        crate::modules::content::adapter::incoming::web::routes::get_status_handler,
        crate::modules::content::adapter::incoming::web::routes::refresh_content_handler,
        crate::modules::content::adapter::incoming::web::routes::get_home_handler,
        crate::modules::content::adapter::incoming::web::routes::get_blog_posts_handler,
        crate::modules::content::adapter::incoming::web::routes::get_blog_post_handler,
        crate::modules::content::adapter::incoming::web::routes::get_projects_handler,

        // Dashboard
        crate::modules::content::adapter::incoming::web::routes::get_profile_handler,
        crate::modules::content::adapter::incoming::web::routes::replace_profile_handler,
        crate::modules::content::adapter::incoming::web::routes::patch_profile_handler,
        crate::modules::content::adapter::incoming::web::routes::get_analytics_handler,
        crate::modules::content::adapter::incoming::web::routes::seed_content_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,
            AdminLoginRequest,
            AdminSignInRequest,
            AdminStatus,
            SessionUser,
            StatusView,
            Profile,
            ContactLinks
        )
    ),
    modifiers(&DashboardCollectionsAddon),
    tags(
        (name = "admin", description = "Admin mode"),
        (name = "content", description = "Public page views"),
        (name = "dashboard", description = "Content editing; requires admin mode"),
    )
)]
pub struct ApiDoc;

/// Collection routes are generic handlers, so their paths are added here.
struct DashboardCollectionsAddon;

const COLLECTION_SEGMENTS: [&str; 5] = ["experience", "skills", "education", "blog", "projects"];

fn operation(summary: String, success: (&str, &str)) -> utoipa::openapi::path::Operation {
    OperationBuilder::new()
        .tag("dashboard")
        .summary(Some(summary))
        .response(success.0, Response::new(success.1))
        .response("403", Response::new("Admin mode is off"))
        .response("503", Response::new("Demo mode: content is read-only"))
        .build()
}

fn with_id(op: utoipa::openapi::path::Operation) -> utoipa::openapi::path::Operation {
    let mut op = op;
    op.parameters.get_or_insert_with(Vec::new).push(
        ParameterBuilder::new()
            .name("id")
            .parameter_in(ParameterIn::Path)
            .required(Required::True)
            .build(),
    );
    op
}

impl utoipa::Modify for DashboardCollectionsAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        for segment in COLLECTION_SEGMENTS {
            let list = format!("/api/dashboard/{}", segment);
            let item = format!("/api/dashboard/{}/{{id}}", segment);

            openapi.paths.add_path_operation(
                &list,
                vec![HttpMethod::Get],
                operation(format!("List {}", segment), ("200", "Collection state")),
            );
            openapi.paths.add_path_operation(
                &list,
                vec![HttpMethod::Post],
                operation(format!("Create in {}", segment), ("201", "Created record")),
            );
            openapi.paths.add_path_operation(
                &item,
                vec![HttpMethod::Put],
                with_id(operation(
                    format!("Update in {} (full or partial)", segment),
                    ("200", "Updated record"),
                )),
            );
            openapi.paths.add_path_operation(
                &item,
                vec![HttpMethod::Delete],
                with_id(operation(
                    format!("Delete from {}", segment),
                    ("204", "Deleted"),
                )),
            );
        }
    }
}

#[get("/api-docs/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

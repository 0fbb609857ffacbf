use actix_web::{web, HttpResponse};
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

use super::write_error::write_error_response;
use crate::modules::admin::adapter::incoming::web::extractors::AdminSession;
use crate::modules::content::application::content_use_cases::ContentUseCases;
use crate::modules::content::application::ports::incoming::use_cases::ManageCollectionUseCase;
use crate::modules::content::domain::content_entity::ContentEntity;
use crate::modules::content::domain::entities::{
    BlogPost, Education, Experience, PortfolioItem, Skill,
};
use crate::modules::content::domain::patch::EntityPatch;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Collection registry
// ──────────────────────────────────────────────────────────
//

type CollectionUseCase<E> = Arc<dyn ManageCollectionUseCase<E> + Send + Sync>;

/// A collection editable from the dashboard under `/api/dashboard/{SEGMENT}`.
pub trait DashboardCollection: ContentEntity {
    const SEGMENT: &'static str;

    fn use_case(content: &ContentUseCases) -> &CollectionUseCase<Self>;
}

impl DashboardCollection for Experience {
    const SEGMENT: &'static str = "experience";

    fn use_case(content: &ContentUseCases) -> &CollectionUseCase<Self> {
        &content.experience
    }
}

impl DashboardCollection for Skill {
    const SEGMENT: &'static str = "skills";

    fn use_case(content: &ContentUseCases) -> &CollectionUseCase<Self> {
        &content.skills
    }
}

impl DashboardCollection for Education {
    const SEGMENT: &'static str = "education";

    fn use_case(content: &ContentUseCases) -> &CollectionUseCase<Self> {
        &content.education
    }
}

impl DashboardCollection for BlogPost {
    const SEGMENT: &'static str = "blog";

    fn use_case(content: &ContentUseCases) -> &CollectionUseCase<Self> {
        &content.blog_posts
    }
}

impl DashboardCollection for PortfolioItem {
    const SEGMENT: &'static str = "projects";

    fn use_case(content: &ContentUseCases) -> &CollectionUseCase<Self> {
        &content.portfolio_items
    }
}

/// Registers list/create and update/delete routes for one collection.
pub fn configure_collection<E: DashboardCollection>(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(format!("/api/dashboard/{}", E::SEGMENT))
            .route(web::get().to(list_collection_handler::<E>))
            .route(web::post().to(create_entry_handler::<E>)),
    )
    .service(
        web::resource(format!("/api/dashboard/{}/{{id}}", E::SEGMENT))
            .route(web::put().to(update_entry_handler::<E>))
            .route(web::delete().to(delete_entry_handler::<E>)),
    );
}

pub fn configure_dashboard_collections(cfg: &mut web::ServiceConfig) {
    configure_collection::<Experience>(cfg);
    configure_collection::<Skill>(cfg);
    configure_collection::<Education>(cfg);
    configure_collection::<BlogPost>(cfg);
    configure_collection::<PortfolioItem>(cfg);
}

//
// ──────────────────────────────────────────────────────────
// Handlers
// ──────────────────────────────────────────────────────────
//

/// Full collection regardless of status, in stored order.
pub async fn list_collection_handler<E: DashboardCollection>(
    _admin: AdminSession,
    data: web::Data<AppState>,
) -> HttpResponse {
    let state = E::use_case(&data.content).current().await;
    ApiResponse::success(state)
}

pub async fn create_entry_handler<E: DashboardCollection>(
    _admin: AdminSession,
    req: web::Json<E>,
    data: web::Data<AppState>,
) -> HttpResponse {
    match E::use_case(&data.content).create(req.into_inner()).await {
        Ok(created) => {
            info!("Created {} {}", E::KIND, created.id());
            ApiResponse::created(created)
        }
        Err(e) => write_error_response(E::KIND, e),
    }
}

/// Accepts either a whole record or any subset of its fields.
pub async fn update_entry_handler<E: DashboardCollection>(
    _admin: AdminSession,
    path: web::Path<String>,
    req: web::Json<Value>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let id = path.into_inner();
    let patch = match EntityPatch::from_value(req.into_inner()) {
        Ok(patch) => patch,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match E::use_case(&data.content).update(&id, patch).await {
        Ok(updated) => {
            info!("Updated {} {}", E::KIND, id);
            ApiResponse::success(updated)
        }
        Err(e) => write_error_response(E::KIND, e),
    }
}

pub async fn delete_entry_handler<E: DashboardCollection>(
    _admin: AdminSession,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let id = path.into_inner();

    match E::use_case(&data.content).delete(&id).await {
        Ok(()) => {
            info!("Deleted {} {}", E::KIND, id);
            ApiResponse::no_content()
        }
        Err(e) => write_error_response(E::KIND, e),
    }
}

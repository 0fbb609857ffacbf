use actix_web::{get, web, Responder};
use serde::{Deserialize, Serialize};

use crate::modules::admin::adapter::incoming::web::extractors::ViewerMode;
use crate::modules::content::domain::entities::PortfolioItem;
use crate::modules::content::domain::policies::{all_categories, filter_items, visible};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ProjectsQuery {
    /// Category name, or `all`.
    pub category: Option<String>,
    /// Case-insensitive match on title, description or technologies.
    pub search: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectsView {
    pub projects: Vec<PortfolioItem>,
    pub categories: Vec<String>,
    pub fallback: bool,
}

#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "content",
    params(
        ("category" = Option<String>, Query, description = "Category name, or `all`"),
        ("search" = Option<String>, Query, description = "Case-insensitive match on title, description or technologies")
    ),
    responses(
        (status = 200, description = "Visible portfolio items with the category list")
    )
)]
#[get("/api/projects")]
pub async fn get_projects_handler(
    query: web::Query<ProjectsQuery>,
    viewer: ViewerMode,
    data: web::Data<AppState>,
) -> impl Responder {
    let state = data.content.portfolio_items.current().await;
    let shown = visible(&state.items, viewer.admin);

    ApiResponse::success(ProjectsView {
        projects: filter_items(&shown, query.category.as_deref(), query.search.as_deref()),
        categories: all_categories(&shown),
        fallback: state.fallback,
    })
}

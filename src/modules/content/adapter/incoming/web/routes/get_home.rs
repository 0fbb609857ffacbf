use actix_web::{get, web, Responder};
use serde::Serialize;

use crate::modules::admin::adapter::incoming::web::extractors::ViewerMode;
use crate::modules::content::domain::entities::{
    BlogPost, Education, Experience, PortfolioItem, Profile, Skill,
};
use crate::modules::content::domain::policies::{newest_first, sort_by_priority, visible};
use crate::shared::api::ApiResponse;
use crate::AppState;

const LATEST_POSTS: usize = 3;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeView {
    pub profile: Option<Profile>,
    pub experience: Vec<Experience>,
    pub skills: Vec<Skill>,
    pub education: Vec<Education>,
    pub latest_posts: Vec<BlogPost>,
    pub projects: Vec<PortfolioItem>,
    /// True when any section is showing demo content in place of live data.
    pub fallback: bool,
    pub banner: Option<String>,
}

/// The landing view: profile, resume sections and highlights.
#[utoipa::path(
    get,
    path = "/api/home",
    tag = "content",
    responses(
        (status = 200, description = "Profile, priority-sorted resume sections, latest posts and visible projects")
    )
)]
#[get("/api/home")]
pub async fn get_home_handler(viewer: ViewerMode, data: web::Data<AppState>) -> impl Responder {
    let content = &data.content;
    let (profile, experience, skills, education, posts, items) = futures::join!(
        content.profile.current(),
        content.experience.current(),
        content.skills.current(),
        content.education.current(),
        content.blog_posts.current(),
        content.portfolio_items.current(),
    );

    let fallback = profile.fallback
        || experience.fallback
        || skills.fallback
        || education.fallback
        || posts.fallback
        || items.fallback;

    let mut latest_posts = newest_first(&visible(&posts.items, viewer.admin));
    latest_posts.truncate(LATEST_POSTS);

    ApiResponse::success(HomeView {
        profile: profile.profile,
        experience: sort_by_priority(&experience.items),
        skills: sort_by_priority(&skills.items),
        education: sort_by_priority(&education.items),
        latest_posts,
        projects: visible(&items.items, viewer.admin),
        fallback,
        banner: content.source.status().banner().map(str::to_string),
    })
}

use actix_web::{get, web, Responder};
use serde::{Deserialize, Serialize};

use crate::modules::admin::adapter::incoming::web::extractors::ViewerMode;
use crate::modules::content::domain::entities::BlogPost;
use crate::modules::content::domain::policies::{
    all_tags, filter_posts, find_post_by_slug, newest_first, visible,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Query / View
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Default, Deserialize)]
pub struct BlogQuery {
    /// Case-insensitive match on title, excerpt or tags.
    pub search: Option<String>,
    /// Exact tag.
    pub tag: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogListView {
    pub posts: Vec<BlogPost>,
    /// Tags of every visible post, for the filter bar.
    pub tags: Vec<String>,
    pub fallback: bool,
}

//
// ──────────────────────────────────────────────────────────
// Handlers
// ──────────────────────────────────────────────────────────
//

#[utoipa::path(
    get,
    path = "/api/blog",
    tag = "content",
    params(
        ("search" = Option<String>, Query, description = "Case-insensitive match on title, excerpt or tags"),
        ("tag" = Option<String>, Query, description = "Exact tag")
    ),
    responses(
        (status = 200, description = "Visible posts, newest first, with the tag list")
    )
)]
#[get("/api/blog")]
pub async fn get_blog_posts_handler(
    query: web::Query<BlogQuery>,
    viewer: ViewerMode,
    data: web::Data<AppState>,
) -> impl Responder {
    let state = data.content.blog_posts.current().await;
    let shown = visible(&state.items, viewer.admin);

    let posts = filter_posts(&shown, query.search.as_deref(), query.tag.as_deref());

    ApiResponse::success(BlogListView {
        posts: newest_first(&posts),
        tags: all_tags(&shown),
        fallback: state.fallback,
    })
}

#[utoipa::path(
    get,
    path = "/api/blog/{slug}",
    tag = "content",
    params(("slug" = String, Path, description = "Post slug")),
    responses(
        (status = 200, description = "The post"),
        (status = 404, description = "No visible post with that slug", body = crate::api::schemas::ErrorResponse)
    )
)]
#[get("/api/blog/{slug}")]
pub async fn get_blog_post_handler(
    path: web::Path<String>,
    viewer: ViewerMode,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();
    let state = data.content.blog_posts.current().await;
    let shown = visible(&state.items, viewer.admin);

    match find_post_by_slug(&shown, &slug) {
        Some(post) => ApiResponse::success(post.clone()),
        None => ApiResponse::not_found("POST_NOT_FOUND", "Post not found"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    async fn get(uri: &str, admin: bool) -> (StatusCode, Value) {
        let builder = TestAppStateBuilder::default();
        let builder = if admin { builder.with_admin_mode() } else { builder };
        let app = test::init_service(
            App::new()
                .app_data(builder.build())
                .service(get_blog_posts_handler)
                .service(get_blog_post_handler),
        )
        .await;

        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn list_hides_drafts_from_visitors() {
        let (status, body) = get("/api/blog", false).await;

        assert_eq!(status, StatusCode::OK);
        let posts = body["data"]["posts"].as_array().unwrap();
        assert_eq!(posts.len(), 2);
        assert!(posts.iter().all(|p| p["status"] == "published"));
    }

    #[actix_web::test]
    async fn search_and_tag_filters_apply() {
        let (_, body) = get("/api/blog?search=METRICS", false).await;
        assert_eq!(body["data"]["posts"].as_array().unwrap().len(), 1);

        let (_, body) = get("/api/blog?tag=product", true).await;
        assert_eq!(body["data"]["posts"].as_array().unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn tag_list_covers_visible_posts_only() {
        let (_, body) = get("/api/blog", false).await;

        let tags = body["data"]["tags"].as_array().unwrap();
        assert!(!tags.is_empty());
        assert!(tags.windows(2).all(|w| w[0].as_str() < w[1].as_str()));
    }

    #[actix_web::test]
    async fn single_post_by_slug() {
        let (status, body) = get("/api/blog/board-metrics", false).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["id"], "2");
    }

    #[actix_web::test]
    async fn draft_slug_is_404_for_visitors_but_visible_to_admin() {
        let (status, body) = get("/api/blog/customer-development-sprint", false).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "POST_NOT_FOUND");

        let (status, _) = get("/api/blog/customer-development-sprint", true).await;
        assert_eq!(status, StatusCode::OK);
    }
}

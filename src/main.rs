pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

use crate::config::AppConfig;
use crate::modules::admin::adapter::outgoing::RemoteIdentityProvider;
use crate::modules::admin::application::ports::incoming::use_cases::AdminAccessUseCase;
use crate::modules::admin::application::ports::outgoing::IdentityProvider;
use crate::modules::admin::application::services::AdminGate;
use crate::modules::content::adapter::outgoing::local::{FileKeyValueStorage, LocalContentStore};
use crate::modules::content::adapter::outgoing::remote::RemoteContentClient;
use crate::modules::content::adapter::outgoing::TracingFallbackObserver;
use crate::modules::content::application::content_use_cases::ContentUseCases;
use crate::modules::content::application::ports::outgoing::KeyValueStorage;
use crate::modules::content::application::services::{
    spawn_periodic_refresh, ContentSourceSelector,
};
use crate::shared::api::custom_json_config;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub content: ContentUseCases,
    pub admin: Arc<dyn AdminAccessUseCase + Send + Sync>,
}

#[cfg(not(tarpaulin_include))]
fn remote_client(config: &AppConfig) -> Option<RemoteContentClient> {
    let api = match &config.remote {
        Some(api) => api,
        None => {
            info!("Content API not configured; serving local or demo content");
            return None;
        }
    };

    match RemoteContentClient::new(api.clone()) {
        Ok(client) => Some(client),
        Err(e) => {
            warn!("Could not build content API client: {}", e);
            None
        }
    }
}

#[cfg(not(tarpaulin_include))]
fn identity_provider(config: &AppConfig) -> Option<Arc<dyn IdentityProvider>> {
    let api = config.remote.as_ref()?;

    match RemoteIdentityProvider::new(&api.base_url, &api.api_key, api.timeout) {
        Ok(provider) => Some(Arc::new(provider)),
        Err(e) => {
            warn!("Remote sign-in disabled: {}", e);
            None
        }
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env().context("Invalid configuration")?;
    let server_url = config.server_url();

    // Storage shared by the admin flag and the local content document
    let storage: Arc<dyn KeyValueStorage> =
        Arc::new(FileKeyValueStorage::new(&config.storage_dir));

    let local = config
        .local_store_key
        .as_ref()
        .map(|key| LocalContentStore::open(Arc::clone(&storage), key.clone()));

    let selector = Arc::new(ContentSourceSelector::new(
        remote_client(&config),
        local,
        Arc::new(TracingFallbackObserver::new(config.fallback_log)),
    ));
    let content = ContentUseCases::from_selector(selector);

    // Initial probe and load
    let report = content.source.refresh().await;
    if let Some(banner) = report.status.banner() {
        warn!("{}", banner);
    }
    spawn_periodic_refresh(Arc::clone(&content.analytics), config.analytics_refresh);

    let admin = AdminGate::new(
        storage,
        config.admin_flag_key.clone(),
        config.admin_password.as_deref(),
        identity_provider(&config),
    );
    if config.admin_password.is_none() {
        info!("ADMIN_PASSWORD not set; password login disabled");
    }

    let state = AppState {
        content,
        admin: Arc::new(admin),
    };

    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(custom_json_config())
            .configure(init_routes)
    })
    .bind(&server_url)
    .with_context(|| format!("Could not bind {}", server_url))?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::modules::admin::adapter::incoming::web::routes as admin;
    use crate::modules::content::adapter::incoming::web::routes as content;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    cfg.service(crate::api::openapi::openapi_json);
    // Admin
    cfg.service(admin::login_admin_handler);
    cfg.service(admin::sign_in_admin_handler);
    cfg.service(admin::logout_admin_handler);
    // Page views
    cfg.service(content::get_status_handler);
    cfg.service(content::refresh_content_handler);
    cfg.service(content::get_home_handler);
    cfg.service(content::get_blog_posts_handler);
    cfg.service(content::get_blog_post_handler);
    cfg.service(content::get_projects_handler);
    // Dashboard
    cfg.service(content::get_profile_handler);
    cfg.service(content::replace_profile_handler);
    cfg.service(content::patch_profile_handler);
    cfg.service(content::get_analytics_handler);
    cfg.service(content::seed_content_handler);
    content::configure_dashboard_collections(cfg);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}

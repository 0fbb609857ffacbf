pub mod analytics_store;
pub mod collection_store;
pub mod content_source_selector;
pub mod profile_store;
pub mod refresh_service;

pub use analytics_store::{spawn_periodic_refresh, AnalyticsStore};
pub use collection_store::CollectionStore;
pub use content_source_selector::ContentSourceSelector;
pub use profile_store::ProfileStore;
pub use refresh_service::ContentRefreshService;

mod dashboard_analytics;
mod dashboard_collections;
mod dashboard_profile;
mod get_blog;
mod get_home;
mod get_projects;
mod get_status;
mod refresh_content;
mod seed_content;
mod write_error;

pub use dashboard_analytics::*;
pub use dashboard_collections::*;
pub use dashboard_profile::*;
pub use get_blog::*;
pub use get_home::*;
pub use get_projects::*;
pub use get_status::*;
pub use refresh_content::*;
pub use seed_content::*;
pub use write_error::*;

mod get_analytics;
mod manage_collection;
mod manage_content_source;
mod manage_profile;

pub use get_analytics::{AnalyticsState, GetAnalyticsUseCase};
pub use manage_collection::{CollectionState, ManageCollectionUseCase, WriteError};
pub use manage_content_source::{ManageContentSourceUseCase, RefreshReport};
pub use manage_profile::{ManageProfileUseCase, ProfileState};

use async_trait::async_trait;
use serde::Serialize;

use super::WriteError;
use crate::modules::content::domain::entities::Profile;
use crate::modules::content::domain::patch::EntityPatch;
use crate::modules::content::domain::source::DataOrigin;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileState {
    pub profile: Option<Profile>,
    pub loading: bool,
    pub error: Option<String>,
    pub origin: Option<DataOrigin>,
    pub fallback: bool,
}

#[async_trait]
pub trait ManageProfileUseCase: Send + Sync {
    async fn fetch(&self) -> ProfileState;

    async fn current(&self) -> ProfileState;

    /// Replaces the whole profile.
    async fn save(&self, profile: Profile) -> Result<Profile, WriteError>;

    /// Merges `patch` over the current profile, then saves the result.
    async fn update(&self, patch: EntityPatch) -> Result<Profile, WriteError>;
}

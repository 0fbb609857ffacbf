use async_trait::async_trait;
use std::sync::{Arc, RwLock};
use tracing::error;

use super::content_source_selector::ContentSourceSelector;
use crate::modules::content::application::ports::incoming::use_cases::{
    ManageProfileUseCase, ProfileState, WriteError,
};
use crate::modules::content::application::ports::outgoing::ContentSource;
use crate::modules::content::domain::entities::Profile;
use crate::modules::content::domain::patch::EntityPatch;

pub struct ProfileStore<R, L>
where
    R: ContentSource,
    L: ContentSource,
{
    selector: Arc<ContentSourceSelector<R, L>>,
    state: RwLock<ProfileState>,
}

impl<R, L> ProfileStore<R, L>
where
    R: ContentSource,
    L: ContentSource,
{
    pub fn new(selector: Arc<ContentSourceSelector<R, L>>) -> Self {
        Self {
            selector,
            state: RwLock::new(ProfileState::default()),
        }
    }

    fn with_state<T>(&self, change: impl FnOnce(&mut ProfileState) -> T) -> T {
        let mut state = self
            .state
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        change(&mut state)
    }

    fn begin(&self) {
        self.with_state(|s| {
            s.loading = true;
            s.error = None;
        });
    }

    fn settle_write(&self, result: Result<Profile, WriteError>) -> Result<Profile, WriteError> {
        match &result {
            Ok(profile) => self.with_state(|s| {
                s.profile = Some(profile.clone());
                s.loading = false;
            }),
            Err(e) => {
                error!("Profile write failed: {}", e);
                self.with_state(|s| {
                    s.loading = false;
                    s.error = Some(e.to_string());
                });
            }
        }
        result
    }
}

#[async_trait]
impl<R, L> ManageProfileUseCase for ProfileStore<R, L>
where
    R: ContentSource + 'static,
    L: ContentSource + 'static,
{
    async fn fetch(&self) -> ProfileState {
        self.begin();
        let fetched = self.selector.fetch_profile().await;

        self.with_state(|s| {
            s.profile = Some(fetched.data);
            s.origin = Some(fetched.origin);
            s.fallback = fetched.fallback;
            s.loading = false;
            s.clone()
        })
    }

    async fn current(&self) -> ProfileState {
        let state = self.with_state(|s| s.clone());
        if state.profile.is_none() {
            return self.fetch().await;
        }
        state
    }

    async fn save(&self, profile: Profile) -> Result<Profile, WriteError> {
        self.begin();
        let result = self.selector.save_profile(profile).await;
        self.settle_write(result)
    }

    async fn update(&self, patch: EntityPatch) -> Result<Profile, WriteError> {
        let current = match self.current().await.profile {
            Some(profile) => profile,
            None => return Err(WriteError::NotFound("profile".to_string())),
        };

        let merged = match patch.apply_to(&current) {
            Ok(merged) => merged,
            Err(e) => {
                let err = WriteError::InvalidPatch(e.to_string());
                self.with_state(|s| s.error = Some(err.to_string()));
                return Err(err);
            }
        };

        self.save(merged).await
    }
}

use std::marker::PhantomData;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::modules::admin::application::ports::incoming::use_cases::{
    AdminAccessError, AdminAccessUseCase,
};
use crate::modules::admin::domain::session::AdminStatus;
use crate::modules::content::adapter::outgoing::local::{
    LocalContentStore, MemoryKeyValueStorage, DEFAULT_STORE_KEY,
};
use crate::modules::content::application::content_use_cases::ContentUseCases;
use crate::modules::content::application::ports::incoming::use_cases::{
    CollectionState, ManageCollectionUseCase, WriteError,
};
use crate::modules::content::application::ports::outgoing::{
    ContentSource, FallbackEvent, FallbackObserver, SourceError,
};
use crate::modules::content::application::services::ContentSourceSelector;
use crate::modules::content::domain::analytics::AnalyticsSummary;
use crate::modules::content::domain::content_entity::ContentEntity;
use crate::modules::content::domain::entities::Profile;
use crate::modules::content::domain::patch::EntityPatch;

pub const STUB_ADMIN_PASSWORD: &str = "admin-pass";

/* --------------------------------------------------
 * Content sources
 * -------------------------------------------------- */

/// Remote backend whose every call fails at the transport level.
#[derive(Default, Clone, Copy)]
pub struct UnreachableSource;

fn unreachable() -> SourceError {
    SourceError::Unreachable("connection refused".to_string())
}

#[async_trait]
impl ContentSource for UnreachableSource {
    async fn probe(&self) -> Result<(), SourceError> {
        Err(unreachable())
    }

    async fn list<E: ContentEntity>(&self) -> Result<Vec<E>, SourceError> {
        Err(unreachable())
    }

    async fn create<E: ContentEntity>(&self, _draft: E) -> Result<E, SourceError> {
        Err(unreachable())
    }

    async fn update<E: ContentEntity>(
        &self,
        _id: &str,
        _patch: EntityPatch,
    ) -> Result<E, SourceError> {
        Err(unreachable())
    }

    async fn delete<E: ContentEntity>(&self, _id: &str) -> Result<(), SourceError> {
        Err(unreachable())
    }

    async fn profile(&self) -> Result<Profile, SourceError> {
        Err(unreachable())
    }

    async fn save_profile(&self, _profile: Profile) -> Result<Profile, SourceError> {
        Err(unreachable())
    }

    async fn analytics(&self) -> Result<AnalyticsSummary, SourceError> {
        Err(unreachable())
    }

    async fn seed(&self) -> Result<(), SourceError> {
        Err(unreachable())
    }
}

#[derive(Default)]
pub struct RecordingFallbackObserver {
    events: Mutex<Vec<FallbackEvent>>,
}

impl RecordingFallbackObserver {
    pub fn events(&self) -> Vec<FallbackEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl FallbackObserver for RecordingFallbackObserver {
    fn on_fallback(&self, event: &FallbackEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}

/* --------------------------------------------------
 * Content use cases
 * -------------------------------------------------- */

/// Unreachable API, no local store, never probed: read-only demo content.
pub fn demo_content() -> ContentUseCases {
    let selector: ContentSourceSelector<UnreachableSource, LocalContentStore> =
        ContentSourceSelector::new(
            Some(UnreachableSource),
            None,
            Arc::new(RecordingFallbackObserver::default()),
        );
    ContentUseCases::from_selector(Arc::new(selector))
}

/// Unreachable API with an in-memory local store, probed and loaded.
pub async fn local_content() -> ContentUseCases {
    let local = LocalContentStore::open(Arc::new(MemoryKeyValueStorage::new()), DEFAULT_STORE_KEY);
    let selector = ContentSourceSelector::new(
        Some(UnreachableSource),
        Some(local),
        Arc::new(RecordingFallbackObserver::default()),
    );
    let content = ContentUseCases::from_selector(Arc::new(selector));
    content.source.refresh().await;
    content
}

/// Collection whose writes always fail upstream.
pub struct FailingCollection<E>(PhantomData<fn() -> E>);

impl<E> Default for FailingCollection<E> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

#[async_trait]
impl<E: ContentEntity> ManageCollectionUseCase<E> for FailingCollection<E> {
    async fn fetch(&self) -> CollectionState<E> {
        CollectionState::default()
    }

    async fn current(&self) -> CollectionState<E> {
        CollectionState::default()
    }

    async fn create(&self, _draft: E) -> Result<E, WriteError> {
        Err(WriteError::Source("upstream down".to_string()))
    }

    async fn update(&self, _id: &str, _patch: EntityPatch) -> Result<E, WriteError> {
        Err(WriteError::Source("upstream down".to_string()))
    }

    async fn delete(&self, _id: &str) -> Result<(), WriteError> {
        Err(WriteError::Source("upstream down".to_string()))
    }
}

/* --------------------------------------------------
 * Admin
 * -------------------------------------------------- */

pub struct StubAdminAccess {
    admin: AtomicBool,
}

impl StubAdminAccess {
    pub fn viewer() -> Self {
        Self {
            admin: AtomicBool::new(false),
        }
    }

    pub fn admin() -> Self {
        Self {
            admin: AtomicBool::new(true),
        }
    }
}

#[async_trait]
impl AdminAccessUseCase for StubAdminAccess {
    fn status(&self) -> AdminStatus {
        AdminStatus {
            admin_mode: self.admin.load(Ordering::SeqCst),
            user: None,
            remote_sign_in: false,
        }
    }

    async fn login_with_password(&self, password: &str) -> Result<AdminStatus, AdminAccessError> {
        if password != STUB_ADMIN_PASSWORD {
            return Err(AdminAccessError::InvalidCredentials);
        }
        self.admin.store(true, Ordering::SeqCst);
        Ok(self.status())
    }

    async fn sign_in(
        &self,
        _email: &str,
        _password: &str,
    ) -> Result<AdminStatus, AdminAccessError> {
        Err(AdminAccessError::NotConfigured("Remote sign-in"))
    }

    async fn logout(&self) -> AdminStatus {
        self.admin.store(false, Ordering::SeqCst);
        self.status()
    }
}

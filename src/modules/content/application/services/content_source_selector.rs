use chrono::Utc;
use std::sync::{Arc, RwLock};
use tracing::{info, warn};

use crate::modules::content::application::ports::incoming::use_cases::WriteError;
use crate::modules::content::application::ports::outgoing::{
    ContentSource, FallbackEvent, FallbackObserver, SourceError,
};
use crate::modules::content::domain::analytics::AnalyticsSummary;
use crate::modules::content::domain::content_entity::ContentEntity;
use crate::modules::content::domain::demo_data;
use crate::modules::content::domain::entities::{ContentSnapshot, EntityKind, Profile};
use crate::modules::content::domain::patch::EntityPatch;
use crate::modules::content::domain::source::{DataOrigin, Fetched, SourceStatus};

enum Writable<'a, R, L> {
    Remote(&'a R),
    Local(&'a L),
}

/// Decides which backend answers reads and accepts writes.
///
/// Reads never fail: when the active backend errors, the fixed demo set
/// for that section is returned and the failure is reported to the
/// observer. Writes go to the remote API while it is available, to the
/// local store when that is active, and are refused otherwise.
pub struct ContentSourceSelector<R, L>
where
    R: ContentSource,
    L: ContentSource,
{
    remote: Option<R>,
    local: Option<L>,
    status: RwLock<SourceStatus>,
    observer: Arc<dyn FallbackObserver>,
}

impl<R, L> ContentSourceSelector<R, L>
where
    R: ContentSource,
    L: ContentSource,
{
    pub fn new(remote: Option<R>, local: Option<L>, observer: Arc<dyn FallbackObserver>) -> Self {
        Self {
            remote,
            local,
            status: RwLock::new(SourceStatus::unprobed()),
            observer,
        }
    }

    pub fn status(&self) -> SourceStatus {
        self.status
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn set_status(&self, status: SourceStatus) {
        *self
            .status
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = status;
    }

    fn mark_api_unavailable(&self) {
        self.status
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .api_available = false;
    }

    //
    // ──────────────────────────────────────────────────────────
    // Probe
    // ──────────────────────────────────────────────────────────
    //

    /// Checks the remote API and picks the active backend. Safe to call
    /// again at any time; a recovered API becomes active again.
    pub async fn probe(&self) -> SourceStatus {
        let api_available = match &self.remote {
            Some(remote) => match remote.probe().await {
                Ok(()) => true,
                Err(e) => {
                    warn!("Content API probe failed: {}", e);
                    false
                }
            },
            None => false,
        };

        let active = if api_available {
            DataOrigin::Remote
        } else if self.local.is_some() {
            DataOrigin::Local
        } else {
            DataOrigin::Demo
        };

        let status = SourceStatus {
            active,
            api_available,
            last_probe_at: Some(Utc::now()),
        };
        info!(
            "Active content source: {} (api available: {})",
            status.active, status.api_available
        );

        self.set_status(status.clone());
        status
    }

    //
    // ──────────────────────────────────────────────────────────
    // Reads
    // ──────────────────────────────────────────────────────────
    //

    fn settle<T>(
        &self,
        entity: EntityKind,
        origin: DataOrigin,
        result: Result<T, SourceError>,
        demo: impl FnOnce() -> T,
    ) -> Fetched<T> {
        match result {
            Ok(data) => Fetched::live(data, origin),
            Err(e) => {
                self.mark_api_unavailable();
                self.observer.on_fallback(&FallbackEvent {
                    entity,
                    failed_source: origin,
                    reason: e.to_string(),
                });
                Fetched::fallback(demo())
            }
        }
    }

    pub async fn fetch<E: ContentEntity>(&self) -> Fetched<Vec<E>> {
        let origin = self.status().active;
        let result = match origin {
            DataOrigin::Remote => match &self.remote {
                Some(remote) => remote.list::<E>().await,
                None => Err(SourceError::NotConfigured),
            },
            DataOrigin::Local => match &self.local {
                Some(local) => local.list::<E>().await,
                None => Err(SourceError::NotConfigured),
            },
            DataOrigin::Demo => return Fetched::live(E::demo_records(), DataOrigin::Demo),
        };

        self.settle(E::KIND, origin, result, E::demo_records)
    }

    pub async fn fetch_profile(&self) -> Fetched<Profile> {
        let origin = self.status().active;
        let result = match origin {
            DataOrigin::Remote => match &self.remote {
                Some(remote) => remote.profile().await,
                None => Err(SourceError::NotConfigured),
            },
            DataOrigin::Local => match &self.local {
                Some(local) => local.profile().await,
                None => Err(SourceError::NotConfigured),
            },
            DataOrigin::Demo => return Fetched::live(demo_data::profile(), DataOrigin::Demo),
        };

        self.settle(EntityKind::Profile, origin, result, demo_data::profile)
    }

    pub async fn fetch_analytics(&self) -> Fetched<AnalyticsSummary> {
        let demo = || AnalyticsSummary::from_snapshot(&ContentSnapshot::demo());

        let origin = self.status().active;
        let result = match origin {
            DataOrigin::Remote => match &self.remote {
                Some(remote) => remote.analytics().await,
                None => Err(SourceError::NotConfigured),
            },
            DataOrigin::Local => match &self.local {
                Some(local) => local.analytics().await,
                None => Err(SourceError::NotConfigured),
            },
            DataOrigin::Demo => return Fetched::live(demo(), DataOrigin::Demo),
        };

        self.settle(EntityKind::Analytics, origin, result, demo)
    }

    //
    // ──────────────────────────────────────────────────────────
    // Writes
    // ──────────────────────────────────────────────────────────
    //

    fn writable(&self) -> Result<Writable<'_, R, L>, WriteError> {
        let status = self.status();
        match status.active {
            DataOrigin::Remote if status.api_available => self
                .remote
                .as_ref()
                .map(Writable::Remote)
                .ok_or(WriteError::DemoMode),
            DataOrigin::Local => self
                .local
                .as_ref()
                .map(Writable::Local)
                .ok_or(WriteError::DemoMode),
            _ => Err(WriteError::DemoMode),
        }
    }

    pub async fn create<E: ContentEntity>(&self, draft: E) -> Result<E, WriteError> {
        let mut draft = draft;
        draft.prepare_draft();

        let result = match self.writable()? {
            Writable::Remote(remote) => remote.create(draft).await,
            Writable::Local(local) => local.create(draft).await,
        };
        result.map_err(WriteError::from)
    }

    pub async fn update<E: ContentEntity>(
        &self,
        id: &str,
        patch: EntityPatch,
    ) -> Result<E, WriteError> {
        let result = match self.writable()? {
            Writable::Remote(remote) => remote.update::<E>(id, patch).await,
            Writable::Local(local) => local.update::<E>(id, patch).await,
        };
        result.map_err(WriteError::from)
    }

    pub async fn delete<E: ContentEntity>(&self, id: &str) -> Result<(), WriteError> {
        let result = match self.writable()? {
            Writable::Remote(remote) => remote.delete::<E>(id).await,
            Writable::Local(local) => local.delete::<E>(id).await,
        };
        result.map_err(WriteError::from)
    }

    pub async fn save_profile(&self, profile: Profile) -> Result<Profile, WriteError> {
        let result = match self.writable()? {
            Writable::Remote(remote) => remote.save_profile(profile).await,
            Writable::Local(local) => local.save_profile(profile).await,
        };
        result.map_err(WriteError::from)
    }

    pub async fn seed(&self) -> Result<(), WriteError> {
        let result = match self.writable()? {
            Writable::Remote(remote) => remote.seed().await,
            Writable::Local(local) => local.seed().await,
        };
        result.map_err(WriteError::from)
    }
}

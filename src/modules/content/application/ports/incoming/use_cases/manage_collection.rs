use async_trait::async_trait;
use serde::Serialize;

use crate::modules::content::application::ports::outgoing::SourceError;
use crate::modules::content::domain::content_entity::ContentEntity;
use crate::modules::content::domain::patch::EntityPatch;
use crate::modules::content::domain::source::DataOrigin;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WriteError {
    #[error("Editing is unavailable in demo mode")]
    DemoMode,

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Invalid update: {0}")]
    InvalidPatch(String),

    #[error("Content source error: {0}")]
    Source(String),
}

impl From<SourceError> for WriteError {
    fn from(err: SourceError) -> Self {
        match err {
            SourceError::ReadOnly => WriteError::DemoMode,
            SourceError::NotFound(id) => WriteError::NotFound(id),
            SourceError::InvalidPatch(e) => WriteError::InvalidPatch(e.to_string()),
            other => WriteError::Source(other.to_string()),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// State
// ──────────────────────────────────────────────────────────
//

/// What a view renders for one collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionState<E> {
    pub items: Vec<E>,
    pub loading: bool,
    pub error: Option<String>,
    /// `None` until the first fetch completes.
    pub origin: Option<DataOrigin>,
    pub fallback: bool,
}

impl<E> Default for CollectionState<E> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
            origin: None,
            fallback: false,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ManageCollectionUseCase<E: ContentEntity>: Send + Sync {
    /// Reloads from the active source. Never fails; degraded reads carry
    /// demo records.
    async fn fetch(&self) -> CollectionState<E>;

    /// Last loaded state, fetching first if nothing was loaded yet.
    async fn current(&self) -> CollectionState<E>;

    async fn create(&self, draft: E) -> Result<E, WriteError>;

    async fn update(&self, id: &str, patch: EntityPatch) -> Result<E, WriteError>;

    async fn delete(&self, id: &str) -> Result<(), WriteError>;
}

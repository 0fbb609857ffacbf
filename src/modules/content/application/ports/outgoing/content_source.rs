// src/modules/content/application/ports/outgoing/content_source.rs

use async_trait::async_trait;

use crate::modules::content::domain::analytics::AnalyticsSummary;
use crate::modules::content::domain::content_entity::ContentEntity;
use crate::modules::content::domain::entities::Profile;
use crate::modules::content::domain::patch::{EntityPatch, PatchError};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SourceError {
    /// No endpoint or credential configured.
    #[error("Content source is not configured")]
    NotConfigured,

    /// Transport-level failure: DNS, connect, timeout.
    #[error("Content source unreachable: {0}")]
    Unreachable(String),

    /// The backend answered with a non-2xx status.
    #[error("Content source rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Malformed response: {0}")]
    Decode(String),

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),

    /// Demo content cannot be modified.
    #[error("Content source is read-only")]
    ReadOnly,

    #[error(transparent)]
    InvalidPatch(#[from] PatchError),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

/// Capability set of one content backend.
///
/// Every collection entity goes through the same generic operations, so a
/// backend implements CRUD once for all of them.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Cheap reachability check.
    async fn probe(&self) -> Result<(), SourceError>;

    async fn list<E: ContentEntity>(&self) -> Result<Vec<E>, SourceError>;

    /// `draft.id()` is ignored; the backend assigns the identifier.
    async fn create<E: ContentEntity>(&self, draft: E) -> Result<E, SourceError>;

    /// Returns the canonical record after the patch is applied.
    async fn update<E: ContentEntity>(
        &self,
        id: &str,
        patch: EntityPatch,
    ) -> Result<E, SourceError>;

    async fn delete<E: ContentEntity>(&self, id: &str) -> Result<(), SourceError>;

    async fn profile(&self) -> Result<Profile, SourceError>;

    async fn save_profile(&self, profile: Profile) -> Result<Profile, SourceError>;

    async fn analytics(&self) -> Result<AnalyticsSummary, SourceError>;

    /// Restore the backend's content to the default record set.
    async fn seed(&self) -> Result<(), SourceError>;
}

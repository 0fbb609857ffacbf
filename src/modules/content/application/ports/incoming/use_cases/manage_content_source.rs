use async_trait::async_trait;
use serde::Serialize;

use super::WriteError;
use crate::modules::content::domain::entities::EntityKind;
use crate::modules::content::domain::source::SourceStatus;

/// Outcome of a manual refresh.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshReport {
    pub status: SourceStatus,
    /// Sections that could not be loaded and show demo content.
    pub fallbacks: Vec<EntityKind>,
}

#[async_trait]
pub trait ManageContentSourceUseCase: Send + Sync {
    fn status(&self) -> SourceStatus;

    /// Re-probes the backends, then reloads every section.
    async fn refresh(&self) -> RefreshReport;

    /// Restores the default content on the writable source and reloads.
    async fn seed(&self) -> Result<RefreshReport, WriteError>;
}

use serde::Serialize;

use crate::modules::content::domain::entities::EntityKind;
use crate::modules::content::domain::source::DataOrigin;

/// A read that could not be served by the active source and was answered
/// with demo records instead.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FallbackEvent {
    pub entity: EntityKind,
    pub failed_source: DataOrigin,
    pub reason: String,
}

/// Sink for fallback notifications. Swapping the observer changes how
/// loudly degraded reads are reported without touching the selector.
pub trait FallbackObserver: Send + Sync {
    fn on_fallback(&self, event: &FallbackEvent);
}

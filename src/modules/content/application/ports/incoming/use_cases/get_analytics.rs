use async_trait::async_trait;
use serde::Serialize;

use crate::modules::content::domain::analytics::AnalyticsSummary;
use crate::modules::content::domain::source::DataOrigin;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsState {
    pub summary: Option<AnalyticsSummary>,
    pub loading: bool,
    pub origin: Option<DataOrigin>,
    pub fallback: bool,
}

#[async_trait]
pub trait GetAnalyticsUseCase: Send + Sync {
    async fn refresh(&self) -> AnalyticsState;

    async fn current(&self) -> AnalyticsState;
}

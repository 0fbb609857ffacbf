use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use super::content_source_selector::ContentSourceSelector;
use crate::modules::content::application::content_use_cases::ContentSections;
use crate::modules::content::application::ports::incoming::use_cases::{
    ManageContentSourceUseCase, RefreshReport, WriteError,
};
use crate::modules::content::application::ports::outgoing::ContentSource;
use crate::modules::content::domain::entities::EntityKind;
use crate::modules::content::domain::source::SourceStatus;

/// Manual "retry": re-probe, then reload every section concurrently.
pub struct ContentRefreshService<R, L>
where
    R: ContentSource,
    L: ContentSource,
{
    selector: Arc<ContentSourceSelector<R, L>>,
    sections: ContentSections,
}

impl<R, L> ContentRefreshService<R, L>
where
    R: ContentSource,
    L: ContentSource,
{
    pub fn new(selector: Arc<ContentSourceSelector<R, L>>, sections: ContentSections) -> Self {
        Self { selector, sections }
    }

    async fn reload(&self) -> Vec<EntityKind> {
        let s = &self.sections;
        let (profile, experience, skills, education, posts, items, analytics) = futures::join!(
            s.profile.fetch(),
            s.experience.fetch(),
            s.skills.fetch(),
            s.education.fetch(),
            s.blog_posts.fetch(),
            s.portfolio_items.fetch(),
            s.analytics.refresh(),
        );

        [
            (EntityKind::Profile, profile.fallback),
            (EntityKind::Experience, experience.fallback),
            (EntityKind::Skill, skills.fallback),
            (EntityKind::Education, education.fallback),
            (EntityKind::BlogPost, posts.fallback),
            (EntityKind::PortfolioItem, items.fallback),
            (EntityKind::Analytics, analytics.fallback),
        ]
        .into_iter()
        .filter_map(|(kind, fell_back)| fell_back.then_some(kind))
        .collect()
    }
}

#[async_trait]
impl<R, L> ManageContentSourceUseCase for ContentRefreshService<R, L>
where
    R: ContentSource + 'static,
    L: ContentSource + 'static,
{
    fn status(&self) -> SourceStatus {
        self.selector.status()
    }

    async fn refresh(&self) -> RefreshReport {
        self.selector.probe().await;
        let fallbacks = self.reload().await;

        let status = self.selector.status();
        info!(
            "Content refreshed from {} ({} sections on demo content)",
            status.active,
            fallbacks.len()
        );
        RefreshReport { status, fallbacks }
    }

    async fn seed(&self) -> Result<RefreshReport, WriteError> {
        self.selector.seed().await?;
        info!("Default content restored on {}", self.selector.status().active);

        let fallbacks = self.reload().await;
        Ok(RefreshReport {
            status: self.selector.status(),
            fallbacks,
        })
    }
}

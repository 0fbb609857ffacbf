use std::sync::Arc;

use crate::modules::content::application::ports::incoming::use_cases::{
    GetAnalyticsUseCase, ManageCollectionUseCase, ManageContentSourceUseCase,
    ManageProfileUseCase,
};
use crate::modules::content::application::ports::outgoing::ContentSource;
use crate::modules::content::application::services::{
    AnalyticsStore, CollectionStore, ContentRefreshService, ContentSourceSelector, ProfileStore,
};
use crate::modules::content::domain::entities::{
    BlogPost, Education, Experience, PortfolioItem, Skill,
};

/// The state containers behind every page section.
#[derive(Clone)]
pub struct ContentSections {
    pub profile: Arc<dyn ManageProfileUseCase + Send + Sync>,
    pub experience: Arc<dyn ManageCollectionUseCase<Experience> + Send + Sync>,
    pub skills: Arc<dyn ManageCollectionUseCase<Skill> + Send + Sync>,
    pub education: Arc<dyn ManageCollectionUseCase<Education> + Send + Sync>,
    pub blog_posts: Arc<dyn ManageCollectionUseCase<BlogPost> + Send + Sync>,
    pub portfolio_items: Arc<dyn ManageCollectionUseCase<PortfolioItem> + Send + Sync>,
    pub analytics: Arc<dyn GetAnalyticsUseCase + Send + Sync>,
}

impl ContentSections {
    pub fn from_selector<R, L>(selector: Arc<ContentSourceSelector<R, L>>) -> Self
    where
        R: ContentSource + 'static,
        L: ContentSource + 'static,
    {
        Self {
            profile: Arc::new(ProfileStore::new(selector.clone())),
            experience: Arc::new(CollectionStore::<Experience, R, L>::new(selector.clone())),
            skills: Arc::new(CollectionStore::<Skill, R, L>::new(selector.clone())),
            education: Arc::new(CollectionStore::<Education, R, L>::new(selector.clone())),
            blog_posts: Arc::new(CollectionStore::<BlogPost, R, L>::new(selector.clone())),
            portfolio_items: Arc::new(CollectionStore::<PortfolioItem, R, L>::new(selector.clone())),
            analytics: Arc::new(AnalyticsStore::new(selector)),
        }
    }
}

#[derive(Clone)]
pub struct ContentUseCases {
    pub profile: Arc<dyn ManageProfileUseCase + Send + Sync>,
    pub experience: Arc<dyn ManageCollectionUseCase<Experience> + Send + Sync>,
    pub skills: Arc<dyn ManageCollectionUseCase<Skill> + Send + Sync>,
    pub education: Arc<dyn ManageCollectionUseCase<Education> + Send + Sync>,
    pub blog_posts: Arc<dyn ManageCollectionUseCase<BlogPost> + Send + Sync>,
    pub portfolio_items: Arc<dyn ManageCollectionUseCase<PortfolioItem> + Send + Sync>,
    pub analytics: Arc<dyn GetAnalyticsUseCase + Send + Sync>,
    pub source: Arc<dyn ManageContentSourceUseCase + Send + Sync>,
}

impl ContentUseCases {
    pub fn new(
        sections: ContentSections,
        source: Arc<dyn ManageContentSourceUseCase + Send + Sync>,
    ) -> Self {
        Self {
            profile: sections.profile,
            experience: sections.experience,
            skills: sections.skills,
            education: sections.education,
            blog_posts: sections.blog_posts,
            portfolio_items: sections.portfolio_items,
            analytics: sections.analytics,
            source,
        }
    }

    /// Wires every section and the refresh service to one selector.
    pub fn from_selector<R, L>(selector: Arc<ContentSourceSelector<R, L>>) -> Self
    where
        R: ContentSource + 'static,
        L: ContentSource + 'static,
    {
        let sections = ContentSections::from_selector(selector.clone());
        let source = Arc::new(ContentRefreshService::new(selector, sections.clone()));
        Self::new(sections, source)
    }
}

use async_trait::async_trait;
use std::sync::{Arc, RwLock};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;

use super::content_source_selector::ContentSourceSelector;
use crate::modules::content::application::ports::incoming::use_cases::{
    AnalyticsState, GetAnalyticsUseCase,
};
use crate::modules::content::application::ports::outgoing::ContentSource;

pub struct AnalyticsStore<R, L>
where
    R: ContentSource,
    L: ContentSource,
{
    selector: Arc<ContentSourceSelector<R, L>>,
    state: RwLock<AnalyticsState>,
}

impl<R, L> AnalyticsStore<R, L>
where
    R: ContentSource,
    L: ContentSource,
{
    pub fn new(selector: Arc<ContentSourceSelector<R, L>>) -> Self {
        Self {
            selector,
            state: RwLock::new(AnalyticsState::default()),
        }
    }

    fn with_state<T>(&self, change: impl FnOnce(&mut AnalyticsState) -> T) -> T {
        let mut state = self
            .state
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        change(&mut state)
    }
}

#[async_trait]
impl<R, L> GetAnalyticsUseCase for AnalyticsStore<R, L>
where
    R: ContentSource + 'static,
    L: ContentSource + 'static,
{
    async fn refresh(&self) -> AnalyticsState {
        self.with_state(|s| s.loading = true);
        let fetched = self.selector.fetch_analytics().await;

        self.with_state(|s| {
            s.summary = Some(fetched.data);
            s.origin = Some(fetched.origin);
            s.fallback = fetched.fallback;
            s.loading = false;
            s.clone()
        })
    }

    async fn current(&self) -> AnalyticsState {
        let state = self.with_state(|s| s.clone());
        if state.summary.is_none() {
            return self.refresh().await;
        }
        state
    }
}

const MIN_REFRESH_PERIOD: Duration = Duration::from_secs(1);

/// Refreshes analytics every `every` (at least one second), starting one
/// period from now.
pub fn spawn_periodic_refresh(
    analytics: Arc<dyn GetAnalyticsUseCase + Send + Sync>,
    every: Duration,
) -> JoinHandle<()> {
    let every = every.max(MIN_REFRESH_PERIOD);
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        ticker.tick().await;
        loop {
            ticker.tick().await;
            let state = analytics.refresh().await;
            debug!(
                "Analytics refreshed (origin: {:?}, fallback: {})",
                state.origin, state.fallback
            );
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::content::adapter::outgoing::local::{
        LocalContentStore, MemoryKeyValueStorage, DEFAULT_STORE_KEY,
    };
    use crate::modules::content::application::ports::incoming::use_cases::ManageCollectionUseCase;
    use crate::modules::content::application::services::CollectionStore;
    use crate::modules::content::domain::entities::BlogPost;
    use crate::tests::support::stubs::{RecordingFallbackObserver, UnreachableSource};
    use std::sync::atomic::{AtomicUsize, Ordering};

    async fn local_selector() -> Arc<ContentSourceSelector<UnreachableSource, LocalContentStore>> {
        let selector = ContentSourceSelector::new(
            Some(UnreachableSource),
            Some(LocalContentStore::open(
                Arc::new(MemoryKeyValueStorage::new()),
                DEFAULT_STORE_KEY,
            )),
            Arc::new(RecordingFallbackObserver::default()),
        );
        selector.probe().await;
        Arc::new(selector)
    }

    #[tokio::test]
    async fn refresh_recomputes_from_current_content() {
        let selector = local_selector().await;
        let analytics = AnalyticsStore::new(selector.clone());
        let posts: CollectionStore<BlogPost, _, _> = CollectionStore::new(selector);

        let before = analytics.current().await.summary.unwrap();
        posts.delete("1").await.unwrap();
        let cached = analytics.current().await.summary.unwrap();
        let after = analytics.refresh().await.summary.unwrap();

        assert_eq!(before.counts.blog_posts, 3);
        assert_eq!(cached.counts.blog_posts, 3);
        assert_eq!(after.counts.blog_posts, 2);
    }

    struct CountingAnalytics {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl GetAnalyticsUseCase for CountingAnalytics {
        async fn refresh(&self) -> AnalyticsState {
            self.calls.fetch_add(1, Ordering::SeqCst);
            AnalyticsState::default()
        }

        async fn current(&self) -> AnalyticsState {
            AnalyticsState::default()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn periodic_refresh_ticks_after_each_period() {
        let counting = Arc::new(CountingAnalytics {
            calls: AtomicUsize::new(0),
        });
        let handle = spawn_periodic_refresh(counting.clone(), Duration::from_secs(300));

        tokio::time::sleep(Duration::from_secs(299)).await;
        assert_eq!(counting.calls.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_secs(302)).await;
        assert_eq!(counting.calls.load(Ordering::SeqCst), 2);

        handle.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn zero_period_is_raised_to_the_minimum() {
        let counting = Arc::new(CountingAnalytics {
            calls: AtomicUsize::new(0),
        });
        let handle = spawn_periodic_refresh(counting.clone(), Duration::ZERO);

        tokio::time::sleep(Duration::from_millis(2500)).await;

        assert!(!handle.is_finished());
        assert_eq!(counting.calls.load(Ordering::SeqCst), 2);

        handle.abort();
    }
}

use async_trait::async_trait;
use std::marker::PhantomData;
use std::sync::{Arc, RwLock};
use tracing::error;

use super::content_source_selector::ContentSourceSelector;
use crate::modules::content::application::ports::incoming::use_cases::{
    CollectionState, ManageCollectionUseCase, WriteError,
};
use crate::modules::content::application::ports::outgoing::ContentSource;
use crate::modules::content::domain::content_entity::ContentEntity;
use crate::modules::content::domain::patch::EntityPatch;

/// In-memory view of one collection, kept in step with the active source.
///
/// Concurrent calls are not queued; whichever completes last wins.
pub struct CollectionStore<E, R, L>
where
    E: ContentEntity,
    R: ContentSource,
    L: ContentSource,
{
    selector: Arc<ContentSourceSelector<R, L>>,
    state: RwLock<CollectionState<E>>,
    _entity: PhantomData<fn() -> E>,
}

impl<E, R, L> CollectionStore<E, R, L>
where
    E: ContentEntity,
    R: ContentSource,
    L: ContentSource,
{
    pub fn new(selector: Arc<ContentSourceSelector<R, L>>) -> Self {
        Self {
            selector,
            state: RwLock::new(CollectionState::default()),
            _entity: PhantomData,
        }
    }

    fn snapshot(&self) -> CollectionState<E> {
        self.state
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn with_state<T>(&self, change: impl FnOnce(&mut CollectionState<E>) -> T) -> T {
        let mut state = self
            .state
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        change(&mut state)
    }

    fn begin(&self) {
        self.with_state(|s| {
            s.loading = true;
            s.error = None;
        });
    }

    fn fail(&self, err: &WriteError) {
        error!("{} write failed: {}", E::KIND, err);
        self.with_state(|s| {
            s.loading = false;
            s.error = Some(err.to_string());
        });
    }
}

#[async_trait]
impl<E, R, L> ManageCollectionUseCase<E> for CollectionStore<E, R, L>
where
    E: ContentEntity,
    R: ContentSource + 'static,
    L: ContentSource + 'static,
{
    async fn fetch(&self) -> CollectionState<E> {
        self.begin();
        let fetched = self.selector.fetch::<E>().await;

        self.with_state(|s| {
            s.items = fetched.data;
            s.origin = Some(fetched.origin);
            s.fallback = fetched.fallback;
            s.loading = false;
            s.clone()
        })
    }

    async fn current(&self) -> CollectionState<E> {
        let state = self.snapshot();
        if state.origin.is_none() {
            return self.fetch().await;
        }
        state
    }

    async fn create(&self, draft: E) -> Result<E, WriteError> {
        self.begin();
        match self.selector.create(draft).await {
            Ok(created) => {
                self.with_state(|s| {
                    s.items.push(created.clone());
                    s.loading = false;
                });
                Ok(created)
            }
            Err(e) => {
                self.fail(&e);
                Err(e)
            }
        }
    }

    async fn update(&self, id: &str, patch: EntityPatch) -> Result<E, WriteError> {
        self.begin();
        match self.selector.update::<E>(id, patch).await {
            Ok(updated) => {
                self.with_state(|s| {
                    for item in s.items.iter_mut().filter(|i| i.id() == id) {
                        *item = updated.clone();
                    }
                    s.loading = false;
                });
                Ok(updated)
            }
            Err(e) => {
                self.fail(&e);
                Err(e)
            }
        }
    }

    async fn delete(&self, id: &str) -> Result<(), WriteError> {
        self.begin();
        match self.selector.delete::<E>(id).await {
            Ok(()) => {
                self.with_state(|s| {
                    s.items.retain(|i| i.id() != id);
                    s.loading = false;
                });
                Ok(())
            }
            Err(e) => {
                self.fail(&e);
                Err(e)
            }
        }
    }
}

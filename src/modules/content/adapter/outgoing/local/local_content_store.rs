use async_trait::async_trait;
use serde_json::{Map, Value};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::modules::content::application::ports::outgoing::{
    ContentSource, KeyValueStorage, SourceError, StorageError,
};
use crate::modules::content::domain::analytics::AnalyticsSummary;
use crate::modules::content::domain::content_entity::ContentEntity;
use crate::modules::content::domain::entities::{ContentSnapshot, Profile};
use crate::modules::content::domain::patch::EntityPatch;

pub const DEFAULT_STORE_KEY: &str = "portfolio-cms-data";

const REQUIRED_ARRAYS: [&str; 2] = ["blogPosts", "portfolioItems"];
const OPTIONAL_ARRAYS: [&str; 3] = ["experience", "skills", "education"];
/// Written by older builds that kept the admin flag inside the document.
const LEGACY_ADMIN_FIELD: &str = "isAdmin";

//
// ──────────────────────────────────────────────────────────
// Document shape
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DocumentError {
    #[error("Stored document is not valid JSON: {0}")]
    NotJson(String),

    #[error("Stored document is not an object")]
    NotAnObject,

    #[error("Stored document is missing `{0}`")]
    MissingCollection(&'static str),

    #[error("Stored field `{0}` is not an array")]
    NotAnArray(&'static str),

    #[error("Stored profile is not an object")]
    ProfileNotAnObject,

    #[error("Stored document does not match the content model: {0}")]
    Invalid(String),
}

/// Parses a persisted document, accepting older documents that lack some
/// collections by filling the gaps from the default content.
pub fn parse_document(raw: &str) -> Result<ContentSnapshot, DocumentError> {
    let value: Value =
        serde_json::from_str(raw).map_err(|e| DocumentError::NotJson(e.to_string()))?;

    let Value::Object(mut doc) = value else {
        return Err(DocumentError::NotAnObject);
    };

    for field in REQUIRED_ARRAYS {
        match doc.get(field) {
            Some(Value::Array(_)) => {}
            Some(_) => return Err(DocumentError::NotAnArray(field)),
            None => return Err(DocumentError::MissingCollection(field)),
        }
    }

    for field in OPTIONAL_ARRAYS {
        if let Some(v) = doc.get(field) {
            if !v.is_array() {
                return Err(DocumentError::NotAnArray(field));
            }
        }
    }

    if let Some(profile) = doc.get("profile") {
        if !profile.is_object() {
            return Err(DocumentError::ProfileNotAnObject);
        }
    }

    doc.remove(LEGACY_ADMIN_FIELD);
    fill_from_defaults(&mut doc)?;

    serde_json::from_value(Value::Object(doc)).map_err(|e| DocumentError::Invalid(e.to_string()))
}

fn fill_from_defaults(doc: &mut Map<String, Value>) -> Result<(), DocumentError> {
    let defaults = serde_json::to_value(ContentSnapshot::demo())
        .map_err(|e| DocumentError::Invalid(e.to_string()))?;

    if let Value::Object(defaults) = defaults {
        for (key, value) in defaults {
            doc.entry(key).or_insert(value);
        }
    }
    Ok(())
}

//
// ──────────────────────────────────────────────────────────
// Store
// ──────────────────────────────────────────────────────────
//

/// The whole content tree kept as one JSON document under one storage key.
///
/// Reads are served from memory; every mutation rewrites the document on the
/// blocking pool and only then replaces the in-memory copy.
pub struct LocalContentStore {
    storage: Arc<dyn KeyValueStorage>,
    key: String,
    snapshot: Mutex<ContentSnapshot>,
}

impl LocalContentStore {
    /// Loads the stored document. A corrupt document is discarded and the
    /// default content is used instead; opening never fails.
    pub fn open(storage: Arc<dyn KeyValueStorage>, key: impl Into<String>) -> Self {
        let key = key.into();

        let snapshot = match storage.get(&key) {
            Ok(Some(raw)) => match parse_document(&raw) {
                Ok(snapshot) => snapshot,
                Err(e) => {
                    warn!("Discarding local content under '{}': {}", key, e);
                    discard(storage.as_ref(), &key)
                }
            },
            Ok(None) => {
                debug!("No local content under '{}', using defaults", key);
                ContentSnapshot::demo()
            }
            Err(StorageError::Corrupt(e)) => {
                warn!("Discarding unreadable local content under '{}': {}", key, e);
                discard(storage.as_ref(), &key)
            }
            Err(e) => {
                warn!("Local storage unreadable for '{}': {}", key, e);
                ContentSnapshot::demo()
            }
        };

        Self {
            storage,
            key,
            snapshot: Mutex::new(snapshot),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub async fn snapshot(&self) -> ContentSnapshot {
        self.snapshot.lock().await.clone()
    }

    /// The lock is held until the write lands; mutations persist in call order.
    async fn mutate<T, F>(&self, change: F) -> Result<T, SourceError>
    where
        T: Send,
        F: FnOnce(&mut ContentSnapshot) -> Result<T, SourceError> + Send,
    {
        let mut current = self.snapshot.lock().await;

        let mut next = current.clone();
        let out = change(&mut next)?;

        let raw =
            serde_json::to_string(&next).map_err(|e| SourceError::Storage(e.to_string()))?;
        let storage = Arc::clone(&self.storage);
        let key = self.key.clone();
        tokio::task::spawn_blocking(move || storage.set(&key, &raw))
            .await
            .map_err(|e| SourceError::Storage(e.to_string()))?
            .map_err(|e| SourceError::Storage(e.to_string()))?;

        *current = next;
        Ok(out)
    }
}

fn discard(storage: &dyn KeyValueStorage, key: &str) -> ContentSnapshot {
    if let Err(e) = storage.remove(key) {
        warn!("Failed to remove corrupt local content '{}': {}", key, e);
    }
    ContentSnapshot::demo()
}

#[async_trait]
impl ContentSource for LocalContentStore {
    async fn probe(&self) -> Result<(), SourceError> {
        Ok(())
    }

    async fn list<E: ContentEntity>(&self) -> Result<Vec<E>, SourceError> {
        let snapshot = self.snapshot.lock().await;
        Ok(E::collection(&snapshot).clone())
    }

    async fn create<E: ContentEntity>(&self, draft: E) -> Result<E, SourceError> {
        self.mutate(|snapshot| {
            let mut record = draft;
            record.set_id(Uuid::new_v4().to_string());
            record.touch();

            E::collection_mut(snapshot).push(record.clone());
            Ok(record)
        })
        .await
    }

    async fn update<E: ContentEntity>(
        &self,
        id: &str,
        patch: EntityPatch,
    ) -> Result<E, SourceError> {
        self.mutate(|snapshot| {
            let records = E::collection_mut(snapshot);
            let slot = records
                .iter_mut()
                .find(|r| r.id() == id)
                .ok_or_else(|| SourceError::NotFound(id.to_string()))?;

            let mut updated = patch.apply_to::<E>(&*slot)?;
            updated.touch();

            *slot = updated.clone();
            Ok(updated)
        })
        .await
    }

    async fn delete<E: ContentEntity>(&self, id: &str) -> Result<(), SourceError> {
        self.mutate(|snapshot| {
            let records = E::collection_mut(snapshot);
            let before = records.len();
            records.retain(|r| r.id() != id);

            if records.len() == before {
                return Err(SourceError::NotFound(id.to_string()));
            }
            Ok(())
        })
        .await
    }

    async fn profile(&self) -> Result<Profile, SourceError> {
        Ok(self.snapshot().await.profile)
    }

    async fn save_profile(&self, profile: Profile) -> Result<Profile, SourceError> {
        self.mutate(|snapshot| {
            snapshot.profile = profile.clone();
            Ok(profile)
        })
        .await
    }

    async fn analytics(&self) -> Result<AnalyticsSummary, SourceError> {
        Ok(AnalyticsSummary::from_snapshot(&self.snapshot().await))
    }

    async fn seed(&self) -> Result<(), SourceError> {
        self.mutate(|snapshot| {
            *snapshot = ContentSnapshot::demo();
            Ok(())
        })
        .await
    }
}

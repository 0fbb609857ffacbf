use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use super::envelope::{error_message, DataEnvelope};
use super::remote_config::RemoteApiConfig;
use crate::modules::content::application::ports::outgoing::{ContentSource, SourceError};
use crate::modules::content::domain::analytics::AnalyticsSummary;
use crate::modules::content::domain::content_entity::ContentEntity;
use crate::modules::content::domain::entities::{EntityKind, Profile};
use crate::modules::content::domain::patch::EntityPatch;

const SEED: &str = "seed";

/// CRUD client for the hosted content API.
#[derive(Clone)]
pub struct RemoteContentClient {
    client: Client,
    config: RemoteApiConfig,
}

impl RemoteContentClient {
    pub fn new(config: RemoteApiConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &RemoteApiConfig {
        &self.config
    }

    fn record_url<E: ContentEntity>(&self, id: &str) -> String {
        self.config
            .url(&format!("{}/{}", self.config.collection_path(E::KIND), id))
    }

    fn singleton_url(&self, kind: EntityKind) -> String {
        self.config.url(self.config.collection_path(kind))
    }

    fn collection_url<E: ContentEntity>(&self) -> String {
        self.config.url(self.config.collection_path(E::KIND))
    }

    async fn execute(&self, request: RequestBuilder) -> Result<String, SourceError> {
        let response = request
            .bearer_auth(&self.config.api_key)
            .send()
            .await
            .map_err(|e| SourceError::Unreachable(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SourceError::Unreachable(e.to_string()))?;

        if status.is_success() {
            return Ok(body);
        }

        let message = error_message(&body);
        debug!("Content API answered {}: {}", status, message);

        if status == StatusCode::NOT_FOUND {
            return Err(SourceError::NotFound(message));
        }
        Err(SourceError::Rejected {
            status: status.as_u16(),
            message,
        })
    }

    async fn fetch_data<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, SourceError> {
        let body = self.execute(request).await?;
        serde_json::from_str::<DataEnvelope<T>>(&body)
            .map(|envelope| envelope.data)
            .map_err(|e| SourceError::Decode(e.to_string()))
    }
}

/// The server assigns ids, so a draft goes out without one.
fn draft_body<E: ContentEntity>(draft: &E) -> Result<Value, SourceError> {
    let mut body = serde_json::to_value(draft).map_err(|e| SourceError::Decode(e.to_string()))?;
    if let Value::Object(fields) = &mut body {
        fields.remove("id");
    }
    Ok(body)
}

#[async_trait]
impl ContentSource for RemoteContentClient {
    async fn probe(&self) -> Result<(), SourceError> {
        self.execute(self.client.get(self.singleton_url(EntityKind::Profile)))
            .await
            .map(|_| ())
    }

    async fn list<E: ContentEntity>(&self) -> Result<Vec<E>, SourceError> {
        self.fetch_data(self.client.get(self.collection_url::<E>()))
            .await
    }

    async fn create<E: ContentEntity>(&self, draft: E) -> Result<E, SourceError> {
        let body = draft_body(&draft)?;
        self.fetch_data(self.client.post(self.collection_url::<E>()).json(&body))
            .await
    }

    async fn update<E: ContentEntity>(
        &self,
        id: &str,
        patch: EntityPatch,
    ) -> Result<E, SourceError> {
        self.fetch_data(self.client.put(self.record_url::<E>(id)).json(&patch))
            .await
    }

    async fn delete<E: ContentEntity>(&self, id: &str) -> Result<(), SourceError> {
        self.execute(self.client.delete(self.record_url::<E>(id)))
            .await
            .map(|_| ())
    }

    async fn profile(&self) -> Result<Profile, SourceError> {
        self.fetch_data(self.client.get(self.singleton_url(EntityKind::Profile)))
            .await
    }

    async fn save_profile(&self, profile: Profile) -> Result<Profile, SourceError> {
        self.fetch_data(self.client.put(self.singleton_url(EntityKind::Profile)).json(&profile))
            .await
    }

    async fn analytics(&self) -> Result<AnalyticsSummary, SourceError> {
        self.fetch_data(self.client.get(self.singleton_url(EntityKind::Analytics)))
            .await
    }

    async fn seed(&self) -> Result<(), SourceError> {
        self.execute(self.client.post(self.config.url(SEED)))
            .await
            .map(|_| ())
    }
}

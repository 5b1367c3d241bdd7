//! Hosted document database participant store.
//!
//! Talks to a document database REST API: one document per participant in a
//! single collection. Document ids are assigned by the server.
//!
//! Collection URL:
//! `{base_url}/projects/{project_id}/databases/(default)/documents/{collection}`

use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use std::time::Duration;

use qweek_core::QweekError;
use qweek_core::config::DocumentStoreConfig;
use qweek_core::error::Result;
use qweek_core::participant::{NewParticipant, Participant, ParticipantRepository};

use crate::dto::{DocumentDto, ListDocumentsResponse};

const PAGE_SIZE: &str = "300";

/// REST-backed participant repository.
#[derive(Clone)]
pub struct DocumentStoreParticipantRepository {
    client: Client,
    collection_url: String,
    api_key: Option<String>,
}

impl DocumentStoreParticipantRepository {
    /// Creates a repository for the configured collection.
    ///
    /// # Errors
    ///
    /// Returns `QweekError::Config` if no project is configured or the HTTP
    /// client cannot be built.
    pub fn new(config: &DocumentStoreConfig) -> Result<Self> {
        if config.project_id.trim().is_empty() {
            return Err(QweekError::config(
                "Document store requires a project_id (store.document.project_id)",
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| QweekError::config(format!("Failed to build HTTP client: {}", e)))?;

        let collection_url = collection_url(config);
        tracing::debug!("Document store collection at {}", collection_url);

        Ok(Self {
            client,
            collection_url,
            api_key: config.api_key.clone(),
        })
    }

    pub fn collection_url(&self) -> &str {
        &self.collection_url
    }

    fn with_key(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.api_key {
            Some(key) => request.query(&[("key", key.as_str())]),
            None => request,
        }
    }

    async fn fetch_page(&self, page_token: Option<&str>) -> Result<ListDocumentsResponse> {
        let mut request = self
            .client
            .get(&self.collection_url)
            .query(&[("pageSize", PAGE_SIZE)]);
        if let Some(token) = page_token {
            request = request.query(&[("pageToken", token)]);
        }

        let response = send(self.with_key(request), "list participants").await?;
        let response = ensure_success(response, "list participants").await?;
        response
            .json::<ListDocumentsResponse>()
            .await
            .map_err(|e| QweekError::data_access(format!("Failed to parse document list: {}", e)))
    }
}

pub(crate) fn collection_url(config: &DocumentStoreConfig) -> String {
    format!(
        "{}/projects/{}/databases/(default)/documents/{}",
        config.base_url.trim_end_matches('/'),
        config.project_id.trim(),
        config.collection.trim_matches('/'),
    )
}

async fn send(request: RequestBuilder, action: &str) -> Result<Response> {
    request
        .send()
        .await
        .map_err(|e| QweekError::data_access(format!("Failed to {}: {}", action, e)))
}

async fn ensure_success(response: Response, action: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let error_text = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    Err(QweekError::data_access(format!(
        "Document store error while trying to {} ({}): {}",
        action, status, error_text
    )))
}

#[async_trait]
impl ParticipantRepository for DocumentStoreParticipantRepository {
    async fn list(&self) -> Result<Vec<Participant>> {
        let mut participants = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let page = self.fetch_page(page_token.as_deref()).await.map_err(|e| {
                tracing::error!("Failed to read participants: {}", e);
                e
            })?;
            for document in page.documents {
                match document.into_participant() {
                    Ok(participant) => participants.push(participant),
                    Err(e) => tracing::warn!("Skipping unreadable participant document: {}", e),
                }
            }
            match page.next_page_token.filter(|t| !t.is_empty()) {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        Ok(participants)
    }

    async fn find_by_name(&self, first_name: &str, last_name: &str) -> Result<Option<Participant>> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .find(|p| p.matches_name(first_name, last_name)))
    }

    async fn add(&self, participant: NewParticipant) -> Result<Participant> {
        let body = DocumentDto::from_new_participant(&participant, Utc::now());
        let request = self.client.post(&self.collection_url).json(&body);

        let response = send(self.with_key(request), "save participant").await?;
        let response = ensure_success(response, "save participant").await?;
        let created: DocumentDto = response
            .json()
            .await
            .map_err(|e| QweekError::data_access(format!("Failed to parse saved document: {}", e)))?;

        let saved = created.into_participant()?;
        tracing::info!(
            "Saved result for {} {} ({}/{}) as {}",
            saved.first_name,
            saved.last_name,
            saved.score,
            saved.total,
            saved.id
        );
        Ok(saved)
    }

    async fn delete_by_id(&self, id: &str) -> Result<()> {
        let url = format!("{}/{}", self.collection_url, id);
        // Without the precondition a missing document deletes successfully.
        let request = self
            .client
            .delete(&url)
            .query(&[("currentDocument.exists", "true")]);

        let response = send(self.with_key(request), "delete participant").await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(QweekError::not_found("participant", id));
        }
        ensure_success(response, "delete participant").await?;

        tracing::info!("Deleted participant {}", id);
        Ok(())
    }
}

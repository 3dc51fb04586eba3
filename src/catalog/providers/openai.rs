//! OpenAI provider for the model catalog.
//!
//! Lists models through `GET /models`. The endpoint returns the whole
//! catalog in one response, so there is no pagination to follow.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::Deserialize;

use crate::catalog::{Catalog, CatalogError, CatalogProvider, ModelRecord};

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

// ============================================================================
// OpenAI Models API Types
// ============================================================================

/// Body of `GET /models`
#[derive(Deserialize, Debug)]
struct ModelListResponse {
    data: Vec<ApiModel>,
}

/// A single entry of the `data` array. Other fields (`object`, `owned_by`)
/// are ignored.
#[derive(Deserialize, Debug)]
struct ApiModel {
    id: String,
    created: i64,
}

/// Error envelope returned on non-2xx responses
#[derive(Deserialize, Debug)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize, Debug)]
struct ApiErrorDetail {
    message: String,
}

// ============================================================================
// Translation Layer
// ============================================================================

fn response_to_catalog(response: ModelListResponse) -> Catalog {
    response
        .data
        .into_iter()
        .map(|model| ModelRecord::new(model.id, model.created))
        .collect()
}

/// Pulls `error.message` out of an OpenAI error body, falling back to the raw text.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) => parsed.error.message,
        Err(_) if body.trim().is_empty() => "unknown error".to_string(),
        Err(_) => body.trim().to_string(),
    }
}

// ============================================================================
// Provider Implementation
// ============================================================================

/// OpenAI API provider for the model listing endpoint
pub struct OpenAiProvider {
    api_key: String,
    base_url: String,
    organization: Option<String>,
    timeout: Option<Duration>,
    client: reqwest::Client,
}

impl OpenAiProvider {
    /// Creates a new OpenAI provider.
    ///
    /// # Arguments
    /// * `api_key` - OpenAI API key
    /// * `base_url` - Optional custom base URL (defaults to OpenAI's API)
    pub fn new(api_key: String, base_url: Option<String>) -> Self {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string());
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            organization: None,
            timeout: None,
            client: reqwest::Client::new(),
        }
    }

    /// Sends the `OpenAI-Organization` header with every request.
    pub fn with_organization(mut self, organization: Option<String>) -> Self {
        self.organization = organization;
        self
    }

    /// Bounds each request so a stalled fetch turns into a `Network` error.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[async_trait]
impl CatalogProvider for OpenAiProvider {
    fn name(&self) -> &str {
        "openai"
    }

    async fn list_models(&self) -> Result<Catalog, CatalogError> {
        let url = format!("{}/models", self.base_url);
        info!("OpenAI list models request: {}", url);

        let mut request = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.api_key));
        if let Some(org) = &self.organization {
            request = request.header("OpenAI-Organization", org.as_str());
        }
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        debug!("OpenAI response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response.text().await.unwrap_or_default();
            warn!("OpenAI API error: {} - {}", status, err_body);
            return Err(CatalogError::Api {
                status,
                message: error_message(&err_body),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;
        let parsed: ModelListResponse =
            serde_json::from_str(&body).map_err(|e| CatalogError::Parse(e.to_string()))?;

        let catalog = response_to_catalog(parsed);
        info!("Fetched {} models", catalog.len());
        Ok(catalog)
    }
}

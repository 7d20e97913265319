//! Client for the character-builder proxy service.
//!
//! One sequential request/response exchange per operation: no retries, no
//! backpressure. A transport failure, a deserialization failure, or an
//! explicit `success=false` envelope all reject the whole operation with a
//! human-readable message; the caller presents it to the user.

use grimoire_data::{FeatDefinition, FeatureDocument, ProxyResponse};
use log::{info, warn};
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

use crate::config::ImporterConfig;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Failure modes for a proxy exchange.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("proxy request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("character service rejected the request: {0}")]
    Rejected(String),
    #[error("proxy response reported success but carried no payload")]
    MissingData,
}

/// Body every proxy endpoint expects.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProxyRequest<'a> {
    cobalt: &'a str,
    campaign_id: &'a str,
    beta_key: &'a str,
}

/// Async client for the proxy service.
pub struct ProxyClient {
    client: reqwest::Client,
    config: ImporterConfig,
}

impl ProxyClient {
    pub fn new(config: ImporterConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        ProxyClient { client, config }
    }

    fn request_body(&self) -> ProxyRequest<'_> {
        ProxyRequest {
            cobalt: &self.config.cobalt,
            campaign_id: &self.config.campaign_id,
            beta_key: &self.config.beta_key,
        }
    }

    /// Fetch all feats visible to the configured account and remap them into
    /// feature documents ready for effect extraction.
    ///
    /// # Errors
    /// Transport or deserialization failure, or a `success=false` envelope.
    pub async fn fetch_feats(&self) -> Result<Vec<FeatureDocument>, FetchError> {
        let url = format!("{}/proxy/feats", self.config.api_endpoint);
        info!("fetching feats from {url}");
        let response: ProxyResponse<Vec<FeatDefinition>> = self
            .client
            .post(&url)
            .json(&self.request_body())
            .send()
            .await?
            .json()
            .await?;

        if !response.success {
            warn!("feat fetch rejected: {}", response.message);
            return Err(FetchError::Rejected(response.message));
        }
        let definitions = response.data.ok_or(FetchError::MissingData)?;
        info!("fetched {} feat definitions", definitions.len());
        Ok(definitions.into_iter().map(feat_document).collect())
    }
}

/// Remap a service feat definition into a feature document.
pub fn feat_document(definition: FeatDefinition) -> FeatureDocument {
    FeatureDocument {
        name: definition.name,
        description: definition.description,
        ..FeatureDocument::default()
    }
}

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::errors::DispatchError;
use super::traits::Recommender;
use crate::config::AppConfig;
use crate::models::{RecommendationRequest, RecommendationResponse};

const USER_AGENT: &str = concat!("moodsync/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the recommendation endpoint.
#[derive(Clone)]
pub struct RecommendClient {
    client: Client,
    endpoint: String,
}

impl RecommendClient {
    pub fn new(config: &AppConfig) -> Result<Self, DispatchError> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        // 0 disables the timeout
        if config.request_timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.request_timeout_secs));
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Recommender for RecommendClient {
    async fn recommend(&self, content: &str) -> Result<RecommendationResponse, DispatchError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(DispatchError::EmptyInput);
        }

        log::info!(
            "Requesting recommendations from {} ({} chars)",
            self.endpoint,
            content.chars().count()
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(&RecommendationRequest::text(content))
            .send()
            .await
            .map_err(|e| {
                log::error!("Recommendation request failed: {}", e);
                DispatchError::from(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("Recommendation request failed ({}) at {}", status, self.endpoint);
            return Err(DispatchError::Http(status.as_u16()));
        }

        let text = response.text().await.map_err(|e| {
            log::error!("Failed to read recommendation response: {}", e);
            DispatchError::from(e)
        })?;

        let data: RecommendationResponse = serde_json::from_str(&text).map_err(|e| {
            log::warn!("Failed to parse recommendation response: {}", e);
            DispatchError::from(e)
        })?;

        if let Some(message) = data.application_error() {
            log::warn!("Server reported an error: {}", message);
            return Err(DispatchError::Application(message.to_string()));
        }

        log::info!("Received {} recommended tracks", data.results.len());
        Ok(data)
    }
}

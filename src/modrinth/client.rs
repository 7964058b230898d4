//! Modrinth REST API Client
//!
//! Thin GET-and-parse client over the public Modrinth v2 API.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use super::error::{ModrinthError, ModrinthResult};

/// Default public API base
pub const DEFAULT_BASE_URL: &str = "https://api.modrinth.com/v2";

/// Anything that can resolve an API path to a JSON document.
///
/// The aggregator only depends on this, so passes can run against
/// in-memory fixtures as well as the live API.
#[async_trait]
pub trait Transport: Send + Sync {
    /// GET `path` relative to the API base and parse the body as JSON
    async fn call(&self, path: &str) -> ModrinthResult<Value>;
}

/// Configuration for the Modrinth client
#[derive(Debug, Clone)]
pub struct ModrinthConfig {
    /// Base URL for the API (e.g., "https://api.modrinth.com/v2")
    pub base_url: String,
    /// User agent sent with every request
    pub user_agent: String,
}

impl Default for ModrinthConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: default_user_agent(),
        }
    }
}

/// User agent identifying this tool to Modrinth
pub fn default_user_agent() -> String {
    format!("review-lag/{}", env!("CARGO_PKG_VERSION"))
}

/// Modrinth REST API client
pub struct ModrinthClient {
    client: Client,
    config: ModrinthConfig,
}

impl ModrinthClient {
    /// Create a new client with the given configuration
    pub fn new(config: ModrinthConfig) -> ModrinthResult<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { client, config })
    }

    /// Absolute URL for a path relative to the API base
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[async_trait]
impl Transport for ModrinthClient {
    async fn call(&self, path: &str) -> ModrinthResult<Value> {
        let url = self.url_for(path);
        tracing::debug!(url = %url, "Modrinth GET");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ModrinthError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ModrinthError::RequestFailed(status.to_string()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ModrinthError::RequestFailed(e.to_string()))?;

        Ok(serde_json::from_slice(&body)?)
    }
}

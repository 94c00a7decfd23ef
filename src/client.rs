use crate::models::{CheckRun, CheckSummary};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:9967";
const CHECKS_PATH: &str = "/api/v1/checks";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Response status: {0}")]
    Status(u16),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("failed to parse response: {0}")]
    Decode(String),
}

impl FetchError {
    /// Whether trying again later could plausibly succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            FetchError::Transport(_) => true,
            FetchError::Status(code) => *code >= 500,
            FetchError::Decode(_) => false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FetchResponse {
    pub status: u16,
    pub body: String,
}

impl FetchResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait::async_trait]
pub trait CheckFetcher: Send + Sync {
    async fn get(&self, url: &str) -> Result<FetchResponse, FetchError>;
}

pub struct ReqwestFetcher {
    client: reqwest::Client,
}

impl ReqwestFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for ReqwestFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl CheckFetcher for ReqwestFetcher {
    async fn get(&self, url: &str) -> Result<FetchResponse, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| FetchError::Transport(err.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|err| FetchError::Transport(format!("failed to read response: {err}")))?;
        Ok(FetchResponse { status, body })
    }
}

/// Client for the agent's check API.
///
/// An empty base URL produces relative request paths.
#[derive(Clone)]
pub struct ApiClient {
    fetcher: Arc<dyn CheckFetcher>,
    base_url: String,
}

impl ApiClient {
    pub fn new(fetcher: Arc<dyn CheckFetcher>, base_url: &str) -> Self {
        Self {
            fetcher,
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn fetch_dashboard_data(&self) -> Result<Vec<CheckSummary>, FetchError> {
        self.fetch_json(CHECKS_PATH).await
    }

    pub async fn fetch_named_check_data(&self, name: &str) -> Result<Vec<CheckRun>, FetchError> {
        self.fetch_json(&named_check_path(name)).await
    }

    pub async fn fetch_named_check_failures(
        &self,
        name: &str,
    ) -> Result<Vec<CheckRun>, FetchError> {
        let path = format!("{}/failures", named_check_path(name));
        self.fetch_json(&path).await
    }

    pub async fn fetch_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "fetching check data");

        let result = self.fetch_and_decode(&url).await;
        if let Err(err) = &result {
            error!(%url, error = %err, transient = err.is_transient(), "check data fetch failed");
        }
        result
    }

    async fn fetch_and_decode<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let response = self.fetcher.get(url).await?;
        if !response.ok() {
            return Err(FetchError::Status(response.status));
        }
        serde_json::from_str(&response.body).map_err(|err| FetchError::Decode(err.to_string()))
    }
}

fn named_check_path(name: &str) -> String {
    format!("{CHECKS_PATH}/{}", urlencoding::encode(name))
}

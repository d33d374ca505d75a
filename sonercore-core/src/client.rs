//! Analysis service client.

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use tracing::{info, warn};

use crate::config::ClientConfig;
use crate::errors::{AnalysisError, AnalysisResult};
use crate::model::{AnalysisRequest, AnalysisResponse};

/// Anything that can turn a repository URL into an analysis result.
#[async_trait]
pub trait AnalysisService: Send + Sync {
    async fn analyze(&self, repo_url: &str) -> AnalysisResult<AnalysisResponse>;
}

/// JSON-over-HTTP client for the analysis endpoint.
#[derive(Debug, Clone)]
pub struct HttpAnalysisClient {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpAnalysisClient {
    pub fn new(config: &ClientConfig) -> AnalysisResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("sonercore/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            endpoint: config.service_url.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl AnalysisService for HttpAnalysisClient {
    async fn analyze(&self, repo_url: &str) -> AnalysisResult<AnalysisResponse> {
        if repo_url.is_empty() {
            return Err(AnalysisError::EmptyRepoUrl);
        }

        info!("Analyzing repo: {}", repo_url);
        let response = self
            .http
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .json(&AnalysisRequest::new(repo_url))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or("Unknown status");
            let body = response.text().await.unwrap_or_default();
            warn!("Analysis service returned {} for {}", status, repo_url);
            return Err(AnalysisError::status(status.as_u16(), reason, body));
        }

        let bytes = response.bytes().await?;
        let parsed: AnalysisResponse = serde_json::from_slice(&bytes)?;
        info!(
            "Analysis finished: {} files, {} functions",
            parsed.files.len(),
            parsed.function_count()
        );
        Ok(parsed)
    }
}

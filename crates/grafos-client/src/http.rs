use async_trait::async_trait;
use grafos_core::error::{GrafosError, Result};
use grafos_core::models::{AnalysisRequest, AnalysisResult};
use grafos_core::ports::AnalysisBackend;
use serde::Deserialize;

use crate::detail::service_error;

/// HTTP adapter for the analysis service
pub struct HttpBackend {
    /// Base URL of the service (e.g., "http://localhost:8000")
    base_url: String,

    /// HTTP client
    client: reqwest::Client,
}

impl HttpBackend {
    /// Create a new backend adapter
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Create with default localhost URL
    pub fn localhost() -> Self {
        Self::new(grafos_core::config::DEFAULT_BACKEND_URL)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path)
    }
}

#[async_trait]
impl AnalysisBackend for HttpBackend {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult> {
        tracing::debug!(
            city = request.city(),
            mode = request.mode(),
            radius_km = request.radius_km(),
            metrics = ?request.requested_metrics(),
            do_h3 = request.do_h3(),
            h3_res = request.h3_res(),
            color_by = request.color_by(),
            allow_synthetic = request.allow_synthetic(),
            "Posting analysis request"
        );

        let response = self
            .client
            .post(self.endpoint("analyze"))
            .json(request)
            .send()
            .await
            .map_err(|e| GrafosError::Transport {
                reason: format!("Failed to reach {}: {}", self.base_url, e),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(service_error(status.as_u16(), &body));
        }

        response.json::<AnalysisResult>().await.map_err(|e| GrafosError::Decode {
            reason: format!("Failed to parse analysis response: {}", e),
        })
    }

    async fn health(&self) -> Result<()> {
        let response = self.client.get(self.endpoint("health")).send().await.map_err(|e| {
            GrafosError::Transport { reason: format!("Failed to reach {}: {}", self.base_url, e) }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(service_error(status.as_u16(), &body));
        }

        let health: HealthResponse = response.json().await.map_err(|e| GrafosError::Decode {
            reason: format!("Failed to parse health response: {}", e),
        })?;

        if health.status == "ok" {
            Ok(())
        } else {
            Err(GrafosError::Decode { reason: format!("Unexpected health status: {}", health.status) })
        }
    }
}

/// Response from the health endpoint
#[derive(Debug, Deserialize)]
struct HealthResponse {
    status: String,
}

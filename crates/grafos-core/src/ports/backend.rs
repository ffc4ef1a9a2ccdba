use async_trait::async_trait;

use crate::error::Result;
use crate::models::{AnalysisRequest, AnalysisResult};

/// Port for the remote street-network analysis service
#[async_trait]
pub trait AnalysisBackend: Send + Sync {
    /// Run one analysis and return its result payload
    ///
    /// # Errors
    /// `GrafosError::Service` for a non-success response (with the detail the
    /// service reported), `GrafosError::Transport` when the call itself failed,
    /// `GrafosError::Decode` when a success body cannot be read.
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult>;

    /// Check that the service is up
    async fn health(&self) -> Result<()>;
}

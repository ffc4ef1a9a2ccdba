//! Health command implementation

use crate::output::OutputWriter;
use crate::output_types::HealthOutput;
use super::AlreadyReported;
use anyhow::Result;
use grafos_client::HttpBackend;
use grafos_core::config::LayeredConfig;
use grafos_core::ports::AnalysisBackend;

pub async fn execute(config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let backend = HttpBackend::new(config.backend_url.value.as_str());
    let outcome = backend.health().await;

    let health = HealthOutput {
        backend_url: backend.base_url().to_string(),
        healthy: outcome.is_ok(),
        error: outcome.as_ref().err().map(ToString::to_string),
    };

    if output.is_json() {
        output.result(&health)?;
    } else if health.healthy {
        output.success(format!("Analysis service is up at {}", health.backend_url));
    } else {
        let reason = health.error.as_deref().unwrap_or_default();
        output.error(format!("Analysis service at {} is not healthy: {}", health.backend_url, reason));
    }

    if outcome.is_err() {
        return Err(AlreadyReported.into());
    }
    Ok(())
}

use grafos_client::LifecycleStatus;
use grafos_core::config::ConfigSource;
use grafos_core::models::{ArtifactKind, LatLng, LayerKind, LegendControl};
use grafos_render::metrics::{MetricItem, MetricRow};
use serde::Serialize;
use tabled::Tabled;

/// Output for analyze and each interactive round
#[derive(Debug, Serialize)]
pub struct AnalyzeOutput {
    pub status: LifecycleStatus,
    pub view: Option<ViewInfo>,
    pub layers: Vec<LayerSummary>,
    pub legend: Option<LegendControl>,
    pub metrics: Option<MetricsOutput>,
    pub downloads: Vec<DownloadInfo>,
}

#[derive(Debug, Serialize)]
pub struct ViewInfo {
    pub center: LatLng,
    pub zoom: f64,
}

#[derive(Debug, Serialize)]
pub struct LayerSummary {
    pub kind: LayerKind,
    pub features: usize,
    pub popups: usize,
}

#[derive(Debug, Serialize)]
pub struct MetricsOutput {
    pub summary: Vec<MetricItem>,
    pub table: Vec<MetricRow>,
}

#[derive(Debug, Serialize)]
pub struct DownloadInfo {
    pub kind: ArtifactKind,
    pub file_name: String,
    pub href_len: usize,
    pub written_to: Option<String>,
}

/// Output for health command
#[derive(Debug, Serialize)]
pub struct HealthOutput {
    pub backend_url: String,
    pub healthy: bool,
    pub error: Option<String>,
}

/// Output for config command
#[derive(Debug, Serialize)]
pub struct ConfigOutput {
    pub entries: Vec<ConfigEntry>,
}

#[derive(Debug, Serialize, Tabled)]
pub struct ConfigEntry {
    #[tabled(rename = "Key")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
    #[tabled(rename = "Source", display_with = "display_source")]
    pub source: ConfigSource,
}

fn display_source(source: &ConfigSource) -> String {
    format!("{:?}", source)
}

/// Summary table row
#[derive(Debug, Tabled)]
pub struct SummaryRow {
    #[tabled(rename = "Metric")]
    pub label: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

/// Indicator table row
#[derive(Debug, Tabled)]
pub struct IndicatorRow {
    #[tabled(rename = "Indicator")]
    pub indicator: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

//! Response payload of one analysis.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::overlay::LatLng;

/// Flat metric name to scalar mapping, in the order the backend sent it
pub type MetricsSummary = Map<String, Value>;

/// Payload returned by the backend for one successful analysis
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub map: Option<MapInfo>,

    #[serde(default)]
    pub h3: Option<HexInfo>,

    #[serde(default)]
    pub metrics: Option<MetricsSummary>,

    /// Tabular breakdown; rendered only when it is a JSON array
    #[serde(default, rename = "metricsTable")]
    pub metrics_table: Option<Value>,

    #[serde(default)]
    pub downloads: Option<Downloads>,
}

/// Edge geometry plus the view and classification used to draw it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MapInfo {
    #[serde(default)]
    pub center: Option<LatLng>,

    #[serde(default)]
    pub zoom: Option<f64>,

    /// GeoJSON FeatureCollection (or Feature/Geometry) of street edges
    #[serde(default)]
    pub geojson: Option<Value>,

    #[serde(default)]
    pub legend: Option<Vec<LegendItem>>,

    #[serde(default, rename = "colorBy")]
    pub color_by: Option<String>,
}

/// One classification bucket of the legend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LegendItem {
    /// Swatch color; `null` or missing leaves the swatch empty
    #[serde(default)]
    pub color: Option<String>,

    #[serde(default)]
    pub label: Option<String>,
}

/// Hexagonal aggregation cells
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HexInfo {
    #[serde(default)]
    pub geojson: Option<Value>,
}

/// Serialized export payloads accompanying a result
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Downloads {
    #[serde(default, rename = "edgesGeoJSON")]
    pub edges_geojson: Option<String>,

    #[serde(default, rename = "metricsCSV")]
    pub metrics_csv: Option<String>,

    #[serde(default, rename = "h3GeoJSON")]
    pub h3_geojson: Option<String>,
}

impl Downloads {
    /// Payload for an artifact kind; empty payloads count as absent
    pub fn payload(&self, kind: ArtifactKind) -> Option<&str> {
        let payload = match kind {
            ArtifactKind::EdgesGeoJson => self.edges_geojson.as_deref(),
            ArtifactKind::MetricsCsv => self.metrics_csv.as_deref(),
            ArtifactKind::HexGeoJson => self.h3_geojson.as_deref(),
        };
        payload.filter(|p| !p.is_empty())
    }

    /// True when at least one artifact carries a payload
    pub fn has_any(&self) -> bool {
        ArtifactKind::ALL.iter().any(|kind| self.payload(*kind).is_some())
    }
}

/// Known downloadable artifact kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArtifactKind {
    EdgesGeoJson,
    MetricsCsv,
    HexGeoJson,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 3] =
        [ArtifactKind::EdgesGeoJson, ArtifactKind::MetricsCsv, ArtifactKind::HexGeoJson];

    /// MIME type embedded in the download handle
    pub fn mime_type(&self) -> &'static str {
        match self {
            ArtifactKind::EdgesGeoJson | ArtifactKind::HexGeoJson => "application/geo+json",
            ArtifactKind::MetricsCsv => "text/csv",
        }
    }

    /// File name used when the artifact is saved
    pub fn file_name(&self) -> &'static str {
        match self {
            ArtifactKind::EdgesGeoJson => "reseau.geojson",
            ArtifactKind::MetricsCsv => "indicateurs.csv",
            ArtifactKind::HexGeoJson => "h3.geojson",
        }
    }
}

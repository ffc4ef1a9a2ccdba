//! Visual elements handed to a map surface.
//!
//! These types describe what should be drawn, independent of the map
//! technology that finally draws it.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Geographic coordinate in WGS 84
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Tiled raster basemap drawn beneath every overlay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseMap {
    pub url_template: String,
    pub attribution: String,
    pub max_zoom: u8,
}

impl BaseMap {
    /// Standard OpenStreetMap tiles
    pub fn openstreetmap() -> Self {
        Self {
            url_template: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "&copy; OpenStreetMap contributors".to_string(),
            max_zoom: 19,
        }
    }
}

/// Stroke and fill options for a vector feature
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_opacity: Option<f64>,
}

impl PathStyle {
    /// Stroke-only style
    pub fn stroke(color: impl Into<String>, weight: f64, opacity: f64) -> Self {
        Self {
            color: Some(color.into()),
            weight: Some(weight),
            opacity: Some(opacity),
            ..Default::default()
        }
    }

    /// Set the fill opacity
    pub fn with_fill_opacity(mut self, fill_opacity: f64) -> Self {
        self.fill_opacity = Some(fill_opacity);
        self
    }
}

/// One labelled line of a popup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopupEntry {
    pub label: String,
    pub value: String,
}

/// Display fragment bound to a feature
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Popup {
    pub entries: Vec<PopupEntry>,
}

impl Popup {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render as `<strong>label:</strong> value` lines joined by `<br/>`
    pub fn to_html(&self) -> String {
        self.entries
            .iter()
            .map(|e| format!("<strong>{}:</strong> {}", escape_html(&e.label), escape_html(&e.value)))
            .collect::<Vec<_>>()
            .join("<br/>")
    }
}

/// A GeoJSON feature together with how it is drawn
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyledFeature {
    pub feature: geojson::Feature,
    pub style: PathStyle,
    pub popup: Option<Popup>,
}

/// Which overlay a layer belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerKind {
    Edges,
    Hex,
}

/// A vector overlay ready to be added to a map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layer {
    pub kind: LayerKind,
    pub features: Vec<StyledFeature>,
}

impl Layer {
    pub fn new(kind: LayerKind, features: Vec<StyledFeature>) -> Self {
        Self { kind, features }
    }

    pub fn feature_count(&self) -> usize {
        self.features.len()
    }

    /// Number of features with a popup bound
    pub fn popup_count(&self) -> usize {
        self.features.iter().filter(|f| f.popup.is_some()).count()
    }
}

/// Map corner a control is anchored to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Color swatch and its label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub color: String,
    pub label: String,
}

/// Floating legend control
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendControl {
    pub position: ControlPosition,
    pub title: String,
    pub entries: Vec<LegendEntry>,
}

impl LegendControl {
    pub fn to_html(&self) -> String {
        let items: String = self
            .entries
            .iter()
            .map(|e| {
                format!(
                    "<li><span style=\"background:{}\"></span>{}</li>",
                    escape_html(&e.color),
                    escape_html(&e.label)
                )
            })
            .collect();
        format!(
            "<div class=\"map-legend\"><h3>{}</h3><ul>{}</ul></div>",
            escape_html(&self.title),
            items
        )
    }
}

/// Identifies a layer added to a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayerHandle(pub Uuid);

impl LayerHandle {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for LayerHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Identifies a control added to a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ControlHandle(pub Uuid);

impl ControlHandle {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ControlHandle {
    fn default() -> Self {
        Self::new()
    }
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

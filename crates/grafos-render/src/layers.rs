//! Edge and hex overlay composition.

use geojson::{Feature, GeoJson, JsonObject};
use grafos_core::models::{HexInfo, Layer, LayerKind, MapInfo, PathStyle, StyledFeature};
use grafos_core::ports::MapSurface;
use serde_json::Value;

use crate::format::Formatter;
use crate::popup::{edge_popup, hex_popup, non_empty};
use crate::state::RenderState;

/// Zoom used when a result has a center but no usable zoom
pub const DEFAULT_ZOOM: f64 = 13.0;

/// Feature property carrying a per-edge style computed by the backend
pub const STYLE_HINT_KEY: &str = "__style";

/// Stroke used for edges without a style hint
pub fn default_edge_style() -> PathStyle {
    PathStyle::stroke("#1976d2", 2.0, 0.85)
}

/// Fill used for every hex cell
pub fn hex_style() -> PathStyle {
    PathStyle {
        color: Some("#f59e0b".to_string()),
        weight: Some(1.0),
        ..Default::default()
    }
    .with_fill_opacity(0.35)
}

/// Flatten a GeoJSON value into features
///
/// Accepts a FeatureCollection, a single Feature or a bare Geometry.
/// Anything unreadable yields no features.
pub fn features_from_value(value: Option<&Value>) -> Vec<Feature> {
    let Some(value) = value.filter(|v| !v.is_null()) else {
        return Vec::new();
    };

    match GeoJson::from_json_value(value.clone()) {
        Ok(GeoJson::FeatureCollection(fc)) => fc.features,
        Ok(GeoJson::Feature(feature)) => vec![feature],
        Ok(GeoJson::Geometry(geometry)) => vec![Feature {
            bbox: None,
            geometry: Some(geometry),
            id: None,
            properties: None,
            foreign_members: None,
        }],
        Err(e) => {
            tracing::warn!(error = %e, "Ignoring unreadable GeoJSON in analysis result");
            Vec::new()
        }
    }
}

/// Style of one edge: its embedded hint when well-formed, the default otherwise
pub fn edge_style(properties: Option<&JsonObject>) -> PathStyle {
    properties
        .and_then(|props| props.get(STYLE_HINT_KEY))
        .filter(|hint| hint.is_object())
        .and_then(|hint| serde_json::from_value::<PathStyle>(hint.clone()).ok())
        .unwrap_or_else(default_edge_style)
}

/// Build the edge layer of a result
pub fn compose_edge_layer(map_info: &MapInfo, formatter: &Formatter) -> Layer {
    let empty = JsonObject::new();
    let features = features_from_value(map_info.geojson.as_ref())
        .into_iter()
        .map(|feature| {
            let properties = feature.properties.as_ref();
            let style = edge_style(properties);
            let popup = non_empty(edge_popup(properties.unwrap_or(&empty), formatter));
            StyledFeature { feature, style, popup }
        })
        .collect();
    Layer::new(LayerKind::Edges, features)
}

/// Build the hex layer, or `None` when the result carries no hex geometry
pub fn compose_hex_layer(hex: &HexInfo, formatter: &Formatter) -> Option<Layer> {
    let geojson = hex.geojson.as_ref().filter(|v| !v.is_null())?;
    let empty = JsonObject::new();
    let features = features_from_value(Some(geojson))
        .into_iter()
        .map(|feature| {
            let popup =
                non_empty(hex_popup(feature.properties.as_ref().unwrap_or(&empty), formatter));
            StyledFeature { feature, style: hex_style(), popup }
        })
        .collect();
    Some(Layer::new(LayerKind::Hex, features))
}

/// Recenter the map and replace both overlays
///
/// Previous layers are removed before new ones are added, so exactly one
/// edge layer and at most one hex layer exist afterwards.
pub fn apply_layers<S: MapSurface + ?Sized>(
    surface: &mut S,
    state: &mut RenderState,
    map_info: &MapInfo,
    hex: Option<&HexInfo>,
    formatter: &Formatter,
) {
    if let Some(center) = map_info.center {
        let zoom = map_info.zoom.filter(|z| z.is_finite() && *z > 0.0).unwrap_or(DEFAULT_ZOOM);
        surface.set_view(center, zoom);
    }

    if let Some(handle) = state.edge_layer.take() {
        surface.remove_layer(handle);
    }
    let edges = compose_edge_layer(map_info, formatter);
    tracing::debug!(features = edges.feature_count(), "Adding edge layer");
    state.edge_layer = Some(surface.add_layer(edges));

    if let Some(handle) = state.hex_layer.take() {
        surface.remove_layer(handle);
    }
    if let Some(cells) = hex.and_then(|h| compose_hex_layer(h, formatter)) {
        tracing::debug!(features = cells.feature_count(), "Adding hex layer");
        state.hex_layer = Some(surface.add_layer(cells));
    }
}

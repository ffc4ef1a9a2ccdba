//! Integration tests for the render pipeline
//!
//! These tests feed whole backend payloads through the renderer and check the
//! resulting map, legend, metrics panel and downloads state.

use grafos_core::models::{AnalysisResult, ArtifactKind, Language, LatLng, LayerKind};
use grafos_render::{MemorySurface, RenderOutcome, Renderer};
use serde_json::json;

fn paris_result() -> AnalysisResult {
    serde_json::from_value(json!({
        "map": {
            "center": {"lat": 48.85, "lng": 2.35},
            "zoom": 13,
            "geojson": {
                "type": "FeatureCollection",
                "features": [{
                    "type": "Feature",
                    "geometry": {"type": "LineString", "coordinates": [[2.35, 48.85], [2.351, 48.851]]},
                    "properties": {"name": "Rue de Rivoli", "betweenness": 0.42}
                }]
            },
            "legend": []
        },
        "metrics": {"betweenness_avg": 0.42}
    }))
    .unwrap()
}

fn full_result() -> AnalysisResult {
    serde_json::from_value(json!({
        "map": {
            "center": {"lat": 43.73, "lng": 7.42},
            "zoom": 15,
            "geojson": {"type": "FeatureCollection", "features": []},
            "legend": [
                {"color": "#edf8fb", "label": "Muy baja"},
                {"color": "#810f7c"}
            ],
            "colorBy": "betweenness"
        },
        "h3": {"geojson": {
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "geometry": {"type": "Polygon", "coordinates": [[[7.41, 43.72], [7.43, 43.72], [7.43, 43.74], [7.41, 43.72]]]},
                "properties": {"h3": "871fb4670ffffff", "length_km": 3.21}
            }]
        }},
        "metrics": {"nodes": 1523, "edges": 2290, "total_km": 41.237},
        "metricsTable": [{"indicateur": "nodes", "valeur": 1523}],
        "downloads": {"edgesGeoJSON": "{}", "metricsCSV": "indicateur,valeur", "h3GeoJSON": "{}"}
    }))
    .unwrap()
}

#[test]
fn test_paris_result_renders_every_component() {
    let mut renderer = Renderer::new(MemorySurface::new(), Language::En);

    assert_eq!(renderer.render(&paris_result()), RenderOutcome::Rendered);

    let surface = renderer.surface();
    assert_eq!(surface.view(), Some((LatLng::new(48.85, 2.35), 13.0)));
    assert_eq!(surface.layer_count(LayerKind::Edges), 1);
    assert_eq!(surface.layer_count(LayerKind::Hex), 0);
    assert_eq!(surface.control_count(), 0);

    let panel = renderer.metrics_panel();
    assert!(!panel.hidden);
    assert_eq!(panel.summary[0].label, "betweenness_avg");
    assert_eq!(panel.summary[0].value, "0.42");

    assert!(renderer.downloads().hidden);
}

#[test]
fn test_rendering_twice_never_duplicates() {
    let mut renderer = Renderer::new(MemorySurface::new(), Language::Es);
    let result = full_result();

    renderer.render(&result);
    renderer.render(&result);

    let surface = renderer.surface();
    assert_eq!(surface.layer_count(LayerKind::Edges), 1);
    assert_eq!(surface.layer_count(LayerKind::Hex), 1);
    assert_eq!(surface.control_count(), 1);

    let legend = surface.controls().next().unwrap();
    assert_eq!(legend.title, "betweenness");
    assert_eq!(legend.entries[1].label, "Clase 2");
}

#[test]
fn test_next_result_replaces_previous_components() {
    let mut renderer = Renderer::new(MemorySurface::new(), Language::Es);

    renderer.render(&full_result());
    assert!(!renderer.downloads().link(ArtifactKind::HexGeoJson).hidden);

    renderer.render(&paris_result());

    let surface = renderer.surface();
    assert_eq!(surface.layer_count(LayerKind::Hex), 0);
    assert_eq!(surface.control_count(), 0);
    assert!(!renderer.state().has_legend());
    assert!(renderer.metrics_panel().rows.is_empty());
    assert!(renderer.downloads().hidden);
}

#[test]
fn test_skipped_result_preserves_previous_render() {
    let mut renderer = Renderer::new(MemorySurface::new(), Language::Es);
    renderer.render(&full_result());

    let outcome = renderer.render(&AnalysisResult::default());

    assert_eq!(outcome, RenderOutcome::Skipped);
    assert_eq!(renderer.surface().layer_count(LayerKind::Edges), 1);
    assert_eq!(renderer.surface().layer_count(LayerKind::Hex), 1);
    assert_eq!(renderer.surface().control_count(), 1);
    assert_eq!(renderer.metrics_panel().summary.len(), 3);
}

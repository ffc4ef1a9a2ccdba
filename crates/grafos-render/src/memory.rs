//! In-memory map surface for headless rendering and testing.
//!
//! Records everything it is asked to draw so callers can inspect the
//! resulting map state without a real map widget.

use grafos_core::models::{
    BaseMap, ControlHandle, LatLng, Layer, LayerHandle, LayerKind, LegendControl,
};
use grafos_core::ports::MapSurface;

/// In-memory implementation of MapSurface
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    base: Option<BaseMap>,
    view: Option<(LatLng, f64)>,
    layers: Vec<(LayerHandle, Layer)>,
    controls: Vec<(ControlHandle, LegendControl)>,
}

impl MemorySurface {
    /// Create an empty surface
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base_map(&self) -> Option<&BaseMap> {
        self.base.as_ref()
    }

    /// Current center and zoom
    pub fn view(&self) -> Option<(LatLng, f64)> {
        self.view
    }

    /// Attached layers in the order they were added
    pub fn layers(&self) -> impl Iterator<Item = &Layer> {
        self.layers.iter().map(|(_, layer)| layer)
    }

    pub fn layer(&self, handle: LayerHandle) -> Option<&Layer> {
        self.layers.iter().find(|(h, _)| *h == handle).map(|(_, layer)| layer)
    }

    /// Number of attached layers of a kind
    pub fn layer_count(&self, kind: LayerKind) -> usize {
        self.layers().filter(|layer| layer.kind == kind).count()
    }

    /// Attached controls in the order they were added
    pub fn controls(&self) -> impl Iterator<Item = &LegendControl> {
        self.controls.iter().map(|(_, control)| control)
    }

    pub fn control_count(&self) -> usize {
        self.controls.len()
    }
}

impl MapSurface for MemorySurface {
    fn set_base_layer(&mut self, base: BaseMap) {
        self.base = Some(base);
    }

    fn set_view(&mut self, center: LatLng, zoom: f64) {
        self.view = Some((center, zoom));
    }

    fn add_layer(&mut self, layer: Layer) -> LayerHandle {
        let handle = LayerHandle::new();
        self.layers.push((handle, layer));
        handle
    }

    fn remove_layer(&mut self, handle: LayerHandle) {
        self.layers.retain(|(h, _)| *h != handle);
    }

    fn add_control(&mut self, control: LegendControl) -> ControlHandle {
        let handle = ControlHandle::new();
        self.controls.push((handle, control));
        handle
    }

    fn remove_control(&mut self, handle: ControlHandle) {
        self.controls.retain(|(h, _)| *h != handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grafos_core::models::ControlPosition;

    #[test]
    fn test_add_and_remove_layers() {
        let mut surface = MemorySurface::new();
        let edges = surface.add_layer(Layer::new(LayerKind::Edges, Vec::new()));
        let hex = surface.add_layer(Layer::new(LayerKind::Hex, Vec::new()));

        assert_eq!(surface.layer_count(LayerKind::Edges), 1);
        assert!(surface.layer(hex).is_some());

        surface.remove_layer(edges);
        surface.remove_layer(edges);
        assert_eq!(surface.layer_count(LayerKind::Edges), 0);
        assert_eq!(surface.layer_count(LayerKind::Hex), 1);
    }

    #[test]
    fn test_controls() {
        let mut surface = MemorySurface::new();
        let handle = surface.add_control(LegendControl {
            position: ControlPosition::BottomLeft,
            title: "Leyenda".to_string(),
            entries: Vec::new(),
        });
        assert_eq!(surface.control_count(), 1);

        surface.remove_control(handle);
        assert_eq!(surface.control_count(), 0);
    }
}

//! Handles of the overlays drawn by the last render.

use grafos_core::models::{ControlHandle, LayerHandle};

/// Overlays currently attached to the map
///
/// At most one of each exists at a time. Renders replace them whole; nothing
/// here is ever patched in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderState {
    pub edge_layer: Option<LayerHandle>,
    pub hex_layer: Option<LayerHandle>,
    pub legend: Option<ControlHandle>,
}

impl RenderState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_hex(&self) -> bool {
        self.hex_layer.is_some()
    }

    pub fn has_legend(&self) -> bool {
        self.legend.is_some()
    }
}

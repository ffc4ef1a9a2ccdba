use crate::models::{BaseMap, ControlHandle, LatLng, Layer, LayerHandle, LegendControl};

/// Port for the interactive map that overlays are drawn on
///
/// Implementations only draw; deciding what to add or remove is the
/// renderer's job, so a surface never needs to inspect its own contents.
pub trait MapSurface {
    /// Install the tiled basemap
    fn set_base_layer(&mut self, base: BaseMap);

    /// Recenter and rezoom the view
    fn set_view(&mut self, center: LatLng, zoom: f64);

    /// Add a vector overlay and return its handle
    fn add_layer(&mut self, layer: Layer) -> LayerHandle;

    /// Remove a previously added overlay; unknown handles are ignored
    fn remove_layer(&mut self, handle: LayerHandle);

    /// Attach a floating control and return its handle
    fn add_control(&mut self, control: LegendControl) -> ControlHandle;

    /// Detach a previously attached control; unknown handles are ignored
    fn remove_control(&mut self, handle: ControlHandle);
}

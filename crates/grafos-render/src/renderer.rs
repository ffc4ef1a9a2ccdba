//! Fan-out of one analysis result to every visual component.

use grafos_core::models::{AnalysisResult, BaseMap, Language, LatLng};
use grafos_core::ports::MapSurface;

use crate::downloads::DownloadsSection;
use crate::format::Formatter;
use crate::layers::apply_layers;
use crate::legend::apply_legend;
use crate::metrics::MetricsPanel;
use crate::state::RenderState;

/// View shown before the first result arrives
pub const INITIAL_CENTER: LatLng = LatLng { lat: 48.8566, lng: 2.3522 };
pub const INITIAL_ZOOM: f64 = 12.0;

/// What a render call did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// All components were replaced from the result
    Rendered,
    /// The result had no map component; nothing changed
    Skipped,
}

/// Owns the map surface and everything drawn from results
pub struct Renderer<S: MapSurface> {
    surface: S,
    state: RenderState,
    metrics: MetricsPanel,
    downloads: DownloadsSection,
    formatter: Formatter,
}

impl<S: MapSurface> Renderer<S> {
    /// Install the basemap and the initial view on a surface
    pub fn new(mut surface: S, language: Language) -> Self {
        surface.set_base_layer(BaseMap::openstreetmap());
        surface.set_view(INITIAL_CENTER, INITIAL_ZOOM);
        Self {
            surface,
            state: RenderState::new(),
            metrics: MetricsPanel::new(),
            downloads: DownloadsSection::new(),
            formatter: Formatter::new(language),
        }
    }

    /// Draw a result, replacing the previous one
    ///
    /// Dispatch order is layers, legend, metrics, downloads. A result
    /// without a map component is a no-op.
    pub fn render(&mut self, result: &AnalysisResult) -> RenderOutcome {
        let Some(map_info) = result.map.as_ref() else {
            tracing::debug!("Result has no map component, skipping render");
            return RenderOutcome::Skipped;
        };

        apply_layers(
            &mut self.surface,
            &mut self.state,
            map_info,
            result.h3.as_ref(),
            &self.formatter,
        );
        apply_legend(&mut self.surface, &mut self.state, Some(map_info), self.formatter.language());
        self.metrics.update(result.metrics.as_ref(), result.metrics_table.as_ref(), &self.formatter);
        self.downloads.update(result.downloads.as_ref());

        RenderOutcome::Rendered
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn state(&self) -> &RenderState {
        &self.state
    }

    pub fn metrics_panel(&self) -> &MetricsPanel {
        &self.metrics
    }

    pub fn downloads(&self) -> &DownloadsSection {
        &self.downloads
    }

    pub fn language(&self) -> Language {
        self.formatter.language()
    }
}

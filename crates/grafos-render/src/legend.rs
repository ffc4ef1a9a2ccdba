//! Legend control rendering.

use grafos_core::models::{ControlPosition, Language, LegendControl, LegendEntry, MapInfo};
use grafos_core::ports::MapSurface;

use crate::state::RenderState;

/// Corner the legend is anchored to
pub const LEGEND_POSITION: ControlPosition = ControlPosition::BottomLeft;

/// Build the legend for a result, or `None` when it has no classification
pub fn build_legend(map_info: Option<&MapInfo>, language: Language) -> Option<LegendControl> {
    let map_info = map_info?;
    let items = map_info.legend.as_ref().filter(|items| !items.is_empty())?;

    let title = map_info
        .color_by
        .clone()
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| fallback_title(language).to_string());

    let entries = items
        .iter()
        .enumerate()
        .map(|(idx, item)| LegendEntry {
            color: item.color.clone().unwrap_or_default(),
            label: item
                .label
                .clone()
                .filter(|l| !l.is_empty())
                .unwrap_or_else(|| ordinal_label(language, idx + 1)),
        })
        .collect();

    Some(LegendControl { position: LEGEND_POSITION, title, entries })
}

/// Replace the legend control on the surface
///
/// The previous control is always detached first, so at most one legend is
/// attached after any number of calls.
pub fn apply_legend<S: MapSurface + ?Sized>(
    surface: &mut S,
    state: &mut RenderState,
    map_info: Option<&MapInfo>,
    language: Language,
) {
    if let Some(handle) = state.legend.take() {
        surface.remove_control(handle);
    }

    if let Some(control) = build_legend(map_info, language) {
        tracing::debug!(title = %control.title, entries = control.entries.len(), "Attaching legend");
        state.legend = Some(surface.add_control(control));
    }
}

fn fallback_title(language: Language) -> &'static str {
    match language {
        Language::Es => "Leyenda",
        Language::En => "Legend",
    }
}

fn ordinal_label(language: Language, n: usize) -> String {
    match language {
        Language::Es => format!("Clase {}", n),
        Language::En => format!("Class {}", n),
    }
}

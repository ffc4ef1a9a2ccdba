//! Analyze command implementation

use crate::cli::AnalyzeArgs;
use crate::output::OutputWriter;
use crate::output_types::{
    AnalyzeOutput, DownloadInfo, IndicatorRow, LayerSummary, MetricsOutput, SummaryRow, ViewInfo,
};
use super::AlreadyReported;
use anyhow::{bail, Context, Result};
use grafos_client::{AnalysisController, HttpBackend, LifecycleState};
use grafos_core::config::LayeredConfig;
use grafos_core::models::{AnalysisForm, ArtifactKind, Downloads};
use grafos_core::ports::AnalysisBackend;
use grafos_render::MemorySurface;
use std::fs;
use std::path::{Path, PathBuf};

pub async fn execute(args: AnalyzeArgs, config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let form = build_form(&args, config)?;
    let backend = HttpBackend::new(config.backend_url.value.as_str());
    let mut controller = AnalysisController::new(backend, MemorySurface::new(), config.language.value);

    let request = controller.begin(&form)?;
    output.info(&controller.status().message);

    let outcome = controller.backend().analyze(&request).await;
    let downloads = outcome.as_ref().ok().and_then(|result| result.downloads.clone());
    let status = controller.complete(outcome).clone();

    let written = match (&args.out_dir, savable(&controller, downloads.as_ref())) {
        (Some(dir), Some(downloads)) => write_artifacts(dir, downloads)?,
        _ => Vec::new(),
    };

    report(&controller, &written, output)?;

    if status.state == LifecycleState::Error {
        return Err(AlreadyReported.into());
    }
    Ok(())
}

/// Downloads worth saving: only those the last render actually shows
fn savable<'a, B: AnalysisBackend>(
    controller: &AnalysisController<B, MemorySurface>,
    downloads: Option<&'a Downloads>,
) -> Option<&'a Downloads> {
    let shown = controller.status().state == LifecycleState::Success
        && !controller.renderer().downloads().hidden;
    downloads.filter(|_| shown)
}

/// Configured defaults with the command-line flags applied on top
fn build_form(args: &AnalyzeArgs, config: &LayeredConfig) -> Result<AnalysisForm> {
    let mut form = config.default_form();

    if let Some(city) = &args.city {
        form.city = city.clone();
    }
    if let Some(mode) = &args.mode {
        form.mode = mode.clone();
    }
    if let Some(radius_km) = args.radius_km {
        if !(radius_km.is_finite() && radius_km > 0.0) {
            bail!("--radius-km must be a positive number, got {}", radius_km);
        }
        form.radius_km = radius_km;
    }

    form.do_centrality = !args.no_centrality;
    form.do_closeness = args.closeness;
    form.do_degree = args.degree;
    form.do_straightness = args.straightness;
    form.do_eigenvector = args.eigenvector;
    form.do_h3 = !args.no_h3;
    form.h3_res = args.h3_res;
    form.color_by = args.color_by.clone();
    form.allow_synthetic = args.allow_synthetic;

    Ok(form)
}

/// Save every present artifact under its conventional file name
pub fn write_artifacts(dir: &Path, downloads: &Downloads) -> Result<Vec<(ArtifactKind, PathBuf)>> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    let mut written = Vec::new();
    for kind in ArtifactKind::ALL {
        if let Some(payload) = downloads.payload(kind) {
            let path = dir.join(kind.file_name());
            fs::write(&path, payload)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::debug!(path = %path.display(), "Wrote artifact");
            written.push((kind, path));
        }
    }
    Ok(written)
}

/// Print what the last cycle left on the headless map
pub fn report<B: AnalysisBackend>(
    controller: &AnalysisController<B, MemorySurface>,
    written: &[(ArtifactKind, PathBuf)],
    output: &OutputWriter,
) -> Result<()> {
    let status = controller.status();
    let renderer = controller.renderer();
    let surface = renderer.surface();

    let layers: Vec<LayerSummary> = surface
        .layers()
        .map(|layer| LayerSummary {
            kind: layer.kind,
            features: layer.feature_count(),
            popups: layer.popup_count(),
        })
        .collect();

    let panel = renderer.metrics_panel();
    let metrics = (!panel.hidden).then(|| MetricsOutput {
        summary: panel.summary.clone(),
        table: panel.rows.clone(),
    });

    let downloads: Vec<DownloadInfo> = renderer
        .downloads()
        .visible_links()
        .map(|link| DownloadInfo {
            kind: link.kind,
            file_name: link.file_name().to_string(),
            href_len: link.href.as_ref().map_or(0, String::len),
            written_to: written
                .iter()
                .find(|(kind, _)| *kind == link.kind)
                .map(|(_, path)| path.display().to_string()),
        })
        .collect();

    let report = AnalyzeOutput {
        status: status.clone(),
        view: surface.view().map(|(center, zoom)| ViewInfo { center, zoom }),
        layers,
        legend: surface.controls().next().cloned(),
        metrics,
        downloads,
    };

    if output.is_json() {
        return output.result(report);
    }

    match status.state {
        LifecycleState::Error => output.error(&status.message),
        _ => output.success(&status.message),
    }

    if let Some(view) = &report.view {
        output.section("Map");
        output.kv("Center", format!("{:.5}, {:.5}", view.center.lat, view.center.lng));
        output.kv("Zoom", view.zoom);
    }
    for layer in &report.layers {
        output.kv(
            format!("{:?} layer", layer.kind),
            format!("{} features, {} with popups", layer.features, layer.popups),
        );
    }

    if let Some(legend) = &report.legend {
        output.section(format!("Legend: {}", legend.title));
        for entry in &legend.entries {
            output.kv(&entry.color, &entry.label);
        }
    }

    if let Some(metrics) = &report.metrics {
        output.section("Metrics");
        output.table(
            metrics
                .summary
                .iter()
                .map(|item| SummaryRow { label: item.label.clone(), value: item.value.clone() })
                .collect(),
        );
        if !metrics.table.is_empty() {
            output.table(
                metrics
                    .table
                    .iter()
                    .map(|row| IndicatorRow {
                        indicator: row.indicator.clone(),
                        value: row.value.clone(),
                    })
                    .collect(),
            );
        }
    }

    if !report.downloads.is_empty() {
        output.section("Downloads");
        for download in &report.downloads {
            let location = download.written_to.as_deref().unwrap_or("not saved (use --out-dir)");
            output.kv(&download.file_name, location);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use grafos_core::models::{AnalysisResult, Language, MapInfo};
    use grafos_core::GrafosError;

    fn args() -> AnalyzeArgs {
        AnalyzeArgs {
            city: None,
            mode: None,
            radius_km: None,
            no_centrality: false,
            closeness: false,
            degree: false,
            straightness: false,
            eigenvector: false,
            no_h3: false,
            h3_res: 7,
            color_by: "length".to_string(),
            allow_synthetic: false,
            out_dir: None,
        }
    }

    #[test]
    fn test_build_form_defaults_match_config() {
        let config = LayeredConfig::with_defaults();
        let form = build_form(&args(), &config).unwrap();
        assert_eq!(form, AnalysisForm::default());
    }

    #[test]
    fn test_build_form_applies_flags() {
        let config = LayeredConfig::with_defaults();
        let args = AnalyzeArgs {
            city: Some("Lyon, France".to_string()),
            radius_km: Some(2.5),
            no_centrality: true,
            degree: true,
            no_h3: true,
            ..args()
        };

        let form = build_form(&args, &config).unwrap();
        assert_eq!(form.city, "Lyon, France");
        assert_eq!(form.radius_km, 2.5);
        assert!(!form.do_centrality);
        assert!(form.do_degree);
        assert!(!form.do_h3);
    }

    #[test]
    fn test_build_form_rejects_bad_radius() {
        let config = LayeredConfig::with_defaults();
        let args = AnalyzeArgs { radius_km: Some(0.0), ..args() };
        assert!(build_form(&args, &config).is_err());
    }

    fn controller_after(outcome: grafos_core::Result<AnalysisResult>) -> AnalysisController<HttpBackend, MemorySurface> {
        let mut controller =
            AnalysisController::new(HttpBackend::localhost(), MemorySurface::new(), Language::En);
        controller.begin(&AnalysisForm::default()).unwrap();
        controller.complete(outcome);
        controller
    }

    fn csv_only() -> Downloads {
        Downloads { metrics_csv: Some("indicateur,valeur".to_string()), ..Default::default() }
    }

    #[test]
    fn test_skipped_render_saves_nothing() {
        let result = AnalysisResult { downloads: Some(csv_only()), ..Default::default() };
        let controller = controller_after(Ok(result.clone()));

        assert!(savable(&controller, result.downloads.as_ref()).is_none());
    }

    #[test]
    fn test_rendered_downloads_are_saved() {
        let result = AnalysisResult {
            map: Some(MapInfo::default()),
            downloads: Some(csv_only()),
            ..Default::default()
        };
        let controller = controller_after(Ok(result.clone()));

        assert_eq!(savable(&controller, result.downloads.as_ref()), Some(&csv_only()));
    }

    #[test]
    fn test_failed_cycle_saves_nothing() {
        let controller =
            controller_after(Err(GrafosError::Transport { reason: "refused".to_string() }));

        assert!(savable(&controller, Some(&csv_only())).is_none());
    }

    #[test]
    fn test_write_artifacts_skips_missing_payloads() {
        let dir = tempfile::tempdir().unwrap();
        let downloads = Downloads {
            edges_geojson: Some("{\"type\":\"FeatureCollection\"}".to_string()),
            metrics_csv: Some("indicateur,valeur\nnodes,4".to_string()),
            h3_geojson: Some(String::new()),
        };

        let written = write_artifacts(dir.path(), &downloads).unwrap();

        assert_eq!(written.len(), 2);
        assert!(dir.path().join("reseau.geojson").exists());
        assert_eq!(
            fs::read_to_string(dir.path().join("indicateurs.csv")).unwrap(),
            "indicateur,valeur\nnodes,4"
        );
        assert!(!dir.path().join("h3.geojson").exists());
    }
}

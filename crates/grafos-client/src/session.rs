//! Interactive session: the form plus its controller.

use grafos_core::error::Result;
use grafos_core::models::{AnalysisForm, Language};
use grafos_core::ports::{AnalysisBackend, MapSurface};

use crate::lifecycle::{AnalysisController, LifecycleStatus};

/// A running session
///
/// Starting a session immediately submits the initial form once, so the map
/// is populated before the user touches anything.
pub struct Session<B: AnalysisBackend, S: MapSurface> {
    controller: AnalysisController<B, S>,
    form: AnalysisForm,
}

impl<B: AnalysisBackend, S: MapSurface> Session<B, S> {
    /// Build the controller and run the warm-up submission
    pub async fn start(backend: B, surface: S, language: Language, form: AnalysisForm) -> Result<Self> {
        let mut session = Self { controller: AnalysisController::new(backend, surface, language), form };
        tracing::info!(city = %session.form.city, "Starting session with warm-up analysis");
        session.submit().await?;
        Ok(session)
    }

    /// Submit the current form
    pub async fn submit(&mut self) -> Result<&LifecycleStatus> {
        self.controller.submit(&self.form).await
    }

    pub fn form(&self) -> &AnalysisForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut AnalysisForm {
        &mut self.form
    }

    pub fn controller(&self) -> &AnalysisController<B, S> {
        &self.controller
    }

    pub fn status(&self) -> &LifecycleStatus {
        self.controller.status()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use grafos_core::models::{AnalysisRequest, AnalysisResult, LayerKind};
    use grafos_render::MemorySurface;
    use std::sync::Mutex;

    use crate::lifecycle::LifecycleState;

    /// Records every city it is asked about
    #[derive(Default)]
    struct RecordingBackend {
        cities: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl AnalysisBackend for RecordingBackend {
        async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult> {
            self.cities.lock().unwrap().push(request.city().to_string());
            Ok(serde_json::from_value(serde_json::json!({
                "map": {"geojson": {"type": "FeatureCollection", "features": []}}
            }))
            .unwrap())
        }

        async fn health(&self) -> Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_start_runs_warm_up_submission() {
        let session = Session::start(
            RecordingBackend::default(),
            MemorySurface::new(),
            Language::Es,
            AnalysisForm::default(),
        )
        .await
        .unwrap();

        assert_eq!(session.status().state, LifecycleState::Success);
        assert_eq!(*session.controller().backend().cities.lock().unwrap(), vec!["Paris, France"]);
        assert_eq!(session.controller().renderer().surface().layer_count(LayerKind::Edges), 1);
    }

    #[tokio::test]
    async fn test_edited_form_is_used_on_next_submit() {
        let mut session = Session::start(
            RecordingBackend::default(),
            MemorySurface::new(),
            Language::En,
            AnalysisForm::default(),
        )
        .await
        .unwrap();

        session.form_mut().city = "Lyon, France".to_string();
        session.submit().await.unwrap();

        let cities = session.controller().backend().cities.lock().unwrap().clone();
        assert_eq!(cities, vec!["Paris, France", "Lyon, France"]);
        assert_eq!(session.controller().renderer().surface().layer_count(LayerKind::Edges), 1);
    }
}

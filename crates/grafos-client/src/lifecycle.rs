//! Request lifecycle state machine.
//!
//! ```text
//! Idle/Success/Error --begin--> Pending --complete(Ok)--> Success
//!                                       --complete(Err)-> Error
//! ```
//!
//! `begin` refuses to leave `Pending`, so overlapping cycles are rejected
//! explicitly instead of racing.

use chrono::{DateTime, Utc};
use grafos_core::error::{GrafosError, Result};
use grafos_core::models::{AnalysisForm, AnalysisRequest, AnalysisResult, Language};
use grafos_core::ports::{AnalysisBackend, MapSurface};
use grafos_render::{RenderOutcome, Renderer};
use serde::Serialize;

/// Phase of the current request cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LifecycleState {
    Idle,
    Pending,
    Success,
    Error,
}

/// State plus the status line shown to the user
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LifecycleStatus {
    pub state: LifecycleState,
    pub message: String,
    pub changed_at: DateTime<Utc>,
}

impl LifecycleStatus {
    fn new(state: LifecycleState, message: impl Into<String>) -> Self {
        Self { state, message: message.into(), changed_at: Utc::now() }
    }

    /// The submit control is usable whenever no request is in flight
    pub fn submit_enabled(&self) -> bool {
        self.state != LifecycleState::Pending
    }
}

/// Owns the lifecycle state and dispatches results to the renderer
pub struct AnalysisController<B: AnalysisBackend, S: MapSurface> {
    backend: B,
    renderer: Renderer<S>,
    status: LifecycleStatus,
}

impl<B: AnalysisBackend, S: MapSurface> AnalysisController<B, S> {
    pub fn new(backend: B, surface: S, language: Language) -> Self {
        Self {
            backend,
            renderer: Renderer::new(surface, language),
            status: LifecycleStatus::new(LifecycleState::Idle, ""),
        }
    }

    /// Enter `Pending` and snapshot the form into a request
    ///
    /// # Errors
    /// `GrafosError::AlreadyPending` when a cycle is already in flight.
    pub fn begin(&mut self, form: &AnalysisForm) -> Result<AnalysisRequest> {
        if self.status.state == LifecycleState::Pending {
            return Err(GrafosError::AlreadyPending);
        }

        let request = AnalysisRequest::from_form(form);
        tracing::debug!(
            city = request.city(),
            mode = request.mode(),
            radius_km = request.radius_km(),
            "Lifecycle -> pending"
        );
        self.status = LifecycleStatus::new(LifecycleState::Pending, in_progress(self.language()));
        Ok(request)
    }

    /// Apply the outcome of the in-flight request
    ///
    /// Success renders the result; errors only change the status line, so
    /// whatever was drawn before stays on the map.
    pub fn complete(&mut self, outcome: Result<AnalysisResult>) -> &LifecycleStatus {
        let language = self.language();
        self.status = match outcome {
            Ok(result) => {
                let rendered = self.renderer.render(&result);
                tracing::info!(rendered = (rendered == RenderOutcome::Rendered), "Analysis completed");
                LifecycleStatus::new(LifecycleState::Success, completed(language))
            }
            Err(err) => {
                tracing::warn!(error = %err, "Analysis failed");
                LifecycleStatus::new(LifecycleState::Error, error_message(&err, language))
            }
        };
        &self.status
    }

    /// Run one full cycle: begin, call the backend, complete
    ///
    /// # Errors
    /// Only `GrafosError::AlreadyPending`; backend failures end up in the status.
    pub async fn submit(&mut self, form: &AnalysisForm) -> Result<&LifecycleStatus> {
        let request = self.begin(form)?;
        let outcome = self.backend.analyze(&request).await;
        Ok(self.complete(outcome))
    }

    pub fn status(&self) -> &LifecycleStatus {
        &self.status
    }

    pub fn renderer(&self) -> &Renderer<S> {
        &self.renderer
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn language(&self) -> Language {
        self.renderer.language()
    }
}

/// Compose the status line for a failed cycle
///
/// The service's own message is used when it sent one. A data-source
/// outage additionally tells the user how to point at another Overpass
/// instance or fall back to synthetic data.
pub fn error_message(err: &GrafosError, language: Language) -> String {
    let mut message = match err {
        GrafosError::Service { message: Some(m), .. } => m.clone(),
        GrafosError::Service { message: None, .. } => generic_failure(language).to_string(),
        other => other.to_string(),
    };
    if err.is_source_unavailable() {
        message.push_str(source_unavailable_hint(language));
    }
    message
}

fn in_progress(language: Language) -> &'static str {
    match language {
        Language::Es => "Calculando… Esta operación puede tardar unos minutos",
        Language::En => "Running analysis… This may take a few minutes",
    }
}

fn completed(language: Language) -> &'static str {
    match language {
        Language::Es => "Análisis completado",
        Language::En => "Analysis complete",
    }
}

fn generic_failure(language: Language) -> &'static str {
    match language {
        Language::Es => "No se pudo completar el análisis",
        Language::En => "The analysis could not be completed",
    }
}

fn source_unavailable_hint(language: Language) -> &'static str {
    match language {
        Language::Es => {
            ". Verifica tu conexión a Overpass (puedes configurar OVERPASS_API_URL o activar la red sintética en Opciones avanzadas)."
        }
        Language::En => {
            ". Check your connection to Overpass (you can set OVERPASS_API_URL or enable the synthetic network under Advanced options)."
        }
    }
}

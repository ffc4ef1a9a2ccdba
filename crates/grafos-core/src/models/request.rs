//! Form state and the request snapshot sent to the backend.

use serde::{Deserialize, Serialize};

/// Current state of the analysis form
///
/// This is the only mutable input of a cycle: users edit it between
/// submissions and every submission snapshots it into an [`AnalysisRequest`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisForm {
    pub city: String,
    pub mode: String,
    pub radius_km: f64,
    pub do_centrality: bool,
    pub do_closeness: bool,
    pub do_degree: bool,
    pub do_straightness: bool,
    pub do_eigenvector: bool,
    pub do_h3: bool,
    pub h3_res: u8,
    pub color_by: String,
    pub allow_synthetic: bool,
}

impl Default for AnalysisForm {
    fn default() -> Self {
        Self {
            city: "Paris, France".to_string(),
            mode: "walk".to_string(),
            radius_km: 1.0,
            do_centrality: true,
            do_closeness: false,
            do_degree: false,
            do_straightness: false,
            do_eigenvector: false,
            do_h3: true,
            h3_res: 7,
            color_by: "length".to_string(),
            allow_synthetic: false,
        }
    }
}

/// Payload sent to the backend for one analysis cycle
///
/// Built from the form at submit time and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisRequest {
    city: String,
    mode: String,
    radius_km: f64,
    do_centrality: bool,
    do_closeness: bool,
    do_degree: bool,
    do_straightness: bool,
    do_eigenvector: bool,
    do_h3: bool,
    h3_res: u8,
    color_by: String,
    allow_synthetic: bool,
}

impl AnalysisRequest {
    /// Snapshot the current form values
    pub fn from_form(form: &AnalysisForm) -> Self {
        Self {
            city: form.city.clone(),
            mode: form.mode.clone(),
            radius_km: form.radius_km,
            do_centrality: form.do_centrality,
            do_closeness: form.do_closeness,
            do_degree: form.do_degree,
            do_straightness: form.do_straightness,
            do_eigenvector: form.do_eigenvector,
            do_h3: form.do_h3,
            h3_res: form.h3_res,
            color_by: form.color_by.clone(),
            allow_synthetic: form.allow_synthetic,
        }
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn mode(&self) -> &str {
        &self.mode
    }

    pub fn radius_km(&self) -> f64 {
        self.radius_km
    }

    pub fn do_h3(&self) -> bool {
        self.do_h3
    }

    pub fn h3_res(&self) -> u8 {
        self.h3_res
    }

    pub fn color_by(&self) -> &str {
        &self.color_by
    }

    pub fn allow_synthetic(&self) -> bool {
        self.allow_synthetic
    }

    /// Names of the optional metrics this request asks the backend to compute
    pub fn requested_metrics(&self) -> Vec<&'static str> {
        [
            (self.do_centrality, "betweenness"),
            (self.do_closeness, "closeness"),
            (self.do_degree, "degree"),
            (self.do_straightness, "straightness"),
            (self.do_eigenvector, "eigenvector"),
        ]
        .into_iter()
        .filter_map(|(enabled, name)| enabled.then_some(name))
        .collect()
    }
}

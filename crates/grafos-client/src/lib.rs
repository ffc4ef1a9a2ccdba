//! Grafos Client - Backend adapter and request lifecycle
//!
//! This crate talks to the analysis service over HTTP and drives the
//! submit → pending → success/error cycle that feeds the renderer.

pub mod detail;
pub mod http;
pub mod lifecycle;
pub mod session;

// Re-export main types
pub use http::HttpBackend;
pub use lifecycle::{AnalysisController, LifecycleState, LifecycleStatus};
pub use session::Session;

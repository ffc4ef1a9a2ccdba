//! Grafos Render - Turns analysis results into map overlays and panels
//!
//! One backend response fans out into the edge and hex layers, the legend
//! control, the metrics panel and the downloads section. Every render fully
//! replaces what the previous one produced.

pub mod downloads;
pub mod format;
pub mod layers;
pub mod legend;
pub mod memory;
pub mod metrics;
pub mod popup;
pub mod renderer;
pub mod state;

// Re-export main types
pub use downloads::{DownloadLink, DownloadsSection};
pub use format::Formatter;
pub use memory::MemorySurface;
pub use metrics::MetricsPanel;
pub use renderer::{RenderOutcome, Renderer};
pub use state::RenderState;

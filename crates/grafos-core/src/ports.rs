//! Port trait definitions
//!
//! These traits define the interfaces that adapters must implement.

pub mod backend;
pub mod surface;

pub use backend::AnalysisBackend;
pub use surface::MapSurface;

//! Grafos Core - Domain models, configuration and ports
//!
//! This crate contains the request/result models exchanged with the analysis
//! backend and the port traits implemented by the map surface and backend adapters.

pub mod config;
pub mod error;
pub mod models;
pub mod ports;

pub use error::{GrafosError, Result};

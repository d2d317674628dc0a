//! Error types for the collaborators around the simulation.
//!
//! The simulation itself never fails; everything here comes from
//! configuration loading or the GPU surface.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Tuning file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Tuning JSON is malformed
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    /// Tuning parsed but holds values the simulation cannot use
    #[error("Invalid tuning: {0}")]
    InvalidTuning(String),

    /// No compatible GPU adapter
    #[error("Adapter error: {0}")]
    Adapter(String),

    /// Device request failed
    #[error("Device error: {0}")]
    Device(String),

    /// Surface acquisition or presentation failed
    #[error("Surface error: {0}")]
    Surface(#[from] wgpu::SurfaceError),
}

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

//! Top-level error types for the build orchestrator.
//!
//! The domain error taxonomy lives in [`crate::orchestrator::error`]; this
//! module wraps it for the binary's entry point.

use thiserror::Error;

/// Result type alias for top-level operations
pub type Result<T> = std::result::Result<T, BuildScriptError>;

/// Main error type for the build orchestrator binary
#[derive(Error, Debug)]
pub enum BuildScriptError {
    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Build orchestration errors
    #[error("{0}")]
    Orchestrator(#[from] crate::orchestrator::Error),
}

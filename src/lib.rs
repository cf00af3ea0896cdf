//! Build orchestration for the Serial Terminal application.
//!
//! This library provides the build step that turns the application's entry
//! point into a shippable binary:
//! - dependency check for the packaging tool, with on-demand installation
//! - conditional icon resource selection
//! - packager invocation with a fixed flag set
//! - outcome reporting with actionable diagnostics
//!
//! It backs the `serial_terminal_build` binary and is also usable as a
//! library dependency (the integration tests drive it directly).

pub mod cli;
pub mod error;
pub mod orchestrator;

// Re-export commonly used types
pub use error::{BuildScriptError, Result};
pub use orchestrator::{
    BuildConfig, BuildOrchestrator, BuildReport, BuildResult, DependencyStatus,
};

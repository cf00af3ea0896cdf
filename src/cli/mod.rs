//! Command line interface for the build orchestrator.
//!
//! This module wires argument parsing, terminal output, and the build
//! orchestrator together, and maps the terminal outcome to a process exit
//! code.

mod args;
mod output;

pub use args::{Args, RuntimeConfig};
pub use output::OutputManager;

use crate::error::Result;
use crate::orchestrator::{self, BuildConfig, BuildOrchestrator};

/// Main CLI entry point.
///
/// Returns the process exit code: 0 on success, the packaging tool's own
/// exit code when the invocation completed but failed, and 1 for failures
/// that stop the build before the packager runs.
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    let runtime = RuntimeConfig::from(&args);

    let config = BuildConfig::builder().build();
    let orchestrator = BuildOrchestrator::new(config);

    match orchestrator.run(&runtime).await {
        Ok(_report) => Ok(0),
        // The packager's exit code is the orchestrator's own terminal status.
        Err(orchestrator::Error::PackagingFailed { code }) => Ok(code),
        Err(e) => Err(e.into()),
    }
}

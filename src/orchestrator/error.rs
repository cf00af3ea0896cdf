//! Error taxonomy for build orchestration.
//!
//! Every failure here is terminal for the run: nothing is retried and no
//! partial artifact is considered valid. A missing icon is deliberately not
//! an error (see [`super::resources`]).

use thiserror::Error;

/// Result type alias for orchestrator operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that terminate a build run
#[derive(Error, Debug)]
pub enum Error {
    /// The installation attempt for the packaging tool failed.
    ///
    /// Raised for a non-zero installer status, and for a tool that remains
    /// unprobeable after a zero-status install.
    #[error(
        "failed to install {tool}: {detail}\n\
         Install it manually (pip install {tool}) and re-run the build."
    )]
    DependencyInstallFailed {
        /// Packaging tool name
        tool: String,
        /// What the installation attempt reported
        detail: String,
    },

    /// The packager child process exited non-zero.
    ///
    /// Reported with the failure checklist, never retried; packaging
    /// failures are typically environment or configuration issues that need
    /// human intervention.
    #[error("packaging failed with exit code {code}")]
    PackagingFailed {
        /// The packager's exit code, propagated as the process exit status
        code: i32,
    },

    /// A child process could not be launched at all
    #[error("failed to launch {command}: {source}")]
    LaunchFailed {
        /// Command that could not be spawned
        command: String,
        /// Underlying spawn error
        #[source]
        source: std::io::Error,
    },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

//! Outcome reporting.
//!
//! The report variant is a deterministic branch on the packager's exit
//! code: success if and only if the code is zero. Reporting never alters
//! the exit code and never retries.

use std::io;
use std::path::PathBuf;

use super::config::BuildConfig;
use super::invoke::BuildResult;
use crate::cli::RuntimeConfig;

/// Likely causes surfaced with every packaging failure.
pub const FAILURE_CHECKLIST: [&str; 3] = [
    "All of the application's dependencies are installed",
    "The packaging tool is correctly configured on PATH",
    "No antivirus software is interfering with the build output",
];

/// Terminal report for one build run
#[derive(Clone, Debug)]
pub enum BuildReport {
    /// The packager exited zero
    Success {
        /// Expected artifact location
        artifact: PathBuf,
        /// Observed artifact size; `None` when the artifact cannot be
        /// stat'ed, which degrades to a warning without flipping the outcome
        size_bytes: Option<u64>,
    },
    /// The packager exited non-zero
    Failure {
        /// The packager's exit code
        code: i32,
    },
}

impl BuildReport {
    /// Derives the report variant from the packager's exit code.
    pub fn from_result(config: &BuildConfig, result: &BuildResult) -> Self {
        if result.success() {
            BuildReport::Success {
                artifact: config.artifact_path(),
                size_bytes: None,
            }
        } else {
            BuildReport::Failure {
                code: result.exit_code(),
            }
        }
    }

    /// Fills in the observed artifact size on the success variant.
    pub async fn with_artifact_size(mut self) -> Self {
        if let BuildReport::Success {
            artifact,
            size_bytes,
        } = &mut self
        {
            *size_bytes = tokio::fs::metadata(artifact.as_path())
                .await
                .ok()
                .map(|m| m.len());
        }
        self
    }

    /// Whether the run is reported as successful.
    pub fn is_success(&self) -> bool {
        matches!(self, BuildReport::Success { .. })
    }

    /// The exit code this report propagates.
    pub fn exit_code(&self) -> i32 {
        match self {
            BuildReport::Success { .. } => 0,
            BuildReport::Failure { code } => *code,
        }
    }
}

/// Render the report through the output manager.
///
/// The failure path echoes the packager's captured output before the
/// checklist, since the actual cause is usually in there.
pub fn print(
    runtime: &RuntimeConfig,
    report: &BuildReport,
    result: &BuildResult,
) -> io::Result<()> {
    match report {
        BuildReport::Success {
            artifact,
            size_bytes,
        } => {
            match size_bytes {
                Some(bytes) => runtime.success(&format!(
                    "Built successfully: {} ({:.2} MB)",
                    artifact.display(),
                    *bytes as f64 / (1024.0 * 1024.0)
                ))?,
                None => {
                    runtime.success("Packager finished: exit code 0")?;
                    runtime.warn(&format!(
                        "Expected output not found: {}",
                        artifact.display()
                    ))?;
                }
            }
            runtime.indent(&format!("Run it with: {}", artifact.display()))
        }
        BuildReport::Failure { code } => {
            runtime.error(&format!("Packaging failed with exit code {}", code))?;

            if !result.stdout().is_empty() {
                runtime.indent("STDOUT:")?;
                for line in result.stdout().lines() {
                    runtime.indent(&format!("  {}", line))?;
                }
            }
            if !result.stderr().is_empty() {
                runtime.indent("STDERR:")?;
                for line in result.stderr().lines() {
                    runtime.indent(&format!("  {}", line))?;
                }
            }

            runtime.indent("Check that:")?;
            for item in FAILURE_CHECKLIST {
                runtime.indent(&format!("  - {}", item))?;
            }
            Ok(())
        }
    }
}

//! Packaging tool detection and on-demand installation.
//!
//! The probe-then-install bootstrap is modeled as an explicit two-state
//! check: probing never errors, it resolves to [`DependencyStatus`], and
//! only a failed installation attempt aborts the build.

use tokio::process::Command;

use super::config::BuildConfig;
use super::error::{Error, Result};
use crate::cli::RuntimeConfig;

/// Whether the packaging tool is usable in the ambient environment
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DependencyStatus {
    /// The tool was located and answered its version query
    Present,
    /// The tool is absent, or present but unable to execute
    Missing,
}

/// Probe the environment for the packaging tool.
///
/// Locates the command on PATH (or verifies an absolute path), then confirms
/// it actually executes by querying its version. A tool that is found but
/// cannot execute counts as [`DependencyStatus::Missing`].
pub async fn probe(config: &BuildConfig) -> DependencyStatus {
    let tool = config.packager_name();

    match which::which(config.packager()) {
        Ok(path) => {
            log::debug!("Found {} at: {}", tool, path.display());

            match Command::new(&path).arg("--version").output().await {
                Ok(output) if output.status.success() => {
                    let version = String::from_utf8_lossy(&output.stdout);
                    log::info!("✓ {} available: {}", tool, version.trim());
                    DependencyStatus::Present
                }
                Ok(output) => {
                    log::warn!(
                        "{} found at {} but --version check failed (exit code: {:?}). \
                         Stderr: {}",
                        tool,
                        path.display(),
                        output.status.code(),
                        String::from_utf8_lossy(&output.stderr)
                    );
                    DependencyStatus::Missing
                }
                Err(e) => {
                    log::warn!(
                        "{} found at {} but failed to execute: {}. \
                         Check file permissions.",
                        tool,
                        path.display(),
                        e
                    );
                    DependencyStatus::Missing
                }
            }
        }
        Err(e) => {
            log::debug!("{} not found in PATH: {}", tool, e);
            DependencyStatus::Missing
        }
    }
}

/// Ensure the packaging tool is installed, installing it when missing.
///
/// Idempotent when the tool is already present: no install attempt is made.
/// When missing, runs the configured installer and re-probes; the returned
/// status is always [`DependencyStatus::Present`], since every other outcome
/// is an error.
///
/// # Errors
///
/// [`Error::DependencyInstallFailed`] when the installer cannot be launched,
/// exits non-zero, or the tool remains unprobeable after a zero-status
/// install. The build aborts; the packager is never invoked.
pub async fn ensure_dependency(
    config: &BuildConfig,
    runtime: &RuntimeConfig,
) -> Result<DependencyStatus> {
    let tool = config.packager_name();

    if probe(config).await == DependencyStatus::Present {
        runtime.success(&format!("{} is installed", tool))?;
        return Ok(DependencyStatus::Present);
    }

    runtime.warn(&format!("{} is not installed", tool))?;
    runtime.progress(&format!(
        "Installing {} via {}...",
        tool,
        config.installer().display()
    ))?;

    let output = Command::new(config.installer())
        .args(config.installer_args())
        .output()
        .await
        .map_err(|e| Error::DependencyInstallFailed {
            tool: tool.clone(),
            detail: format!("could not run {}: {}", config.installer().display(), e),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::DependencyInstallFailed {
            tool,
            detail: format!(
                "installer exited with code {:?}: {}",
                output.status.code(),
                stderr.trim()
            ),
        });
    }

    // Status after the attempt: a zero-status install that still leaves the
    // tool unprobeable is an install failure, not a packaging failure.
    match probe(config).await {
        DependencyStatus::Present => {
            runtime.success(&format!("{} installed", tool))?;
            Ok(DependencyStatus::Present)
        }
        DependencyStatus::Missing => Err(Error::DependencyInstallFailed {
            tool,
            detail: "installer reported success but the tool is still not usable".into(),
        }),
    }
}

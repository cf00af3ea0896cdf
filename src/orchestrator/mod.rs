//! Build orchestration and phase sequencing.
//!
//! This module provides the [`BuildOrchestrator`] that coordinates the
//! build phases to package the application into a single executable.
//!
//! # Overview
//!
//! The orchestrator runs a linear pipeline with no cycles:
//!
//! 1. Clean previous build artifacts
//! 2. Check the packaging tool, installing it on demand
//! 3. Resolve the optional icon resource and invoke the packager
//! 4. Report the outcome
//!
//! A failure while installing the dependency or launching the packager
//! short-circuits directly to the failure report; there is no recovery
//! transition and nothing is retried.
//!
//! # Module Organization
//!
//! - [`config`] - Immutable build configuration and its builder
//! - [`dependency`] - Packaging tool detection and installation
//! - [`resources`] - Conditional icon selection
//! - [`invoke`] - Packager invocation and argument assembly
//! - [`report`] - Terminal outcome reporting
//! - [`error`] - Error taxonomy

pub mod config;
pub mod dependency;
pub mod error;
pub mod invoke;
pub mod report;
pub mod resources;

pub use config::{BuildConfig, BuildConfigBuilder};
pub use dependency::DependencyStatus;
pub use error::{Error, Result};
pub use invoke::BuildResult;
pub use report::BuildReport;
pub use resources::ResolvedResources;

use std::io;
use std::time::Instant;

use crate::cli::RuntimeConfig;

/// Total number of numbered phases shown to the user.
const TOTAL_STEPS: usize = 4;

/// Coordinates one build run from cleaning through reporting.
///
/// # Examples
///
/// ```no_run
/// use serial_terminal_build::cli::RuntimeConfig;
/// use serial_terminal_build::{BuildConfig, BuildOrchestrator};
///
/// # async fn example() -> serial_terminal_build::orchestrator::Result<()> {
/// let orchestrator = BuildOrchestrator::new(BuildConfig::builder().build());
/// let report = orchestrator.run(&RuntimeConfig::new(true, false)).await?;
/// assert!(report.is_success());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct BuildOrchestrator {
    config: BuildConfig,
}

impl BuildOrchestrator {
    /// Creates an orchestrator for the given configuration.
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    /// Returns the build configuration.
    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Executes the complete build process.
    ///
    /// Prints a header, runs the phases in order, and closes with a ruled
    /// summary carrying the outcome and wall-clock duration. The run is
    /// terminal either way; callers map the result to a process exit code.
    ///
    /// # Errors
    ///
    /// - [`Error::DependencyInstallFailed`] - the packaging tool could not
    ///   be installed; the packager was never invoked
    /// - [`Error::PackagingFailed`] - the packager exited non-zero, after
    ///   the failure report was printed
    /// - [`Error::LaunchFailed`] - the packager could not be spawned
    pub async fn run(&self, runtime: &RuntimeConfig) -> Result<BuildReport> {
        let started = Instant::now();

        runtime.section("Serial Terminal Build Process")?;
        runtime.indent(&format!(
            "Started: {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
        ))?;
        runtime.indent(&format!("Product: {}", self.config.product_name()))?;
        runtime.indent(&format!(
            "Entry point: {}",
            self.config.entry_point().display()
        ))?;

        let outcome = self.execute(runtime).await;
        self.print_summary(runtime, &outcome, started)?;
        outcome
    }

    /// Runs the phases in order, stopping at the first terminal failure.
    async fn execute(&self, runtime: &RuntimeConfig) -> Result<BuildReport> {
        runtime.step(1, TOTAL_STEPS, "Cleaning previous build artifacts")?;
        self.clean_artifacts(runtime).await?;

        runtime.step(2, TOTAL_STEPS, "Checking packaging tool")?;
        dependency::ensure_dependency(&self.config, runtime).await?;

        runtime.step(
            3,
            TOTAL_STEPS,
            &format!("Building {}", self.config.product_name()),
        )?;
        let resources = resources::select_resources(&self.config).await;
        match resources.icon() {
            Some(icon) => runtime.indent(&format!("Icon: {}", icon.display()))?,
            None => runtime.warn(&format!(
                "Icon not found at {}; building with the default icon",
                self.config.icon_path().display()
            ))?,
        }
        runtime.progress(&format!("Running {}...", self.config.packager_name()))?;
        let result = invoke::invoke_packager(&self.config, &resources).await?;

        runtime.step(4, TOTAL_STEPS, "Build report")?;
        let report = report::BuildReport::from_result(&self.config, &result)
            .with_artifact_size()
            .await;
        report::print(runtime, &report, &result)?;

        if let BuildReport::Failure { code } = report {
            return Err(Error::PackagingFailed { code });
        }
        Ok(report)
    }

    /// Removes the previous `build/` and `dist/` trees.
    ///
    /// Removal failures are warnings, never fatal; an absent directory is
    /// skipped silently.
    async fn clean_artifacts(&self, runtime: &RuntimeConfig) -> Result<()> {
        for dir in [self.config.build_dir(), self.config.dist_dir()] {
            match tokio::fs::remove_dir_all(dir).await {
                Ok(()) => runtime.indent(&format!("Removed {}", dir.display()))?,
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    runtime.verbose_println(&format!(
                        "{} does not exist (skipping)",
                        dir.display()
                    ))?;
                }
                Err(e) => {
                    runtime.warn(&format!("Could not remove {}: {}", dir.display(), e))?;
                }
            }
        }
        Ok(())
    }

    /// Prints the ruled build summary.
    fn print_summary(
        &self,
        runtime: &RuntimeConfig,
        outcome: &Result<BuildReport>,
        started: Instant,
    ) -> io::Result<()> {
        let duration = started.elapsed();

        runtime.section("Build Summary")?;
        match outcome {
            Ok(_) => {
                runtime.success("Status: SUCCESS")?;
                runtime.indent(&format!("Duration: {:.1} seconds", duration.as_secs_f64()))?;
                runtime.indent(&format!(
                    "Output directory: {}",
                    self.config.dist_dir().display()
                ))?;
            }
            Err(_) => {
                runtime.error("Status: FAILED")?;
                runtime.indent(&format!("Duration: {:.1} seconds", duration.as_secs_f64()))?;
                runtime.indent("Please check the error messages above.")?;
            }
        }
        Ok(())
    }
}

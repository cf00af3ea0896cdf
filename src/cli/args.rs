//! Command line argument parsing.
//!
//! The orchestrator is deliberately a no-argument entry point run from the
//! project root; clap still provides `--help`/`--version` and rejects stray
//! arguments.

use clap::Parser;

/// Build orchestrator for the Serial Terminal application
#[derive(Parser, Debug)]
#[command(
    name = "serial_terminal_build",
    version,
    about = "Packages the Serial Terminal application into a single distributable executable",
    long_about = "Packages the Serial Terminal application into a single distributable executable.

Checks that the packaging tool (pyinstaller) is installed, installing it via
pip when missing, attaches the application icon when present, then invokes the
packager and reports the outcome.

Run from the project root with no arguments:
  serial_terminal_build

Exit code 0 = build succeeded. A non-zero exit propagates the packaging
tool's own exit code."
)]
pub struct Args {}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Output manager for colored terminal output
    output: super::OutputManager,
}

impl From<&Args> for RuntimeConfig {
    fn from(_args: &Args) -> Self {
        Self::new(
            true,  // Always verbose
            false, // Never quiet
        )
    }
}

impl RuntimeConfig {
    /// Create a runtime configuration with explicit output settings.
    ///
    /// Tests pass `quiet = true` to keep phase output out of the harness.
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            output: super::OutputManager::new(verbose, quiet),
        }
    }

    /// Get a reference to the output manager
    pub fn output(&self) -> &super::OutputManager {
        &self.output
    }

    /// Print verbose message if in verbose mode
    pub fn verbose_println(&self, message: &str) -> std::io::Result<()> {
        self.output.verbose(message)
    }

    /// Print warning message if not in quiet mode
    pub fn warn(&self, message: &str) -> std::io::Result<()> {
        self.output.warn(message)
    }

    /// Print success message if not in quiet mode
    pub fn success(&self, message: &str) -> std::io::Result<()> {
        self.output.success(message)
    }

    /// Print failure message if not in quiet mode
    pub fn error(&self, message: &str) -> std::io::Result<()> {
        self.output.error(message)
    }

    /// Print progress message
    pub fn progress(&self, message: &str) -> std::io::Result<()> {
        self.output.progress(message)
    }

    /// Print section header
    pub fn section(&self, title: &str) -> std::io::Result<()> {
        self.output.section(title)
    }

    /// Print numbered phase header
    pub fn step(&self, step: usize, total: usize, message: &str) -> std::io::Result<()> {
        self.output.step(step, total, message)
    }

    /// Print indented text
    pub fn indent(&self, message: &str) -> std::io::Result<()> {
        self.output.indent(message)
    }
}

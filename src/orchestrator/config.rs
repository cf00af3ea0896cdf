//! Build configuration.
//!
//! [`BuildConfig`] is constructed once at the start of a run and never
//! mutated. The builder's defaults are the production policy: the CLI
//! surface exposes no flags, so everything here is fixed relative to the
//! project root. The builder exists for the library surface and the tests,
//! which point the commands at stub tools.

use std::path::{Path, PathBuf};

/// Immutable configuration for one build run.
///
/// # Examples
///
/// ```no_run
/// use serial_terminal_build::BuildConfig;
///
/// let config = BuildConfig::builder().build();
/// assert_eq!(config.product_name(), "Serial Terminal");
/// ```
#[derive(Clone, Debug)]
pub struct BuildConfig {
    /// Application name; also the artifact's base name.
    product_name: String,

    /// Entry-point source file handed to the packager.
    entry_point: PathBuf,

    /// Icon resource path. The file is optional on disk; absence degrades
    /// to the packager's default icon.
    icon_path: PathBuf,

    /// Directory the packager writes the artifact to.
    dist_dir: PathBuf,

    /// The packager's scratch directory, removed during cleaning.
    build_dir: PathBuf,

    /// Produce exactly one output binary.
    single_file: bool,

    /// Hide the console window when the produced executable runs.
    hidden_console: bool,

    /// Request administrator rights when the produced executable runs.
    request_elevation: bool,

    /// Packaging tool command (probed on PATH, or an absolute path).
    packager: PathBuf,

    /// Package manager command used to install the packaging tool.
    installer: PathBuf,

    /// Arguments to the installer command.
    installer_args: Vec<String>,
}

impl BuildConfig {
    /// Creates a builder whose defaults are the production policy.
    pub fn builder() -> BuildConfigBuilder {
        BuildConfigBuilder::default()
    }

    /// Returns the application name.
    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    /// Returns the entry-point path.
    pub fn entry_point(&self) -> &Path {
        &self.entry_point
    }

    /// Returns the icon resource path.
    pub fn icon_path(&self) -> &Path {
        &self.icon_path
    }

    /// Returns the output directory.
    pub fn dist_dir(&self) -> &Path {
        &self.dist_dir
    }

    /// Returns the packager's scratch directory.
    pub fn build_dir(&self) -> &Path {
        &self.build_dir
    }

    /// Whether the build produces a single output binary.
    pub fn single_file(&self) -> bool {
        self.single_file
    }

    /// Whether the produced executable hides its console window.
    pub fn hidden_console(&self) -> bool {
        self.hidden_console
    }

    /// Whether the produced executable requests elevated privileges.
    pub fn request_elevation(&self) -> bool {
        self.request_elevation
    }

    /// Returns the packaging tool command.
    pub fn packager(&self) -> &Path {
        &self.packager
    }

    /// Returns the installer command.
    pub fn installer(&self) -> &Path {
        &self.installer
    }

    /// Returns the installer's arguments.
    pub fn installer_args(&self) -> &[String] {
        &self.installer_args
    }

    /// Returns the packaging tool name for messages.
    pub fn packager_name(&self) -> String {
        self.packager
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.packager.display().to_string())
    }

    /// Returns the expected artifact path, named after the application.
    pub fn artifact_path(&self) -> PathBuf {
        self.dist_dir.join(format!("{}.exe", self.product_name))
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        BuildConfig::builder().build()
    }
}

/// Builder for [`BuildConfig`].
///
/// Every field has a production default; setters exist so tests can aim the
/// orchestrator at stub tools and temp directories.
pub struct BuildConfigBuilder {
    product_name: String,
    entry_point: PathBuf,
    icon_path: PathBuf,
    dist_dir: PathBuf,
    build_dir: PathBuf,
    single_file: bool,
    hidden_console: bool,
    request_elevation: bool,
    packager: PathBuf,
    installer: PathBuf,
    installer_args: Vec<String>,
}

impl Default for BuildConfigBuilder {
    fn default() -> Self {
        Self {
            product_name: "Serial Terminal".into(),
            entry_point: "main.py".into(),
            icon_path: ["assets", "icons", "app.ico"].iter().collect(),
            dist_dir: "dist".into(),
            build_dir: "build".into(),
            single_file: true,
            hidden_console: true,
            request_elevation: true,
            packager: "pyinstaller".into(),
            installer: "pip".into(),
            installer_args: vec!["install".into(), "pyinstaller".into()],
        }
    }
}

impl BuildConfigBuilder {
    /// Sets the application name.
    pub fn product_name(mut self, name: impl Into<String>) -> Self {
        self.product_name = name.into();
        self
    }

    /// Sets the entry-point path.
    pub fn entry_point(mut self, path: impl Into<PathBuf>) -> Self {
        self.entry_point = path.into();
        self
    }

    /// Sets the icon resource path.
    pub fn icon_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.icon_path = path.into();
        self
    }

    /// Sets the output directory.
    pub fn dist_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.dist_dir = path.into();
        self
    }

    /// Sets the packager's scratch directory.
    pub fn build_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.build_dir = path.into();
        self
    }

    /// Sets the packaging tool command.
    pub fn packager(mut self, command: impl Into<PathBuf>) -> Self {
        self.packager = command.into();
        self
    }

    /// Sets the installer command and its arguments.
    pub fn installer(mut self, command: impl Into<PathBuf>, args: Vec<String>) -> Self {
        self.installer = command.into();
        self.installer_args = args;
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> BuildConfig {
        BuildConfig {
            product_name: self.product_name,
            entry_point: self.entry_point,
            icon_path: self.icon_path,
            dist_dir: self.dist_dir,
            build_dir: self.build_dir,
            single_file: self.single_file,
            hidden_console: self.hidden_console,
            request_elevation: self.request_elevation,
            packager: self.packager,
            installer: self.installer,
            installer_args: self.installer_args,
        }
    }
}

//! Packager invocation.
//!
//! Arguments are assembled as a structured list, never by string
//! concatenation; the application name contains a space and must survive
//! quoting intact.

use std::ffi::OsString;

use tokio::process::Command;

use super::config::BuildConfig;
use super::error::{Error, Result};
use super::resources::ResolvedResources;

/// Outcome of one packager invocation
#[derive(Clone, Debug)]
pub struct BuildResult {
    exit_code: i32,
    stdout: String,
    stderr: String,
}

impl BuildResult {
    /// Creates a build result from an exit code and captured output.
    pub fn new(exit_code: i32, stdout: String, stderr: String) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
        }
    }

    /// The packager's exit code.
    pub fn exit_code(&self) -> i32 {
        self.exit_code
    }

    /// Whether the invocation succeeded.
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Captured standard output.
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    /// Captured standard error.
    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}

/// Assemble the packager's argument list.
///
/// Fixed flag set in invocation order: single-file mode, hidden-console
/// mode, elevated-privilege request, application name, optional icon flag,
/// entry-point path.
pub fn packager_args(config: &BuildConfig, resources: &ResolvedResources) -> Vec<OsString> {
    let mut args: Vec<OsString> = Vec::new();

    if config.single_file() {
        args.push("--onefile".into());
    }
    if config.hidden_console() {
        args.push("--noconsole".into());
    }
    if config.request_elevation() {
        args.push("--uac-admin".into());
    }

    args.push("--name".into());
    args.push(config.product_name().into());

    if let Some(icon) = resources.icon() {
        args.push("--icon".into());
        args.push(icon.into());
    }

    args.push(config.entry_point().into());
    args
}

/// Launch the packaging tool and wait for it to terminate.
///
/// Blocks (awaits) until the child exits, capturing stdout and stderr for
/// the reporting phase. A non-zero exit is not an error at this layer: the
/// result carries the code and reporting decides the outcome.
///
/// # Errors
///
/// [`Error::LaunchFailed`] when the child process cannot be spawned at all.
pub async fn invoke_packager(
    config: &BuildConfig,
    resources: &ResolvedResources,
) -> Result<BuildResult> {
    let args = packager_args(config, resources);
    log::debug!(
        "invoking {} with args {:?}",
        config.packager().display(),
        args
    );

    let output = Command::new(config.packager())
        .args(&args)
        .output()
        .await
        .map_err(|e| Error::LaunchFailed {
            command: config.packager_name(),
            source: e,
        })?;

    // A child killed by a signal has no code; treat it as a plain failure.
    let exit_code = output.status.code().unwrap_or(1);

    Ok(BuildResult::new(
        exit_code,
        String::from_utf8_lossy(&output.stdout).into_owned(),
        String::from_utf8_lossy(&output.stderr).into_owned(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orchestrator::{BuildConfig, resources::select_resources};
    use std::path::Path;

    fn args_as_strings(config: &BuildConfig, resources: &ResolvedResources) -> Vec<String> {
        packager_args(config, resources)
            .into_iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    #[tokio::test]
    async fn icon_flag_carries_the_exact_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let icon = dir.path().join("app.ico");
        std::fs::write(&icon, b"ico").expect("write icon");

        let config = BuildConfig::builder().icon_path(&icon).build();
        let resources = select_resources(&config).await;
        let args = args_as_strings(&config, &resources);

        let icon_flag = args.iter().position(|a| a == "--icon").expect("icon flag");
        assert_eq!(args[icon_flag + 1], icon.display().to_string());
    }

    #[tokio::test]
    async fn missing_icon_omits_the_flag() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = BuildConfig::builder()
            .icon_path(dir.path().join("nope.ico"))
            .build();

        let resources = select_resources(&config).await;
        let args = args_as_strings(&config, &resources);

        assert!(!args.contains(&"--icon".to_string()));
    }

    #[test]
    fn fixed_flags_precede_the_entry_point() {
        let config = BuildConfig::default();
        let args = args_as_strings(&config, &ResolvedResources::default());

        assert_eq!(
            args,
            [
                "--onefile",
                "--noconsole",
                "--uac-admin",
                "--name",
                "Serial Terminal",
                "main.py",
            ]
        );
    }

    #[test]
    fn name_with_space_stays_one_argument() {
        let config = BuildConfig::default();
        let args = packager_args(&config, &ResolvedResources::default());

        assert!(args.contains(&OsString::from("Serial Terminal")));
        assert_eq!(config.entry_point(), Path::new("main.py"));
    }
}

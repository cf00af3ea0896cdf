//! Integration tests for the build orchestrator.
//!
//! These drive the real phase pipeline against stub executables in temp
//! directories: a fake packager that records its argument list and writes
//! the artifact, and a fake installer that can succeed, fail, or actually
//! "install" the packager stub.

#![cfg(unix)]

use std::error::Error as StdError;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use serial_terminal_build::cli::RuntimeConfig;
use serial_terminal_build::orchestrator::{
    BuildConfig, BuildOrchestrator, BuildReport, DependencyStatus, Error, dependency,
};

type TestResult = Result<(), Box<dyn StdError>>;

/// Runtime that swallows phase output so the harness stays readable.
fn quiet_runtime() -> RuntimeConfig {
    RuntimeConfig::new(false, true)
}

/// Write an executable `/bin/sh` stub at `path`.
fn write_stub(path: &Path, body: &str) -> std::io::Result<PathBuf> {
    fs::write(path, format!("#!/bin/sh\n{body}"))?;
    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms)?;
    Ok(path.to_path_buf())
}

/// A packager stub that answers `--version`, records its arguments, and
/// writes an empty artifact.
fn packager_stub_body(arg_file: &Path, dist: &Path, artifact: &Path) -> String {
    format!(
        "if [ \"$1\" = \"--version\" ]; then echo 6.0.0; exit 0; fi\n\
         printf '%s\\n' \"$@\" > '{args}'\n\
         mkdir -p '{dist}'\n\
         : > '{artifact}'\n\
         exit 0\n",
        args = arg_file.display(),
        dist = dist.display(),
        artifact = artifact.display(),
    )
}

#[tokio::test]
async fn present_tool_is_not_reinstalled() -> TestResult {
    let dir = tempfile::tempdir()?;
    let packager = write_stub(&dir.path().join("pyinstaller"), "echo 6.0.0\nexit 0\n")?;
    let marker = dir.path().join("install-attempted");
    let installer = write_stub(
        &dir.path().join("pip"),
        &format!(": > '{}'\nexit 0\n", marker.display()),
    )?;

    let config = BuildConfig::builder()
        .packager(&packager)
        .installer(&installer, vec![])
        .build();

    let status = dependency::ensure_dependency(&config, &quiet_runtime()).await?;

    assert_eq!(status, DependencyStatus::Present);
    assert!(!marker.exists(), "installer must not run for a present tool");
    Ok(())
}

#[tokio::test]
async fn failed_install_stops_before_packaging() -> TestResult {
    let dir = tempfile::tempdir()?;
    let invoked = dir.path().join("packager-invoked");
    // Unusable packager: the version query fails, any real invocation
    // would leave the marker behind.
    let packager = write_stub(
        &dir.path().join("pyinstaller"),
        &format!(
            "if [ \"$1\" = \"--version\" ]; then exit 1; fi\n: > '{}'\nexit 0\n",
            invoked.display()
        ),
    )?;
    let installer = write_stub(&dir.path().join("pip"), "exit 1\n")?;

    let config = BuildConfig::builder()
        .packager(&packager)
        .installer(&installer, vec![])
        .entry_point(dir.path().join("main.py"))
        .icon_path(dir.path().join("app.ico"))
        .dist_dir(dir.path().join("dist"))
        .build_dir(dir.path().join("build"))
        .build();

    let err = BuildOrchestrator::new(config)
        .run(&quiet_runtime())
        .await
        .expect_err("install failure must abort the build");

    assert!(matches!(err, Error::DependencyInstallFailed { .. }));
    assert!(!invoked.exists(), "packager must never be invoked");
    Ok(())
}

#[tokio::test]
async fn absent_tool_is_installed_and_build_succeeds() -> TestResult {
    let dir = tempfile::tempdir()?;
    let bin = dir.path().join("bin");
    fs::create_dir(&bin)?;
    let packager_path = bin.join("pyinstaller");
    let dist = dir.path().join("dist");
    let artifact = dist.join("Serial Terminal.exe");
    let arg_file = dir.path().join("packager-args");

    // The installer "installs" the packager stub, the way pip would put
    // the real tool on PATH.
    let installer = write_stub(
        &dir.path().join("pip"),
        &format!(
            "cat > '{p}' <<'EOF'\n#!/bin/sh\n{body}EOF\nchmod +x '{p}'\nexit 0\n",
            p = packager_path.display(),
            body = packager_stub_body(&arg_file, &dist, &artifact),
        ),
    )?;

    let icon = dir.path().join("app.ico");
    fs::write(&icon, b"ico")?;
    let entry = dir.path().join("main.py");
    fs::write(&entry, b"print('serial terminal')\n")?;

    let config = BuildConfig::builder()
        .packager(&packager_path)
        .installer(&installer, vec![])
        .icon_path(&icon)
        .entry_point(&entry)
        .dist_dir(&dist)
        .build_dir(dir.path().join("build"))
        .build();

    let report = BuildOrchestrator::new(config).run(&quiet_runtime()).await?;

    assert!(report.is_success());
    assert_eq!(report.exit_code(), 0);
    assert!(artifact.exists());
    match report {
        BuildReport::Success {
            artifact: reported,
            size_bytes,
        } => {
            assert_eq!(reported, artifact);
            assert!(size_bytes.is_some(), "artifact size must be observed");
        }
        BuildReport::Failure { .. } => panic!("expected a success report"),
    }

    // The icon flag carries the exact path, the name survives as one
    // argument despite its space.
    let recorded: Vec<String> = fs::read_to_string(&arg_file)?
        .lines()
        .map(str::to_owned)
        .collect();
    assert!(recorded.contains(&"Serial Terminal".to_string()));
    let icon_flag = recorded
        .iter()
        .position(|a| a == "--icon")
        .expect("icon flag must be present");
    assert_eq!(recorded[icon_flag + 1], icon.display().to_string());
    Ok(())
}

#[tokio::test]
async fn missing_icon_build_succeeds_without_icon_flag() -> TestResult {
    let dir = tempfile::tempdir()?;
    let dist = dir.path().join("dist");
    let artifact = dist.join("Serial Terminal.exe");
    let arg_file = dir.path().join("packager-args");
    let packager = write_stub(
        &dir.path().join("pyinstaller"),
        &packager_stub_body(&arg_file, &dist, &artifact),
    )?;
    let installer = write_stub(&dir.path().join("pip"), "exit 0\n")?;
    let entry = dir.path().join("main.py");
    fs::write(&entry, b"print('serial terminal')\n")?;

    // Stale output from a previous run; the clean phase removes it.
    fs::create_dir_all(&dist)?;
    let stale = dist.join("stale.bin");
    fs::write(&stale, b"old")?;

    let config = BuildConfig::builder()
        .packager(&packager)
        .installer(&installer, vec![])
        .icon_path(dir.path().join("no-such.ico"))
        .entry_point(&entry)
        .dist_dir(&dist)
        .build_dir(dir.path().join("build"))
        .build();

    let report = BuildOrchestrator::new(config).run(&quiet_runtime()).await?;

    assert!(report.is_success());
    assert!(!stale.exists(), "previous artifacts must be cleaned");
    assert!(artifact.exists());

    let recorded = fs::read_to_string(&arg_file)?;
    assert!(!recorded.lines().any(|a| a == "--icon"));
    assert!(recorded.lines().any(|a| a == "--onefile"));
    assert!(recorded.lines().any(|a| a == "--noconsole"));
    assert!(recorded.lines().any(|a| a == "--uac-admin"));
    Ok(())
}

#[tokio::test]
async fn packager_failure_propagates_the_exit_code() -> TestResult {
    let dir = tempfile::tempdir()?;
    let packager = write_stub(
        &dir.path().join("pyinstaller"),
        "if [ \"$1\" = \"--version\" ]; then echo 6.0.0; exit 0; fi\n\
         echo 'script main.py not found' >&2\n\
         exit 1\n",
    )?;
    let installer = write_stub(&dir.path().join("pip"), "exit 0\n")?;
    let icon = dir.path().join("app.ico");
    fs::write(&icon, b"ico")?;

    let config = BuildConfig::builder()
        .packager(&packager)
        .installer(&installer, vec![])
        .icon_path(&icon)
        .entry_point(dir.path().join("main.py"))
        .dist_dir(dir.path().join("dist"))
        .build_dir(dir.path().join("build"))
        .build();

    let err = BuildOrchestrator::new(config)
        .run(&quiet_runtime())
        .await
        .expect_err("non-zero packager exit must fail the run");

    match err {
        Error::PackagingFailed { code } => assert_eq!(code, 1),
        other => panic!("expected PackagingFailed, got {other:?}"),
    }
    Ok(())
}

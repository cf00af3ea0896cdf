//! Conditional resource selection.
//!
//! The only optional resource is the application icon. A missing icon is
//! never an error: the build degrades to the packager's default icon.

use std::path::{Path, PathBuf};

use super::config::BuildConfig;

/// Resources resolved for one packager invocation
#[derive(Clone, Debug, Default)]
pub struct ResolvedResources {
    icon: Option<PathBuf>,
}

impl ResolvedResources {
    /// Returns the icon path, if the icon file exists on disk.
    pub fn icon(&self) -> Option<&Path> {
        self.icon.as_deref()
    }
}

/// Resolve the optional icon resource.
///
/// The icon is attached only when the configured path is a regular file;
/// "file not found" and "not a regular file" are the same absent case.
pub async fn select_resources(config: &BuildConfig) -> ResolvedResources {
    let icon_path = config.icon_path();

    match tokio::fs::metadata(icon_path).await {
        Ok(metadata) if metadata.is_file() => ResolvedResources {
            icon: Some(icon_path.to_path_buf()),
        },
        _ => {
            log::warn!(
                "icon not found at {}; building with the default icon",
                icon_path.display()
            );
            ResolvedResources::default()
        }
    }
}

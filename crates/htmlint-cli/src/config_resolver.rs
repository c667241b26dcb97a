//! Configuration source resolution.
//!
//! Resolves the configuration file using a deterministic priority order:
//!
//! 1. `--no-config` → defaults, whatever else is present
//! 2. `--config` flag (explicit path)
//! 3. nearest `.htmlvalidate.json` at or above the search directory
//! 4. No config found → defaults

use anyhow::{Context, Result};
use htmlint_core::config::{self, EffectiveConfig};
use std::path::{Path, PathBuf};

/// Where the configuration was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Explicitly specified via `--config` flag.
    Explicit(PathBuf),
    /// Found by searching upward from the linted paths.
    Project(PathBuf),
    /// No config used; defaults apply.
    Default,
}

impl ConfigSource {
    /// Returns the resolved path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) => Some(p),
            Self::Default => None,
        }
    }

    /// Loads and resolves the configuration this source points at.
    ///
    /// # Errors
    ///
    /// Returns an error if the file, or anything it extends, fails to load.
    pub fn load(&self) -> Result<EffectiveConfig> {
        let Some(path) = self.path() else {
            tracing::debug!("No config file, using defaults");
            return Ok(EffectiveConfig::default());
        };
        tracing::debug!("Loading config: {}", path.display());
        config::resolve_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))
    }
}

/// Resolves the configuration source.
///
/// See module-level docs for resolution order.
#[must_use]
pub fn resolve(search_dir: &Path, explicit: Option<&Path>, no_config: bool) -> ConfigSource {
    if no_config {
        return ConfigSource::Default;
    }

    if let Some(p) = explicit {
        return ConfigSource::Explicit(p.to_path_buf());
    }

    match config::find_config(search_dir) {
        Some(found) => {
            tracing::debug!("Found project config: {}", found.display());
            ConfigSource::Project(found)
        }
        None => ConfigSource::Default,
    }
}

/// Directory to start config and ignore-file searches from: the first
/// path itself if it is a directory, otherwise its parent.
#[must_use]
pub fn search_dir(paths: &[PathBuf]) -> PathBuf {
    let Some(first) = paths.first() else {
        return PathBuf::from(".");
    };
    if first.is_dir() {
        return first.clone();
    }
    match first.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

//! Config discovery and `extends` resolution.

use super::dto::RawConfigDto;
use super::{loader, ConfigError, EffectiveConfig, Preset, RawConfig, CONFIG_FILE_NAME};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Searches `start_dir` and its ancestors for a file named `name`.
pub(crate) fn find_upward(start_dir: &Path, name: &str) -> Option<PathBuf> {
    let start = if start_dir.is_absolute() {
        start_dir.to_path_buf()
    } else {
        std::env::current_dir().ok()?.join(start_dir)
    };
    start
        .ancestors()
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.is_file())
}

/// Finds the nearest `.htmlvalidate.json` at or above `start_dir`.
#[must_use]
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    find_upward(start_dir, CONFIG_FILE_NAME)
}

/// Loads a config file without resolving `extends`.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid JSON, or
/// contains an invalid rule setting.
pub fn load_config(path: &Path) -> Result<RawConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content, path)
}

/// Parses config JSON. `path` is only used in error messages.
///
/// # Errors
///
/// Returns an error if the JSON is invalid or a rule setting is invalid.
pub fn parse_config(content: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    let dto: RawConfigDto = serde_json::from_str(content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    loader::load(dto)
}

/// Resolves the `extends` chain of `config`, with relative paths taken
/// from `base_dir`.
///
/// # Errors
///
/// Returns an error if an extended file cannot be loaded or the chain
/// contains a cycle.
pub fn resolve_extends(config: RawConfig, base_dir: &Path) -> Result<EffectiveConfig, ConfigError> {
    let mut resolving = Vec::new();
    let raw = resolve_chain(config, base_dir, &mut resolving)?;
    Ok(EffectiveConfig::from_raw(raw))
}

/// Loads and fully resolves the config file at `path`.
///
/// # Errors
///
/// Returns an error if the file or anything it extends fails to load.
pub fn resolve_file(path: &Path) -> Result<EffectiveConfig, ConfigError> {
    let raw = load_config(path)?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut resolving = vec![canonical(path)];
    let raw = resolve_chain(raw, base_dir, &mut resolving)?;

    let mut config = EffectiveConfig::from_raw(raw);
    config.config_path = Some(path.to_path_buf());
    Ok(config)
}

/// Finds the nearest config at or above `start_dir` and resolves it.
///
/// Returns `Ok(None)` when there is no config file.
///
/// # Errors
///
/// Returns an error if the config file or anything it extends fails to load.
pub fn resolve(start_dir: &Path) -> Result<Option<(EffectiveConfig, PathBuf)>, ConfigError> {
    let Some(path) = find_config(start_dir) else {
        debug!("No {} found above {}", CONFIG_FILE_NAME, start_dir.display());
        return Ok(None);
    };
    debug!("Using config {}", path.display());
    let config = resolve_file(&path)?;
    Ok(Some((config, path)))
}

fn canonical(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

fn resolve_chain(
    config: RawConfig,
    base_dir: &Path,
    resolving: &mut Vec<PathBuf>,
) -> Result<RawConfig, ConfigError> {
    if config.extends.is_empty() {
        return Ok(config);
    }

    let mut merged = RawConfig::default();
    for entry in &config.extends {
        let extended = if let Some(preset) = Preset::from_id(entry) {
            debug!("Extending preset {}", entry);
            preset.config()
        } else {
            load_extended(entry, base_dir, resolving)?
        };
        merged = merge(merged, extended);
    }

    let root = config.root;
    let mut result = merge(merged, config);
    result.root = root;
    result.extends.clear();
    Ok(result)
}

fn load_extended(
    entry: &str,
    base_dir: &Path,
    resolving: &mut Vec<PathBuf>,
) -> Result<RawConfig, ConfigError> {
    let path = if Path::new(entry).is_absolute() {
        PathBuf::from(entry)
    } else {
        base_dir.join(entry)
    };

    let key = canonical(&path);
    if resolving.contains(&key) {
        let mut chain = resolving.clone();
        chain.push(key);
        return Err(ConfigError::ExtendsCycle { chain });
    }

    debug!("Extending config {}", path.display());
    let raw = load_config(&path).map_err(|e| ConfigError::ExtendsResolution {
        entry: entry.to_string(),
        source: Box::new(e),
    })?;

    let dir = path
        .parent()
        .map_or_else(|| base_dir.to_path_buf(), Path::to_path_buf);
    resolving.push(key);
    let resolved = resolve_chain(raw, &dir, resolving);
    resolving.pop();
    resolved
}

/// Overlays `overlay` onto `base`; overlay rules replace base rules by name.
fn merge(mut base: RawConfig, overlay: RawConfig) -> RawConfig {
    base.root |= overlay.root;
    base.extends = overlay.extends;
    base.rules.extend(overlay.rules);
    base.frameworks.merge(overlay.frameworks);
    base
}

//! Configuration for htmlint.
//!
//! Configuration lives in `.htmlvalidate.json`, found by walking upward from
//! the directory being linted. A file may `extends` built-in presets and
//! other files; the chain is folded left to right and the file's own
//! settings are applied last.
//!
//! ```json
//! {
//!   "extends": ["html-validate:recommended", "./shared.json"],
//!   "rules": { "no-inline-style": "off", "button-type": ["error", {}] },
//!   "frameworks": { "htmx": true, "htmx-version": "4" }
//! }
//! ```

mod dto;
mod loader;
mod presets;
mod resolve;

pub use dto::{ExtendsDto, FrameworksDto, RawConfigDto};
pub use loader::{parse_rule_setting, SeverityError};
pub use presets::Preset;
pub(crate) use resolve::find_upward;
pub use resolve::{find_config, load_config, parse_config, resolve, resolve_extends, resolve_file};

use crate::types::Severity;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Name of the configuration file.
pub const CONFIG_FILE_NAME: &str = ".htmlvalidate.json";

/// Configured level of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleLevel {
    /// Rule is disabled.
    Off,
    /// Findings are reported as warnings.
    Warn,
    /// Findings are reported as errors.
    Error,
}

/// A decoded `rules` entry: level plus optional options object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleSetting {
    /// Configured level.
    pub level: RuleLevel,
    /// Rule-specific options.
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub options: serde_json::Map<String, serde_json::Value>,
}

impl RuleSetting {
    /// Creates a setting with no options.
    #[must_use]
    pub fn new(level: RuleLevel) -> Self {
        Self {
            level,
            options: serde_json::Map::new(),
        }
    }
}

/// htmx profile version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HtmxVersion {
    /// htmx 2.x (default).
    #[default]
    V2,
    /// htmx 4.x.
    V4,
}

/// Framework-specific attribute handling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct FrameworkOptions {
    /// Enables htmx attribute validation.
    pub htmx: bool,
    /// Raw version string; "4" selects htmx 4, anything else htmx 2.
    pub htmx_version: String,
    /// Event names `hx-on:*` accepts without a warning.
    pub htmx_custom_events: Vec<String>,
}

impl FrameworkOptions {
    /// The htmx profile selected by `htmx_version`.
    #[must_use]
    pub fn version(&self) -> HtmxVersion {
        if self.htmx_version.trim() == "4" {
            HtmxVersion::V4
        } else {
            HtmxVersion::V2
        }
    }

    /// Overlays `other` onto `self`: `htmx: true` and a non-empty version
    /// win; custom events accumulate without duplicates.
    pub fn merge(&mut self, other: Self) {
        self.htmx |= other.htmx;
        if !other.htmx_version.is_empty() {
            self.htmx_version = other.htmx_version;
        }
        for event in other.htmx_custom_events {
            if !self.htmx_custom_events.contains(&event) {
                self.htmx_custom_events.push(event);
            }
        }
    }
}

/// A configuration file as written, before `extends` is resolved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawConfig {
    /// Marks the root configuration.
    pub root: bool,
    /// Presets or config paths to extend, in order.
    pub extends: Vec<String>,
    /// Per-rule settings.
    pub rules: BTreeMap<String, RuleSetting>,
    /// Framework options.
    pub frameworks: FrameworkOptions,
}

/// The configuration a linter runs with.
#[derive(Debug, Clone, Serialize)]
pub struct EffectiveConfig {
    /// Whether the source config was marked as root.
    pub root: bool,
    /// Resolved per-rule settings.
    pub rules: BTreeMap<String, RuleSetting>,
    /// Framework options.
    pub frameworks: FrameworkOptions,
    /// If non-empty, only these rules run.
    pub enabled_rules: Vec<String>,
    /// Glob patterns of files to skip.
    pub ignore_patterns: Vec<String>,
    /// Findings below this severity are dropped.
    pub min_severity: Severity,
    /// The config file this was loaded from, if any.
    pub config_path: Option<PathBuf>,
}

impl Default for EffectiveConfig {
    fn default() -> Self {
        Self {
            root: false,
            rules: BTreeMap::new(),
            frameworks: FrameworkOptions::default(),
            enabled_rules: Vec::new(),
            ignore_patterns: Vec::new(),
            min_severity: Severity::Info,
            config_path: None,
        }
    }
}

impl EffectiveConfig {
    /// Creates an effective config from a fully resolved raw config.
    #[must_use]
    pub fn from_raw(raw: RawConfig) -> Self {
        Self {
            root: raw.root,
            rules: raw.rules,
            frameworks: raw.frameworks,
            ..Self::default()
        }
    }

    /// Checks if a rule should run. The disabled set wins over the enabled list.
    #[must_use]
    pub fn is_rule_enabled(&self, name: &str) -> bool {
        if self
            .rules
            .get(name)
            .is_some_and(|s| s.level == RuleLevel::Off)
        {
            return false;
        }
        self.enabled_rules.is_empty() || self.enabled_rules.iter().any(|r| r == name)
    }

    /// Gets the severity override for a rule.
    #[must_use]
    pub fn rule_severity(&self, name: &str) -> Option<Severity> {
        match self.rules.get(name)?.level {
            RuleLevel::Error => Some(Severity::Error),
            RuleLevel::Warn => Some(Severity::Warning),
            RuleLevel::Off => None,
        }
    }

    /// Names of rules set to `off`.
    #[must_use]
    pub fn disabled_rules(&self) -> Vec<&str> {
        self.rules
            .iter()
            .filter(|(_, s)| s.level == RuleLevel::Off)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Only report errors.
    pub fn errors_only(&mut self) -> &mut Self {
        self.min_severity = Severity::Error;
        self
    }

    /// Report warnings and errors.
    pub fn warnings_and_errors(&mut self) -> &mut Self {
        self.min_severity = Severity::Warning;
        self
    }

    /// Turns a rule off.
    pub fn disable(&mut self, name: impl Into<String>) -> &mut Self {
        self.rules
            .insert(name.into(), RuleSetting::new(RuleLevel::Off));
        self
    }

    /// Restricts the run to the given rules.
    pub fn enable_only<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enabled_rules = names.into_iter().map(Into::into).collect();
        self
    }

    /// Adds glob patterns of files to skip.
    pub fn add_ignore_patterns<I, S>(&mut self, patterns: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore_patterns
            .extend(patterns.into_iter().map(Into::into));
        self
    }
}

/// Parses a severity name as used on the command line.
///
/// Accepts `error`, `warn`, `warning`, `info` and `0`, `1`, `2`.
///
/// # Errors
///
/// Returns [`ConfigError::UnknownSeverity`] for anything else.
pub fn parse_severity(value: &str) -> Result<Severity, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "error" | "2" => Ok(Severity::Error),
        "warn" | "warning" | "1" => Ok(Severity::Warning),
        "info" | "off" | "0" => Ok(Severity::Info),
        _ => Err(ConfigError::UnknownSeverity {
            value: value.to_string(),
        }),
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("failed to read config file {}: {source}", .path.display())]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Config file is not valid JSON or has the wrong shape.
    #[error("failed to parse {}: {message}", .path.display())]
    Parse {
        /// Path of the file.
        path: PathBuf,
        /// Parse error message.
        message: String,
    },

    /// A rule entry could not be decoded.
    #[error("invalid setting for rule '{rule}' ({value}): {reason}")]
    InvalidSeverity {
        /// Rule name.
        rule: String,
        /// The offending JSON value.
        value: String,
        /// What was wrong with it.
        #[source]
        reason: SeverityError,
    },

    /// An `extends` entry could not be loaded.
    #[error("loading extended config \"{entry}\"")]
    ExtendsResolution {
        /// The entry as written.
        entry: String,
        /// Why loading failed.
        #[source]
        source: Box<ConfigError>,
    },

    /// A config file extends itself, directly or indirectly.
    #[error("extends cycle: {}", format_chain(.chain))]
    ExtendsCycle {
        /// Files in resolution order, ending with the repeated one.
        chain: Vec<PathBuf>,
    },

    /// Unknown severity name.
    #[error("invalid severity: \"{value}\"")]
    UnknownSeverity {
        /// The value as given.
        value: String,
    },
}

fn format_chain(chain: &[PathBuf]) -> String {
    chain
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

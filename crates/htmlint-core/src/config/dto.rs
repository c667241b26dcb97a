//! JSON deserialization types (DTO layer).
//!
//! These types exist solely for serde deserialization of
//! `.htmlvalidate.json`. They are converted to domain types via the loader.

use serde::Deserialize;
use std::collections::BTreeMap;

/// Raw JSON representation of a configuration file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConfigDto {
    /// Schema URL for editor support. Ignored.
    #[serde(rename = "$schema", default)]
    pub schema: Option<String>,

    /// Marks the root configuration.
    #[serde(default)]
    pub root: bool,

    /// Presets or config files to extend.
    #[serde(default)]
    pub extends: Option<ExtendsDto>,

    /// Per-rule settings, decoded by the loader.
    #[serde(default)]
    pub rules: BTreeMap<String, serde_json::Value>,

    /// Framework-specific attribute handling.
    #[serde(default)]
    pub frameworks: FrameworksDto,
}

/// `extends` accepts a single entry or a list.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ExtendsDto {
    /// `"extends": "html-validate:recommended"`
    One(String),
    /// `"extends": ["html-validate:a11y", "./base.json"]`
    Many(Vec<String>),
}

impl ExtendsDto {
    /// Flattens into a list of entries.
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Self::One(entry) => vec![entry],
            Self::Many(entries) => entries,
        }
    }
}

/// JSON representation of the `frameworks` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct FrameworksDto {
    /// Enables htmx attribute validation.
    #[serde(default)]
    pub htmx: bool,
    /// htmx version ("2" or "4").
    #[serde(default)]
    pub htmx_version: String,
    /// Custom event names accepted by `hx-on:*`.
    #[serde(default)]
    pub htmx_custom_events: Vec<String>,
}

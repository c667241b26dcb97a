//! DTO → domain conversion with validation.

use super::dto::{FrameworksDto, RawConfigDto};
use super::{ConfigError, FrameworkOptions, RawConfig, RuleLevel, RuleSetting};
use serde_json::Value;

/// Why a rule setting could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeverityError {
    /// A numeric severity other than 0, 1 or 2.
    #[error("invalid severity number: {0} (must be 0, 1, or 2)")]
    InvalidNumber(String),

    /// A string severity that is not off, warn, warning or error.
    #[error("invalid severity '{0}' (must be off, warn, warning, or error)")]
    UnknownLevel(String),

    /// `[]`
    #[error("rule config array cannot be empty")]
    EmptyArray,

    /// `[{...}]` or `[true]`
    #[error("first element of rule config must be severity")]
    MissingSeverity,

    /// `["error", 3]`
    #[error("invalid rule options: expected an object")]
    InvalidOptions,

    /// Objects, booleans and null.
    #[error("rule config must be string, number, or array")]
    InvalidShape,
}

/// Decodes one `rules` entry.
///
/// Accepts `"off" | "warn" | "warning" | "error"`, `0 | 1 | 2`, or
/// `[severity, options?]` where `options` is a JSON object.
///
/// # Errors
///
/// Returns a [`SeverityError`] describing the first problem found.
pub fn parse_rule_setting(value: &Value) -> Result<RuleSetting, SeverityError> {
    match value {
        Value::String(_) | Value::Number(_) => Ok(RuleSetting::new(parse_level(value)?)),
        Value::Array(items) => {
            let first = items.first().ok_or(SeverityError::EmptyArray)?;
            if !matches!(first, Value::String(_) | Value::Number(_)) {
                return Err(SeverityError::MissingSeverity);
            }
            let mut setting = RuleSetting::new(parse_level(first)?);
            match items.get(1) {
                None => {}
                Some(Value::Object(options)) => setting.options = options.clone(),
                Some(_) => return Err(SeverityError::InvalidOptions),
            }
            Ok(setting)
        }
        _ => Err(SeverityError::InvalidShape),
    }
}

fn parse_level(value: &Value) -> Result<RuleLevel, SeverityError> {
    match value {
        Value::String(s) => match s.as_str() {
            "off" => Ok(RuleLevel::Off),
            "warn" | "warning" => Ok(RuleLevel::Warn),
            "error" => Ok(RuleLevel::Error),
            other => Err(SeverityError::UnknownLevel(other.to_string())),
        },
        Value::Number(n) => match n.as_i64() {
            Some(0) => Ok(RuleLevel::Off),
            Some(1) => Ok(RuleLevel::Warn),
            Some(2) => Ok(RuleLevel::Error),
            _ => Err(SeverityError::InvalidNumber(n.to_string())),
        },
        _ => Err(SeverityError::InvalidShape),
    }
}

/// Converts a [`RawConfigDto`] to a validated [`RawConfig`].
///
/// # Errors
///
/// Returns [`ConfigError::InvalidSeverity`] for the first rule whose
/// setting cannot be decoded.
pub fn load(dto: RawConfigDto) -> Result<RawConfig, ConfigError> {
    let rules = dto
        .rules
        .into_iter()
        .map(|(rule, value)| match parse_rule_setting(&value) {
            Ok(setting) => Ok((rule, setting)),
            Err(reason) => Err(ConfigError::InvalidSeverity {
                rule,
                value: value.to_string(),
                reason,
            }),
        })
        .collect::<Result<_, _>>()?;

    Ok(RawConfig {
        root: dto.root,
        extends: dto.extends.map(super::dto::ExtendsDto::into_vec).unwrap_or_default(),
        rules,
        frameworks: convert_frameworks(dto.frameworks),
    })
}

fn convert_frameworks(dto: FrameworksDto) -> FrameworkOptions {
    FrameworkOptions {
        htmx: dto.htmx,
        htmx_version: dto.htmx_version,
        htmx_custom_events: dto.htmx_custom_events,
    }
}

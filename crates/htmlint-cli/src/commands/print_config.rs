//! Print-config command implementation.

use anyhow::Result;

use crate::config_resolver::ConfigSource;

/// Prints the effective configuration as JSON.
pub fn run(source: &ConfigSource) -> Result<()> {
    let config = source.load()?;
    match source.path() {
        Some(path) => tracing::info!("Resolved from {}", path.display()),
        None => tracing::info!("No config file found, showing defaults"),
    }
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use htmlint_core::config::CONFIG_FILE_NAME;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn effective_config_serializes_resolved_rules() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE_NAME);
        fs::write(
            &path,
            r#"{"extends": ["html-validate:standard"], "frameworks": {"htmx": true, "htmx-version": "4"}}"#,
        )
        .unwrap();

        let config = ConfigSource::Project(path).load().unwrap();
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["rules"]["no-inline-style"]["level"], "off");
        assert_eq!(json["frameworks"]["htmx"], true);
        assert_eq!(json["frameworks"]["htmx-version"], "4");
        assert_eq!(json["min_severity"], "info");
    }

    #[test]
    fn effective_config_keeps_rule_options() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE_NAME);
        fs::write(
            &path,
            r#"{"rules": {"img-alt": ["warn", {"allow": ["spacer.gif"]}], "button-type": "error"}}"#,
        )
        .unwrap();

        let config = ConfigSource::Project(path).load().unwrap();
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(
            json["rules"]["img-alt"],
            serde_json::json!({"level": "warn", "options": {"allow": ["spacer.gif"]}})
        );
        assert_eq!(json["rules"]["button-type"], serde_json::json!({"level": "error"}));
    }
}

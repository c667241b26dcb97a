//! Init command implementation.

use anyhow::{bail, Context, Result};
use htmlint_core::config::CONFIG_FILE_NAME;
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"{
  "extends": ["html-validate:recommended"],
  "rules": {
    "no-inline-style": "warn"
  },
  "frameworks": {
    "htmx": false,
    "htmx-version": "2",
    "htmx-custom-events": []
  }
}
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    write_config(Path::new("."), force)?;

    println!("Created {CONFIG_FILE_NAME}");
    println!("\nNext steps:");
    println!("  1. Edit {CONFIG_FILE_NAME} to configure rules");
    println!("  2. Set \"htmx\": true if your templates use htmx");
    println!("  3. Run: htmlint check");

    Ok(())
}

fn write_config(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))
}

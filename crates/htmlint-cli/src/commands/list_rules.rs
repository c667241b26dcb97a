//! List rules command implementation.

use htmlint_core::config::Preset;
use htmlint_rules::all_rules;
use std::fmt::Write as _;

/// Runs the list-rules command.
pub fn run() {
    print!("{}", render());
}

fn render() -> String {
    let mut out = String::from("Available rules:\n\n");
    let _ = writeln!(out, "{:<24} {:<9} Description", "Name", "Severity");
    let _ = writeln!(out, "{}", "-".repeat(80));

    for rule in all_rules() {
        let _ = writeln!(
            out,
            "{:<24} {:<9} {}",
            rule.name(),
            rule.default_severity().to_string(),
            rule.description()
        );
    }

    out.push_str("\nPresets (use in \"extends\"):\n");
    for preset in Preset::ALL {
        let _ = writeln!(out, "  {:<26} - {}", preset.id(), preset.description());
    }

    out.push_str("\nhtmx-attributes runs only with \"frameworks\": {\"htmx\": true}.\n");
    out.push_str("\nUse --rules to filter specific rules, e.g.:\n");
    out.push_str("  htmlint check --rules img-alt,button-type\n");
    out
}

//! Check command implementation.

use anyhow::{Context, Result};
use htmlint_core::{ignore, EffectiveConfig, LintResult, Linter};
use htmlint_rules::{all_rules, rule_names};
use std::path::{Path, PathBuf};

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Options for one `check` run.
pub struct CheckArgs {
    /// Files or directories to lint.
    pub paths: Vec<PathBuf>,
    /// Output format.
    pub format: OutputFormat,
    /// Only report errors.
    pub quiet: bool,
    /// Extra ignore globs.
    pub ignore: Vec<String>,
    /// Rules to turn off.
    pub disable: Vec<String>,
    /// Comma-separated list of the only rules to run.
    pub rules: Option<String>,
    /// Disable colored output.
    pub no_color: bool,
}

/// Runs the check command and returns the number of errors found.
pub fn run(args: CheckArgs, search_dir: &Path, source: &ConfigSource) -> Result<usize> {
    let config = source.load()?;
    let ignore_patterns = ignore::load_ignore_patterns(search_dir).with_context(|| {
        format!(
            "Failed to read {} above {}",
            ignore::IGNORE_FILE_NAME,
            search_dir.display()
        )
    })?;

    let result = lint(config, ignore_patterns, &args)?;

    if args.no_color {
        colored::control::set_override(false);
    }
    super::output::print(&result, args.format, !args.no_color)?;

    Ok(result.error_count())
}

/// Applies the command-line overrides to `config` and lints `args.paths`.
fn lint(
    mut config: EffectiveConfig,
    ignore_patterns: Vec<String>,
    args: &CheckArgs,
) -> Result<LintResult> {
    config
        .add_ignore_patterns(ignore_patterns)
        .add_ignore_patterns(args.ignore.iter().cloned());
    for name in &args.disable {
        warn_unknown(name);
        config.disable(name.clone());
    }
    if let Some(filter) = &args.rules {
        let names: Vec<&str> = filter
            .split(',')
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .collect();
        for name in &names {
            warn_unknown(name);
        }
        config.enable_only(names);
    }
    if args.quiet {
        config.errors_only();
    }

    let linter = Linter::builder().config(config).rules(all_rules()).build();

    tracing::info!(
        "Linting {} path(s) with {} rule(s)",
        args.paths.len(),
        linter.rule_count()
    );

    linter.run(&args.paths).context("Lint failed")
}

fn warn_unknown(name: &str) {
    if !rule_names().iter().any(|known| *known == name) {
        tracing::warn!("Unknown rule: {}", name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(paths: Vec<PathBuf>) -> CheckArgs {
        CheckArgs {
            paths,
            format: OutputFormat::Compact,
            quiet: false,
            ignore: Vec::new(),
            disable: Vec::new(),
            rules: None,
            no_color: true,
        }
    }

    fn fixture() -> TempDir {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("page.html"),
            "<html lang=\"en\">\n<img src=\"a.png\">\n<button>Go</button>\n</html>\n",
        )
        .unwrap();
        fs::create_dir(tmp.path().join("vendor")).unwrap();
        fs::write(tmp.path().join("vendor").join("lib.html"), "<img src=\"b.png\">").unwrap();
        tmp
    }

    fn rules_of(result: &LintResult) -> Vec<(String, String)> {
        result
            .findings
            .iter()
            .map(|f| {
                let file = f.location.file.file_name().unwrap().to_string_lossy().to_string();
                (file, f.rule.clone())
            })
            .collect()
    }

    #[test]
    fn test_lints_directory() {
        let tmp = fixture();
        let result = lint(
            EffectiveConfig::default(),
            Vec::new(),
            &args(vec![tmp.path().to_path_buf()]),
        )
        .unwrap();

        assert_eq!(result.files_checked, 2);
        assert_eq!(
            rules_of(&result),
            vec![
                ("page.html".to_string(), "img-alt".to_string()),
                ("page.html".to_string(), "button-type".to_string()),
                ("lib.html".to_string(), "img-alt".to_string()),
            ]
        );
        assert_eq!(result.error_count(), 2);
    }

    #[test]
    fn test_ignore_patterns_skip_files() {
        let tmp = fixture();
        let result = lint(
            EffectiveConfig::default(),
            vec!["vendor/".to_string()],
            &args(vec![tmp.path().to_path_buf()]),
        )
        .unwrap();
        assert_eq!(result.files_checked, 1);
    }

    #[test]
    fn test_quiet_disable_and_rules_flags() {
        let tmp = fixture();
        let mut quiet = args(vec![tmp.path().join("page.html")]);
        quiet.quiet = true;
        let result = lint(EffectiveConfig::default(), Vec::new(), &quiet).unwrap();
        assert_eq!(
            rules_of(&result),
            vec![("page.html".to_string(), "img-alt".to_string())]
        );

        let mut disabled = args(vec![tmp.path().join("page.html")]);
        disabled.disable = vec!["img-alt".to_string()];
        let result = lint(EffectiveConfig::default(), Vec::new(), &disabled).unwrap();
        assert_eq!(
            rules_of(&result),
            vec![("page.html".to_string(), "button-type".to_string())]
        );

        let mut only = args(vec![tmp.path().join("page.html")]);
        only.rules = Some("button-type, require-lang".to_string());
        let result = lint(EffectiveConfig::default(), Vec::new(), &only).unwrap();
        assert_eq!(
            rules_of(&result),
            vec![("page.html".to_string(), "button-type".to_string())]
        );
    }

    #[test]
    fn test_missing_path_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let err = lint(
            EffectiveConfig::default(),
            Vec::new(),
            &args(vec![tmp.path().join("missing")]),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Lint failed");
    }

    #[test]
    fn test_run_counts_errors_with_project_config() {
        let tmp = fixture();
        fs::write(
            tmp.path().join(".htmlvalidate.json"),
            r#"{"rules": {"img-alt": "warn"}}"#,
        )
        .unwrap();
        fs::write(tmp.path().join(".htmlvalidateignore"), "# third-party\nvendor/\n").unwrap();

        let source = crate::config_resolver::resolve(tmp.path(), None, false);
        let errors = run(args(vec![tmp.path().to_path_buf()]), tmp.path(), &source).unwrap();
        assert_eq!(errors, 0);
    }
}

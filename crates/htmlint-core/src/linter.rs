//! Linter that runs rules over files.

use crate::config::EffectiveConfig;
use crate::context::FileContext;
use crate::ignore::should_ignore;
use crate::rule::{Rule, RuleBox};
use crate::types::{Finding, LintResult};

use htmlint_parser::ParseError;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// File extensions collected when walking a directory.
pub const TEMPLATE_EXTENSIONS: &[&str] = &["html", "htm", "gohtml", "tmpl"];

/// Errors that can occur while linting.
#[derive(Debug, Error)]
pub enum LinterError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// File that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The file could not be parsed.
    #[error("{source}")]
    Parse {
        /// File that failed to parse.
        path: PathBuf,
        /// Parser error.
        source: ParseError,
    },

    /// A path given to [`Linter::run`] does not exist.
    #[error("{}: no such file or directory", .path.display())]
    NotFound {
        /// The missing path.
        path: PathBuf,
    },

    /// Directory traversal failed.
    #[error("failed to walk {}: {source}", .path.display())]
    Walk {
        /// Directory being walked.
        path: PathBuf,
        /// Underlying walk error.
        source: walkdir::Error,
    },
}

/// Builder for configuring a [`Linter`].
#[derive(Default)]
pub struct LinterBuilder {
    config: Option<EffectiveConfig>,
    rules: Vec<RuleBox>,
}

impl LinterBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: EffectiveConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Adds a rule.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds boxed rules, typically the full registry.
    #[must_use]
    pub fn rules(mut self, rules: Vec<RuleBox>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Builds the linter, dropping disabled rules and configuring the rest.
    #[must_use]
    pub fn build(self) -> Linter {
        let config = self.config.unwrap_or_default();

        let mut rules = Vec::with_capacity(self.rules.len());
        for mut rule in self.rules {
            if !config.is_rule_enabled(rule.name()) {
                debug!("Skipping disabled rule: {}", rule.name());
                continue;
            }
            rule.configure(&config.frameworks);
            rules.push(rule);
        }

        Linter { rules, config }
    }
}

/// Runs the enabled rules over files and collects findings.
///
/// Use [`Linter::builder()`] to construct an instance.
pub struct Linter {
    rules: Vec<RuleBox>,
    config: EffectiveConfig,
}

impl Linter {
    /// Creates a new builder for configuring a linter.
    #[must_use]
    pub fn builder() -> LinterBuilder {
        LinterBuilder::new()
    }

    /// Returns the configuration in use.
    #[must_use]
    pub fn config(&self) -> &EffectiveConfig {
        &self.config
    }

    /// Returns the number of enabled rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Names of the enabled rules, in registry order.
    #[must_use]
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Lints in-memory content. `path` is only used for locations.
    ///
    /// # Errors
    ///
    /// Returns [`LinterError::Parse`] if the content cannot be parsed.
    pub fn lint_content(&self, path: &Path, content: &[u8]) -> Result<Vec<Finding>, LinterError> {
        let parse_error = |source: ParseError| LinterError::Parse {
            path: path.to_path_buf(),
            source,
        };
        let text = std::str::from_utf8(content).map_err(|e| {
            parse_error(ParseError::InvalidUtf8 {
                offset: e.valid_up_to(),
            })
        })?;
        let doc = htmlint_parser::parse(text).map_err(parse_error)?;

        let ctx = FileContext::new(path, text);
        let mut findings = Vec::new();
        for rule in &self.rules {
            let mut found = rule.check_raw(&ctx);
            found.extend(rule.check(&ctx, &doc));
            findings.extend(self.apply_severity_filter(found));
        }

        Ok(findings)
    }

    /// Reads and lints one file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn lint_file(&self, path: &Path) -> Result<Vec<Finding>, LinterError> {
        debug!("Linting: {}", path.display());
        let content = std::fs::read(path).map_err(|source| LinterError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.lint_content(path, &content)
    }

    /// Lints files in parallel, skipping ignored ones.
    ///
    /// A file that cannot be read or parsed yields one `parse-error`
    /// finding and never stops the run.
    #[must_use]
    pub fn lint_files(&self, paths: &[PathBuf]) -> LintResult {
        let files: Vec<&PathBuf> = paths
            .iter()
            .filter(|path| {
                let ignored = should_ignore(path, &self.config.ignore_patterns);
                if ignored {
                    debug!("Ignoring: {}", path.display());
                }
                !ignored
            })
            .collect();

        let per_file: Vec<Vec<Finding>> = files
            .par_iter()
            .map(|path| match self.lint_file(path) {
                Ok(findings) => findings,
                Err(e) => {
                    warn!("{}: {}", path.display(), e);
                    vec![Finding::parse_error(path.to_path_buf(), e.to_string())]
                }
            })
            .collect();

        let mut result = LintResult {
            findings: per_file.into_iter().flatten().collect(),
            files_checked: files.len(),
        };
        result.sort();
        result
    }

    /// Expands paths into the list of files to lint.
    ///
    /// Directories are walked recursively in sorted order and filtered by
    /// [`TEMPLATE_EXTENSIONS`]. Files named explicitly are kept whatever
    /// their extension.
    ///
    /// # Errors
    ///
    /// Returns [`LinterError::NotFound`] for a path that does not exist.
    pub fn collect_files(&self, paths: &[PathBuf]) -> Result<Vec<PathBuf>, LinterError> {
        let mut files = Vec::new();
        for path in paths {
            if !path.exists() {
                return Err(LinterError::NotFound { path: path.clone() });
            }
            if !path.is_dir() {
                files.push(path.clone());
                continue;
            }

            for entry in WalkDir::new(path).sort_by_file_name() {
                let entry = entry.map_err(|source| LinterError::Walk {
                    path: path.clone(),
                    source,
                })?;
                if entry.file_type().is_file() && is_template_file(entry.path()) {
                    files.push(entry.into_path());
                }
            }
        }
        Ok(files)
    }

    /// Collects files under `paths` and lints them.
    ///
    /// # Errors
    ///
    /// Returns an error if a path does not exist or cannot be walked.
    /// Per-file failures become findings instead.
    pub fn run(&self, paths: &[PathBuf]) -> Result<LintResult, LinterError> {
        info!("Starting lint with {} rule(s)", self.rules.len());

        let files = self.collect_files(paths)?;
        info!("Found {} file(s) to lint", files.len());

        let result = self.lint_files(&files);

        info!(
            "Lint complete: {} finding(s) in {} file(s)",
            result.findings.len(),
            result.files_checked
        );
        Ok(result)
    }

    /// Applies severity overrides, then drops findings below the minimum.
    fn apply_severity_filter(&self, findings: Vec<Finding>) -> impl Iterator<Item = Finding> + '_ {
        findings.into_iter().filter_map(move |mut finding| {
            if let Some(severity) = self.config.rule_severity(&finding.rule) {
                finding.severity = severity;
            }
            (finding.severity >= self.config.min_severity).then_some(finding)
        })
    }
}

fn is_template_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            TEMPLATE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

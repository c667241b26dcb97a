//! Core types for lint findings and results.

use miette::{Diagnostic, SourceSpan};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Severity level for lint findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Style hint; never affects the exit code.
    Info,
    /// Likely problem, reported but not failing.
    Warning,
    /// Accessibility or syntax error; fails the run.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Source location of a finding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// File path as given on the command line or found by the walker.
    pub file: PathBuf,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
    /// Byte offset of the span start, for source snippets.
    pub offset: usize,
    /// Span length in bytes; zero for a point.
    pub length: usize,
}

impl Location {
    /// A point location with no span.
    #[must_use]
    pub fn new(file: PathBuf, line: usize, column: usize) -> Self {
        Self {
            file,
            line,
            column,
            offset: 0,
            length: 0,
        }
    }

    /// Creates a location from a parser position.
    #[must_use]
    pub fn from_position(file: PathBuf, position: htmlint_parser::Position) -> Self {
        Self::new(file, position.line, position.column).with_span(position.offset, 0)
    }

    /// Attaches a byte span.
    #[must_use]
    pub fn with_span(mut self, offset: usize, length: usize) -> Self {
        self.offset = offset;
        self.length = length;
        self
    }
}

/// A suggested fix for a finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// What to change, e.g. `add alt=""`.
    pub message: String,
}

impl Suggestion {
    /// Creates a new suggestion.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A lint finding produced by a rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Rule name (e.g., "img-alt").
    pub rule: String,
    /// Severity of this finding.
    pub severity: Severity,
    /// Primary location of the finding.
    pub location: Location,
    /// Human-readable message.
    pub message: String,
    /// Fix hint, shown as `help:` in text output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<Suggestion>,
}

impl Finding {
    /// Rule name used for files that could not be read or parsed.
    pub const PARSE_ERROR: &'static str = "parse-error";

    /// Creates a new finding.
    #[must_use]
    pub fn new(
        rule: impl Into<String>,
        severity: Severity,
        location: Location,
        message: impl Into<String>,
    ) -> Self {
        Self {
            rule: rule.into(),
            severity,
            location,
            message: message.into(),
            suggestion: None,
        }
    }

    /// Adds a suggestion to this finding.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: Suggestion) -> Self {
        self.suggestion = Some(suggestion);
        self
    }

    /// The synthetic finding reported for a file that failed to read or parse.
    #[must_use]
    pub fn parse_error(file: PathBuf, message: impl Into<String>) -> Self {
        Self::new(
            Self::PARSE_ERROR,
            Severity::Error,
            Location::new(file, 1, 1),
            message,
        )
    }
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}: {}: {} [{}]",
            self.location.file.display(),
            self.location.line,
            self.location.column,
            self.severity,
            self.message,
            self.rule
        )
    }
}

/// Converts a Finding to a miette Diagnostic for rich error display.
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("{message}")]
pub struct FindingDiagnostic {
    message: String,
    #[help]
    help: Option<String>,
    #[label("{label_message}")]
    span: SourceSpan,
    label_message: String,
}

impl From<&Finding> for FindingDiagnostic {
    fn from(f: &Finding) -> Self {
        Self {
            message: format!("[{}] {}", f.rule, f.message),
            help: f.suggestion.as_ref().map(|s| s.message.clone()),
            span: SourceSpan::from((f.location.offset, f.location.length)),
            label_message: f.severity.to_string(),
        }
    }
}

/// Findings of a lint run over one or more files.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LintResult {
    /// All findings, sorted by file, line and column after a run.
    pub findings: Vec<Finding>,
    /// Files linted, excluding ignored ones.
    pub files_checked: usize,
}

impl LintResult {
    /// An empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any finding is an error.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.findings.iter().any(|f| f.severity == Severity::Error)
    }

    /// Number of `Error` findings; warnings and infos never count.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.count_by_severity().0
    }

    /// Counts findings by severity as `(errors, warnings, infos)`.
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize, usize) {
        self.findings
            .iter()
            .fold((0, 0, 0), |(e, w, i), f| match f.severity {
                Severity::Error => (e + 1, w, i),
                Severity::Warning => (e, w + 1, i),
                Severity::Info => (e, w, i + 1),
            })
    }

    /// Sorts findings by file, then line, then column.
    pub fn sort(&mut self) {
        self.findings.sort_by(|a, b| {
            a.location
                .file
                .cmp(&b.location.file)
                .then(a.location.line.cmp(&b.location.line))
                .then(a.location.column.cmp(&b.location.column))
        });
    }

    /// Adds findings from another result.
    pub fn extend(&mut self, other: Self) {
        self.findings.extend(other.findings);
        self.files_checked += other.files_checked;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finding(file: &str, line: usize, column: usize, severity: Severity) -> Finding {
        Finding::new(
            "img-alt",
            severity,
            Location::new(PathBuf::from(file), line, column),
            "img element missing alt attribute",
        )
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Info < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
    }

    #[test]
    fn test_finding_display() {
        let f = finding("a.html", 3, 5, Severity::Error);
        assert_eq!(
            f.to_string(),
            "a.html:3:5: error: img element missing alt attribute [img-alt]"
        );
    }

    #[test]
    fn test_parse_error_finding_is_error_at_origin() {
        let f = Finding::parse_error(PathBuf::from("bad.html"), "unterminated comment");
        assert_eq!(f.rule, "parse-error");
        assert_eq!(f.severity, Severity::Error);
        assert_eq!((f.location.line, f.location.column), (1, 1));
    }

    #[test]
    fn test_error_count_ignores_warnings_and_infos() {
        let mut result = LintResult::new();
        result.findings.push(finding("a.html", 1, 1, Severity::Warning));
        result.findings.push(finding("a.html", 2, 1, Severity::Info));
        assert_eq!(result.error_count(), 0);
        assert!(!result.has_errors());

        result.findings.push(finding("a.html", 3, 1, Severity::Error));
        assert_eq!(result.error_count(), 1);
        assert_eq!(result.count_by_severity(), (1, 1, 1));
    }

    #[test]
    fn test_sort_by_file_line_column() {
        let mut result = LintResult::new();
        result.findings.push(finding("b.html", 1, 1, Severity::Error));
        result.findings.push(finding("a.html", 2, 9, Severity::Error));
        result.findings.push(finding("a.html", 2, 3, Severity::Error));
        result.findings.push(finding("a.html", 1, 7, Severity::Error));
        result.sort();

        let order: Vec<_> = result
            .findings
            .iter()
            .map(|f| {
                (
                    f.location.file.display().to_string(),
                    f.location.line,
                    f.location.column,
                )
            })
            .collect();
        assert_eq!(
            order,
            vec![
                ("a.html".to_string(), 1, 7),
                ("a.html".to_string(), 2, 3),
                ("a.html".to_string(), 2, 9),
                ("b.html".to_string(), 1, 1),
            ]
        );
    }

    #[test]
    fn test_extend_sums_files_checked() {
        let mut a = LintResult {
            findings: vec![finding("a.html", 1, 1, Severity::Error)],
            files_checked: 2,
        };
        let b = LintResult {
            findings: vec![finding("b.html", 1, 1, Severity::Warning)],
            files_checked: 3,
        };
        a.extend(b);
        assert_eq!(a.files_checked, 5);
        assert_eq!(a.findings.len(), 2);
    }
}

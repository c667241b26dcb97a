//! Shared output formatting for lint results.

use anyhow::Result;
use colored::Colorize;
use htmlint_core::{Finding, FindingDiagnostic, LintResult, Severity};
use miette::{Diagnostic, GraphicalReportHandler, GraphicalTheme, NamedSource};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::Path;

use crate::OutputFormat;

/// Print lint results in the specified format.
pub fn print(result: &LintResult, format: OutputFormat, color: bool) -> Result<()> {
    let rendered = match format {
        OutputFormat::Text => render_text(result),
        OutputFormat::Compact => render_compact(result),
        OutputFormat::Json => render_json(result)?,
        OutputFormat::Pretty => {
            let theme = if color {
                GraphicalTheme::unicode()
            } else {
                GraphicalTheme::unicode_nocolor()
            };
            render_pretty(result, theme, |path| std::fs::read_to_string(path).ok())?
        }
    };
    print!("{rendered}");
    Ok(())
}

fn colored_severity(severity: Severity) -> String {
    let label = severity.to_string();
    match severity {
        Severity::Error => label.red().bold().to_string(),
        Severity::Warning => label.yellow().bold().to_string(),
        Severity::Info => label.blue().to_string(),
    }
}

fn location(finding: &Finding) -> String {
    format!(
        "{}:{}:{}",
        finding.location.file.display(),
        finding.location.line,
        finding.location.column
    )
}

pub(crate) fn render_text(result: &LintResult) -> String {
    let (errors, warnings, _) = result.count_by_severity();
    let mut out = String::new();

    for finding in &result.findings {
        let _ = writeln!(
            out,
            "{}: {}: {} {}",
            location(finding),
            colored_severity(finding.severity),
            finding.message,
            format!("[{}]", finding.rule).dimmed(),
        );
        if let Some(suggestion) = &finding.suggestion {
            let _ = writeln!(out, "  = help: {}", suggestion.message);
        }
    }

    if !result.findings.is_empty() {
        out.push('\n');
    }
    let summary = format!("Found {errors} error(s), {warnings} warning(s)");
    let summary = if errors > 0 {
        summary.red().bold()
    } else if warnings > 0 {
        summary.yellow().bold()
    } else {
        summary.green()
    };
    let _ = writeln!(out, "{summary}");
    out
}

pub(crate) fn render_compact(result: &LintResult) -> String {
    result
        .findings
        .iter()
        .map(|f| {
            format!(
                "{}: {} [{}] {}\n",
                location(f),
                f.severity,
                f.rule,
                f.message
            )
        })
        .collect()
}

#[derive(Serialize)]
struct JsonReport<'a> {
    results: Vec<JsonFinding<'a>>,
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonFinding<'a> {
    rule: &'a str,
    message: &'a str,
    filename: String,
    line: usize,
    column: usize,
    severity: Severity,
}

#[derive(Serialize)]
struct JsonSummary {
    total: usize,
    errors: usize,
    warnings: usize,
    info: usize,
}

pub(crate) fn render_json(result: &LintResult) -> Result<String> {
    let (errors, warnings, info) = result.count_by_severity();
    let report = JsonReport {
        results: result
            .findings
            .iter()
            .map(|f| JsonFinding {
                rule: &f.rule,
                message: &f.message,
                filename: f.location.file.display().to_string(),
                line: f.location.line,
                column: f.location.column,
                severity: f.severity,
            })
            .collect(),
        summary: JsonSummary {
            total: result.findings.len(),
            errors,
            warnings,
            info,
        },
    };
    let mut json = serde_json::to_string_pretty(&report)?;
    json.push('\n');
    Ok(json)
}

/// Renders each finding as a miette diagnostic over its file's source.
///
/// `read_source` is called once per file. Findings whose file it cannot
/// provide, or whose span falls outside it, are rendered without a snippet.
pub(crate) fn render_pretty(
    result: &LintResult,
    theme: GraphicalTheme,
    read_source: impl Fn(&Path) -> Option<String>,
) -> Result<String> {
    let handler = GraphicalReportHandler::new_themed(theme);
    let mut sources: BTreeMap<&Path, Option<String>> = BTreeMap::new();
    let mut out = String::new();

    for finding in &result.findings {
        let path = finding.location.file.as_path();
        let source = sources
            .entry(path)
            .or_insert_with(|| read_source(path))
            .as_ref()
            .filter(|src| finding.location.offset + finding.location.length <= src.len());

        let report = miette::Report::new(FindingDiagnostic::from(finding));
        let report = match source {
            Some(src) => report.with_source_code(NamedSource::new(
                path.display().to_string(),
                src.clone(),
            )),
            None => report,
        };
        let diagnostic: &dyn Diagnostic = &*report;
        handler.render_report(&mut out, diagnostic)?;
    }

    out.push_str(&render_summary_plain(result));
    Ok(out)
}

fn render_summary_plain(result: &LintResult) -> String {
    let (errors, warnings, _) = result.count_by_severity();
    format!("Found {errors} error(s), {warnings} warning(s)\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use htmlint_core::{Location, Suggestion};
    use std::path::PathBuf;

    fn sample() -> LintResult {
        let file = PathBuf::from("templates/page.html");
        LintResult {
            findings: vec![
                Finding::new(
                    "img-alt",
                    Severity::Error,
                    Location::new(file.clone(), 3, 3).with_span(35, 4),
                    "img element missing alt attribute",
                )
                .with_suggestion(Suggestion::new("add alt=\"\" for decorative images")),
                Finding::new(
                    "button-type",
                    Severity::Warning,
                    Location::new(file, 4, 3).with_span(55, 8),
                    "button missing type attribute (defaults to submit)",
                ),
            ],
            files_checked: 1,
        }
    }

    fn no_color() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_text_output() {
        no_color();
        insta::assert_snapshot!(render_text(&sample()), @r#"
        templates/page.html:3:3: error: img element missing alt attribute [img-alt]
          = help: add alt="" for decorative images
        templates/page.html:4:3: warning: button missing type attribute (defaults to submit) [button-type]

        Found 1 error(s), 1 warning(s)
        "#);
    }

    #[test]
    fn test_text_output_without_findings() {
        no_color();
        assert_eq!(
            render_text(&LintResult::new()),
            "Found 0 error(s), 0 warning(s)\n"
        );
    }

    #[test]
    fn test_compact_output() {
        insta::assert_snapshot!(render_compact(&sample()), @r"
        templates/page.html:3:3: error [img-alt] img element missing alt attribute
        templates/page.html:4:3: warning [button-type] button missing type attribute (defaults to submit)
        ");
    }

    #[test]
    fn test_json_output() {
        let json: serde_json::Value = serde_json::from_str(&render_json(&sample()).unwrap()).unwrap();
        assert_eq!(
            json["summary"],
            serde_json::json!({"total": 2, "errors": 1, "warnings": 1, "info": 0})
        );
        assert_eq!(
            json["results"][0],
            serde_json::json!({
                "rule": "img-alt",
                "message": "img element missing alt attribute",
                "filename": "templates/page.html",
                "line": 3,
                "column": 3,
                "severity": "error",
            })
        );
        assert_eq!(json["results"][1]["severity"], "warning");
    }

    #[test]
    fn test_pretty_output_includes_source_snippet() {
        let source = "<!DOCTYPE html>\n<html lang=\"en\">\n  <img src=\"a.png\">\n  <button>Go</button>\n</html>\n";
        let out = render_pretty(&sample(), GraphicalTheme::unicode_nocolor(), |path| {
            assert_eq!(path, Path::new("templates/page.html"));
            Some(source.to_string())
        })
        .unwrap();

        assert!(out.contains("[img-alt] img element missing alt attribute"));
        assert!(out.contains("<img src=\"a.png\">"));
        assert!(out.contains("add alt=\"\" for decorative images"));
        assert!(out.ends_with("Found 1 error(s), 1 warning(s)\n"));
    }

    #[test]
    fn test_pretty_output_without_source() {
        let out = render_pretty(&sample(), GraphicalTheme::unicode_nocolor(), |_| None).unwrap();
        assert!(out.contains("[button-type]"));
    }
}

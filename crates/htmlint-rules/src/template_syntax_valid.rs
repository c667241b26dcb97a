//! Rule to catch common Go template syntax errors.
//!
//! # Detected Patterns
//!
//! - a `}}` with no opening `{{`, or a `{{` that is never closed
//! - `if`, `range`, `with`, `block` or `define` without a matching `end`
//! - `end` or `else` with nothing open
//! - trim markers glued to the action: `{{-foo }}`, `{{ foo-}}`
//!
//! Works on the raw file text, so an unclosed `{{` does not stop the other
//! rules from running on the parsed document.

use htmlint_core::{FileContext, Finding, Location, Rule, Severity};
use htmlint_parser::Document;
use once_cell::sync::Lazy;
use regex::Regex;

/// Rule name for template-syntax-valid.
pub const NAME: &str = "template-syntax-valid";

const BLOCK_KEYWORDS: &[&str] = &["if", "range", "with", "block", "define"];

#[allow(clippy::expect_used)]
static ACTION_KEYWORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{-?\s*(\w+)").expect("action pattern is valid"));

#[allow(clippy::expect_used)]
static LEADING_TRIM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{-[^\s-]").expect("trim pattern is valid"));

#[allow(clippy::expect_used)]
static TRAILING_TRIM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\s-]-\}\}").expect("trim pattern is valid"));

/// Validates template delimiters and block structure.
#[derive(Debug, Clone, Default)]
pub struct TemplateSyntaxValid;

impl TemplateSyntaxValid {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for TemplateSyntaxValid {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "validate Go template syntax for common errors"
    }

    fn check(&self, _ctx: &FileContext, _doc: &Document) -> Vec<Finding> {
        Vec::new()
    }

    fn check_raw(&self, ctx: &FileContext) -> Vec<Finding> {
        let mut findings: Vec<Finding> = check_delimiters(ctx).into_iter().collect();
        findings.extend(check_blocks(ctx));
        findings.extend(check_trim_markers(ctx));
        findings
    }
}

fn finding(location: Location, message: impl Into<String>) -> Finding {
    Finding::new(NAME, Severity::Error, location, message)
}

/// 1-indexed column of a byte index within a line.
fn column(line: &str, index: usize) -> usize {
    line.get(..index).map_or(index, |prefix| prefix.chars().count()) + 1
}

fn check_delimiters(ctx: &FileContext) -> Option<Finding> {
    let bytes = ctx.content.as_bytes();
    let mut open: Vec<usize> = Vec::new();
    let mut i = 0;
    while i + 1 < bytes.len() {
        match &bytes[i..i + 2] {
            b"{{" => {
                open.push(i);
                i += 2;
            }
            b"}}" if open.pop().is_none() => {
                let (line, col) = ctx.line_column(i);
                return Some(finding(
                    ctx.location_at(line, col),
                    "unmatched '}}' - missing opening '{{'",
                ));
            }
            b"}}" => i += 2,
            _ => i += 1,
        }
    }

    let first = open.first()?;
    let (line, col) = ctx.line_column(*first);
    Some(finding(
        ctx.location_at(line, col),
        "unmatched '{{' - missing closing '}}'",
    ))
}

fn check_blocks(ctx: &FileContext) -> Vec<Finding> {
    let mut findings = Vec::new();
    let mut open: Vec<(&str, usize, usize)> = Vec::new();

    for (index, line) in ctx.content.lines().enumerate() {
        let line_no = index + 1;
        for caps in ACTION_KEYWORD.captures_iter(line) {
            let (Some(action), Some(keyword)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let col = column(line, action.start());
            match keyword.as_str() {
                kw if BLOCK_KEYWORDS.contains(&kw) => open.push((kw, line_no, col)),
                "end" => {
                    if open.pop().is_none() {
                        findings.push(finding(
                            ctx.location_at(line_no, col),
                            "unexpected '{{ end }}' - no matching control structure",
                        ));
                    }
                }
                "else" if open.is_empty() => findings.push(finding(
                    ctx.location_at(line_no, col),
                    "unexpected '{{ else }}' - no matching 'if' or 'with'",
                )),
                _ => {}
            }
        }
    }

    findings.extend(open.into_iter().map(|(keyword, line, col)| {
        finding(
            ctx.location_at(line, col),
            format!("unclosed '{{{{ {keyword} }}}}' - missing '{{{{ end }}}}'"),
        )
    }));
    findings
}

fn check_trim_markers(ctx: &FileContext) -> Vec<Finding> {
    let mut findings = Vec::new();
    for (index, line) in ctx.content.lines().enumerate() {
        if let Some(m) = LEADING_TRIM.find(line) {
            findings.push(finding(
                ctx.location_at(index + 1, column(line, m.start())),
                "trim marker '{{-' must be followed by whitespace",
            ));
        }
        if let Some(m) = TRAILING_TRIM.find(line) {
            findings.push(finding(
                ctx.location_at(index + 1, column(line, m.start())),
                "trim marker '-}}' must be preceded by whitespace",
            ));
        }
    }
    findings
}

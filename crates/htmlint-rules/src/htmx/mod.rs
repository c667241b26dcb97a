//! Rule to validate htmx attribute names and values.
//!
//! # Rationale
//!
//! htmx reads its configuration out of attribute strings at runtime. A typo
//! in `hx-swap` or `hx-trigger` is silently ignored by the browser and only
//! shows up as a page that does nothing.
//!
//! # Checks
//!
//! - `hx-swap`, `hx-trigger`, `hx-target` and `hx-include` grammars
//! - `hx-on:*` event names
//! - `hx-vals` / `hx-headers` JSON
//! - `hx-status:*` codes (htmx 4)
//! - `:inherited` / `:append` suffixes (htmx 4)
//! - attributes unknown to, or removed from, the configured htmx version
//! - request attributes on submit buttons inside a form
//!
//! # Configuration
//!
//! Active only when `frameworks.htmx` is enabled:
//!
//! ```json
//! {
//!   "frameworks": {
//!     "htmx": true,
//!     "htmx-version": "4",
//!     "htmx-custom-events": ["item-added"]
//!   }
//! }
//! ```
//!
//! Values that still contain template actions (`{{ ... }}`) are skipped.

mod events;
mod json;
mod selector;
mod status;
mod submit;
mod swap;
mod target;
mod time;
mod trigger;
mod vocab;

use htmlint_core::{FileContext, Finding, FrameworkOptions, HtmxVersion, Rule, Severity, Suggestion};
use htmlint_parser::{Attribute, Document};
use tracing::debug;
use vocab::{AttributeStatus, HtmxVocabulary};

/// Rule name for htmx-attributes.
pub const NAME: &str = "htmx-attributes";

/// Placeholder some template preprocessors leave in attribute values.
const TEMPLATE_PLACEHOLDER: &str = "TMPL";

/// Suffixes htmx 4 accepts on attribute names, longest first.
const SUFFIXES: &[&str] = &[":inherited:append", ":inherited", ":append"];

/// One problem found in an attribute, before it is placed in a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Issue {
    pub severity: Severity,
    pub message: String,
    pub suggestion: Option<String>,
}

impl Issue {
    fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            suggestion: None,
        }
    }

    pub(crate) fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    pub(crate) fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    #[must_use]
    pub(crate) fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Validates htmx attributes against the configured htmx version.
#[derive(Debug, Clone, Default)]
pub struct HtmxAttributes {
    enabled: bool,
    version: HtmxVersion,
    custom_events: Vec<String>,
}

impl HtmxAttributes {
    /// Creates a disabled rule; the linter enables it from configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Turns validation on or off.
    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Sets the htmx version to validate against.
    #[must_use]
    pub fn version(mut self, version: HtmxVersion) -> Self {
        self.version = version;
        self
    }

    /// Accepts a custom event name in `hx-on:*`.
    #[must_use]
    pub fn custom_event(mut self, event: impl Into<String>) -> Self {
        self.custom_events.push(event.into());
        self
    }

    /// Validates one attribute. Names are expected lower-cased.
    fn validate(&self, vocab: &HtmxVocabulary, attr: &Attribute) -> Vec<Issue> {
        let Some(name) = htmx_name(&attr.name) else {
            return Vec::new();
        };

        if name.starts_with("hx-on:") || name.starts_with("hx-on-") {
            return events::validate(vocab, &name, &self.custom_events);
        }
        if name.starts_with("hx-status:") || name.starts_with("hx-status-") {
            return status::validate(vocab, &name);
        }

        let (base, suffix) = split_suffix(&name);
        let mut issues = Vec::new();
        match vocab.attribute_status(base) {
            AttributeStatus::Known => {}
            AttributeStatus::Removed(replacement) => {
                let issue = Issue::warning(format!("{base} is deprecated in htmx 4"));
                issues.push(match replacement {
                    Some(replacement) => issue.with_suggestion(format!("use {replacement} instead")),
                    None => issue,
                });
            }
            AttributeStatus::Newer => {
                issues.push(Issue::warning(format!("{base} is only available in htmx 4")));
            }
            AttributeStatus::Unknown => {
                issues.push(Issue::warning(format!("unknown htmx attribute '{name}'")));
                return issues;
            }
        }
        if let Some(suffix) = suffix {
            if !vocab.is_v4() {
                issues.push(Issue::warning(format!(
                    "attribute suffix '{suffix}' on {base} is only available in htmx 4"
                )));
            }
        }

        if is_templated(&attr.value) {
            return issues;
        }
        let value = attr.value.trim();
        if value.is_empty() {
            return issues;
        }

        issues.extend(match base {
            "hx-swap" => swap::validate(vocab, value),
            "hx-trigger" => trigger::validate(value),
            "hx-target" => target::validate(vocab, value),
            "hx-vals" | "hx-headers" => json::validate(base, value),
            "hx-include" => selector::validate_include(value),
            _ => Vec::new(),
        });
        issues
    }
}

impl Rule for HtmxAttributes {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "htmx attribute values must be valid"
    }

    fn configure(&mut self, frameworks: &FrameworkOptions) {
        self.enabled = frameworks.htmx;
        self.version = frameworks.version();
        self.custom_events
            .clone_from(&frameworks.htmx_custom_events);
        if self.enabled {
            debug!(
                "htmx validation enabled: {:?}, {} custom event(s)",
                self.version,
                self.custom_events.len()
            );
        }
    }

    fn check(&self, ctx: &FileContext, doc: &Document) -> Vec<Finding> {
        if !self.enabled {
            return Vec::new();
        }
        let vocab = HtmxVocabulary::for_version(self.version);
        let mut findings = Vec::new();

        for (node, element) in doc.elements() {
            for attr in &element.attrs {
                findings.extend(
                    self.validate(vocab, attr)
                        .into_iter()
                        .map(|issue| to_finding(issue, ctx.span_location(attr.span))),
                );
            }
            if let Some(issue) = submit::check(doc, node, element) {
                findings.push(to_finding(issue, ctx.span_location(node.span)));
            }
        }

        findings
    }
}

fn to_finding(issue: Issue, location: htmlint_core::Location) -> Finding {
    let finding = Finding::new(NAME, issue.severity, location, issue.message);
    match issue.suggestion {
        Some(suggestion) => finding.with_suggestion(Suggestion::new(suggestion)),
        None => finding,
    }
}

/// The `hx-*` form of an htmx attribute name, accepting `data-hx-*`.
fn htmx_name(name: &str) -> Option<String> {
    let name = name.to_ascii_lowercase();
    if name.starts_with("hx-") {
        Some(name)
    } else {
        name.strip_prefix("data-")
            .filter(|rest| rest.starts_with("hx-"))
            .map(String::from)
    }
}

fn split_suffix(name: &str) -> (&str, Option<&'static str>) {
    SUFFIXES
        .iter()
        .find_map(|suffix| name.strip_suffix(suffix).map(|base| (base, Some(*suffix))))
        .unwrap_or((name, None))
}

fn is_templated(value: &str) -> bool {
    value.contains("{{") || value.contains(TEMPLATE_PLACEHOLDER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn run(rule: &HtmxAttributes, html: &str) -> Vec<Finding> {
        let doc = htmlint_parser::parse(html).unwrap();
        let ctx = FileContext::new(Path::new("page.html"), html);
        rule.check(&ctx, &doc)
    }

    fn v2() -> HtmxAttributes {
        HtmxAttributes::new().enabled(true)
    }

    fn v4() -> HtmxAttributes {
        HtmxAttributes::new().enabled(true).version(HtmxVersion::V4)
    }

    fn messages(findings: &[Finding]) -> Vec<&str> {
        findings.iter().map(|f| f.message.as_str()).collect()
    }

    #[test]
    fn test_disabled_by_default() {
        let rule = HtmxAttributes::new();
        assert!(run(&rule, r#"<div hx-swap="sideways"></div>"#).is_empty());
    }

    #[test]
    fn test_configure_reads_framework_options() {
        let mut rule = HtmxAttributes::new();
        rule.configure(&FrameworkOptions {
            htmx: true,
            htmx_version: "4".to_string(),
            htmx_custom_events: vec!["cart-updated".to_string()],
        });
        assert!(run(&rule, r#"<div hx-on:cart-updated="x()" hx-swap="upsert"></div>"#).is_empty());
    }

    #[test]
    fn test_finding_points_at_attribute() {
        let html = "<div>\n  <p class=\"x\" hx-swap=\"sideways\"></p>\n</div>";
        let findings = run(&v2(), html);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].rule, NAME);
        assert_eq!(findings[0].severity, Severity::Error);
        assert_eq!((findings[0].location.line, findings[0].location.column), (2, 16));
    }

    #[test]
    fn test_template_values_are_skipped() {
        let html = r#"<div hx-swap="{{ .Swap }}" hx-vals='TMPL' hx-trigger="{{ if .X }}click{{ end }} delay:x"></div>"#;
        assert!(run(&v2(), html).is_empty());
    }

    #[test]
    fn test_data_prefix_is_validated() {
        let findings = run(&v2(), r#"<div data-hx-swap="sideways"></div>"#);
        assert_eq!(messages(&findings), vec!["invalid hx-swap value 'sideways'"]);
    }

    #[test]
    fn test_attribute_inventory_by_version() {
        assert_eq!(
            messages(&run(&v2(), r#"<div hx-frobnicate="1"></div>"#)),
            vec!["unknown htmx attribute 'hx-frobnicate'"]
        );
        assert_eq!(
            messages(&run(&v2(), r#"<div hx-optimistic="true"></div>"#)),
            vec!["hx-optimistic is only available in htmx 4"]
        );
        let findings = run(&v4(), r#"<div hx-vars="a:1"></div>"#);
        assert_eq!(messages(&findings), vec!["hx-vars is deprecated in htmx 4"]);
        assert_eq!(findings[0].severity, Severity::Warning);
        assert!(findings[0].suggestion.is_some());
        assert!(run(&v4(), r#"<div hx-optimistic="true"></div>"#).is_empty());
    }

    #[test]
    fn test_suffixes() {
        assert!(run(&v4(), r##"<div hx-target:inherited="#main"></div>"##).is_empty());
        assert!(run(&v4(), r#"<div hx-include:inherited:append=".extra"></div>"#).is_empty());
        assert_eq!(
            messages(&run(&v2(), r##"<div hx-target:inherited="#main"></div>"##)),
            vec!["attribute suffix ':inherited' on hx-target is only available in htmx 4"]
        );
        assert_eq!(
            messages(&run(&v4(), r#"<div hx-bogus:append="x"></div>"#)),
            vec!["unknown htmx attribute 'hx-bogus:append'"]
        );
    }

    #[test]
    fn test_json_attributes_accept_any_json_value() {
        let html = r#"<div hx-vals='[1,2]' hx-headers='"x"'></div><p hx-vals='null'></p>"#;
        assert!(run(&v2(), html).is_empty());
    }

    #[test]
    fn test_suffixed_value_is_still_validated() {
        let findings = run(&v4(), r#"<div hx-swap:inherited="sideways"></div>"#);
        assert_eq!(messages(&findings), vec!["invalid hx-swap value 'sideways'"]);
    }

    #[test]
    fn test_dispatch_to_each_grammar() {
        let html = r#"<form>
  <div hx-trigger="every" hx-target="nearest tr" hx-vals="{bad}" hx-include="div >"></div>
  <div hx-on:htmx:afterfoo="go()" hx-status:404="x"></div>
  <button hx-post="/save">Save</button>
</form>"#;
        let findings = run(&v2(), html);
        let rules: Vec<(usize, Severity)> = findings
            .iter()
            .map(|f| (f.location.line, f.severity))
            .collect();
        assert_eq!(
            rules,
            vec![
                (2, Severity::Error),
                (2, Severity::Warning),
                (2, Severity::Error),
                (2, Severity::Error),
                (3, Severity::Warning),
                (3, Severity::Warning),
                (4, Severity::Warning),
            ]
        );
    }
}

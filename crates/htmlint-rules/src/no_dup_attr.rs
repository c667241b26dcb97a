//! Rule to forbid repeating an attribute on one element.
//!
//! Browsers keep the first occurrence and drop the rest, so the later value
//! never takes effect. Names are compared case-insensitively.

use htmlint_core::{FileContext, Finding, Rule, Severity};
use htmlint_parser::Document;
use std::collections::HashSet;

/// Rule name for no-dup-attr.
pub const NAME: &str = "no-dup-attr";

/// Flags attributes that appear twice on the same element.
#[derive(Debug, Clone, Default)]
pub struct NoDupAttr;

impl NoDupAttr {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for NoDupAttr {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "elements should not have duplicate attributes"
    }

    fn check(&self, ctx: &FileContext, doc: &Document) -> Vec<Finding> {
        let mut findings = Vec::new();
        for (_, element) in doc.elements() {
            let mut seen = HashSet::new();
            for attr in &element.attrs {
                if !seen.insert(attr.name.to_ascii_lowercase()) {
                    findings.push(Finding::new(
                        NAME,
                        Severity::Error,
                        ctx.span_location(attr.span),
                        format!("duplicate attribute: {}", attr.name),
                    ));
                }
            }
        }
        findings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn check(html: &str) -> Vec<Finding> {
        let doc = htmlint_parser::parse(html).unwrap();
        NoDupAttr::new().check(&FileContext::new(Path::new("t.html"), html), &doc)
    }

    #[test]
    fn test_duplicate_attribute() {
        let findings = check(r#"<div class="a" id="x" CLASS="b"></div>"#);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].message, "duplicate attribute: class");
        assert_eq!(findings[0].location.column, 23);
    }

    #[test]
    fn test_distinct_attributes() {
        assert!(check(r#"<input name="a" value="b" disabled>"#).is_empty());
    }
}

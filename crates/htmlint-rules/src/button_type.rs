//! Rule to require an explicit `type` on buttons.
//!
//! # Rationale
//!
//! A `<button>` without `type` is a submit button. Inside a form, a button
//! meant to open a menu will submit the form instead.

use htmlint_core::{FileContext, Finding, Rule, Severity, Suggestion};
use htmlint_parser::Document;

/// Rule name for button-type.
pub const NAME: &str = "button-type";

/// Requires a `type` attribute on `<button>`.
#[derive(Debug, Clone, Default)]
pub struct ButtonType;

impl ButtonType {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for ButtonType {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "buttons should have explicit type attribute (submit, button, or reset)"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, ctx: &FileContext, doc: &Document) -> Vec<Finding> {
        doc.elements()
            .filter(|(_, el)| el.name == "button" && !el.has_attr("type"))
            .map(|(node, _)| {
                Finding::new(
                    NAME,
                    Severity::Warning,
                    ctx.span_location(node.span),
                    "button missing type attribute (defaults to submit)",
                )
                .with_suggestion(Suggestion::new("add type=\"button\" or type=\"submit\""))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn check(html: &str) -> Vec<Finding> {
        let doc = htmlint_parser::parse(html).unwrap();
        ButtonType::new().check(&FileContext::new(Path::new("t.html"), html), &doc)
    }

    #[test]
    fn test_missing_type() {
        let findings = check("<button>Go</button>");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Warning);
    }

    #[test]
    fn test_with_type() {
        assert!(check(r#"<button type="button">Go</button>"#).is_empty());
        assert!(check(r#"<input type="submit">"#).is_empty());
    }
}

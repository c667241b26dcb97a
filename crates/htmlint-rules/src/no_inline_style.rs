//! Rule to discourage inline `style` attributes.

use htmlint_core::{FileContext, Finding, Rule, Severity};
use htmlint_parser::Document;

/// Rule name for no-inline-style.
pub const NAME: &str = "no-inline-style";

/// Reports non-empty `style` attributes as info.
#[derive(Debug, Clone, Default)]
pub struct NoInlineStyle;

impl NoInlineStyle {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for NoInlineStyle {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "avoid inline styles; use classes with separate stylesheets"
    }

    fn default_severity(&self) -> Severity {
        Severity::Info
    }

    fn check(&self, ctx: &FileContext, doc: &Document) -> Vec<Finding> {
        doc.elements()
            .filter_map(|(_, el)| el.attr("style").filter(|a| !a.value.is_empty()))
            .map(|attr| {
                Finding::new(
                    NAME,
                    Severity::Info,
                    ctx.span_location(attr.span),
                    "avoid inline style attribute; use CSS classes instead",
                )
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
        NoInlineStyle::new().check(&FileContext::new(Path::new("t.html"), html), &doc)
    }

    #[test]
    fn test_inline_style_is_info() {
        let findings = check(r#"<p style="color: red">x</p>"#);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Info);
    }

    #[test]
    fn test_empty_style_is_ignored() {
        assert!(check(r#"<p style="">x</p><p class="red">y</p>"#).is_empty());
    }
}

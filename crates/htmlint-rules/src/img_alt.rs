//! Rule to require `alt` on images.
//!
//! # Rationale
//!
//! Screen readers announce an image by its `alt` text. Without the
//! attribute they fall back to the file name. Decorative images should
//! carry an empty `alt=""`, which this rule accepts.

use htmlint_core::{FileContext, Finding, Rule, Severity, Suggestion};
use htmlint_parser::Document;

/// Rule name for img-alt.
pub const NAME: &str = "img-alt";

/// Requires an `alt` attribute on every `<img>`.
#[derive(Debug, Clone, Default)]
pub struct ImgAlt;

impl ImgAlt {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for ImgAlt {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "images must have alt attribute for accessibility"
    }

    fn check(&self, ctx: &FileContext, doc: &Document) -> Vec<Finding> {
        doc.elements()
            .filter(|(_, el)| el.name == "img" && !el.has_attr("alt"))
            .map(|(node, _)| {
                Finding::new(
                    NAME,
                    Severity::Error,
                    ctx.span_location(node.span),
                    "img element missing alt attribute",
                )
                .with_suggestion(Suggestion::new(
                    "describe the image in alt, or use alt=\"\" if it is decorative",
                ))
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
        ImgAlt::new().check(&FileContext::new(Path::new("t.html"), html), &doc)
    }

    #[test]
    fn test_missing_alt() {
        let findings = check("<p>\n<img src=\"a.png\">\n</p>");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].message, "img element missing alt attribute");
        assert_eq!(findings[0].location.line, 2);
    }

    #[test]
    fn test_empty_alt_is_accepted() {
        assert!(check(r#"<img src="a.png" alt="">"#).is_empty());
        assert!(check(r#"<img src="a.png" alt="Logo">"#).is_empty());
    }
}

//! Rule to require a `lang` attribute on `<html>`.
//!
//! # Rationale
//!
//! Screen readers pick a pronunciation from the document language, and
//! browsers use it for hyphenation and translation prompts.
//!
//! Partial templates have no `<html>` element and are never reported.

use htmlint_core::{FileContext, Finding, Rule, Severity, Suggestion};
use htmlint_parser::Document;

/// Rule name for require-lang.
pub const NAME: &str = "require-lang";

/// Requires a non-empty `lang` on the root element.
#[derive(Debug, Clone, Default)]
pub struct RequireLang;

impl RequireLang {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for RequireLang {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "<html> element must have a lang attribute"
    }

    fn check(&self, ctx: &FileContext, doc: &Document) -> Vec<Finding> {
        doc.elements()
            .filter(|(_, el)| el.name == "html")
            .filter_map(|(node, el)| {
                let location = ctx.span_location(node.span);
                match el.attr_value("lang") {
                    None => Some(
                        Finding::new(
                            NAME,
                            Severity::Error,
                            location,
                            "<html> element must have a lang attribute; add lang=\"en\" for English content",
                        )
                        .with_suggestion(Suggestion::new("add lang=\"en\"")),
                    ),
                    Some(lang) if lang.trim().is_empty() => Some(Finding::new(
                        NAME,
                        Severity::Error,
                        location,
                        "lang attribute must not be empty; use BCP 47 code like \"en\" or \"en-US\"",
                    )),
                    Some(_) => None,
                }
            })
            .collect()
    }
}

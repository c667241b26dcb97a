//! Rule trait for defining lint rules.

use crate::config::FrameworkOptions;
use crate::context::FileContext;
use crate::types::{Finding, Severity};
use htmlint_parser::Document;

/// A per-file lint rule that inspects a parsed document.
///
/// Rules are configured once while the linter is built and are then shared
/// across worker threads, so `check` takes `&self`.
///
/// # Example
///
/// ```
/// use htmlint_core::{FileContext, Finding, Rule, Severity};
/// use htmlint_parser::Document;
///
/// pub struct NoMarquee;
///
/// impl Rule for NoMarquee {
///     fn name(&self) -> &'static str { "no-marquee" }
///
///     fn check(&self, ctx: &FileContext, doc: &Document) -> Vec<Finding> {
///         doc.elements()
///             .filter(|(_, el)| el.name == "marquee")
///             .map(|(node, _)| {
///                 Finding::new(self.name(), Severity::Error, ctx.location(node.span.start), "marquee is obsolete")
///             })
///             .collect()
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "img-alt").
    fn name(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for findings from this rule.
    ///
    /// Rules that report mixed severities return the highest one.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Receives framework settings before any file is checked.
    fn configure(&mut self, _frameworks: &FrameworkOptions) {}

    /// Checks a parsed document and returns any findings.
    fn check(&self, ctx: &FileContext, doc: &Document) -> Vec<Finding>;

    /// Checks the raw file text. Runs before [`Rule::check`].
    fn check_raw(&self, _ctx: &FileContext) -> Vec<Finding> {
        Vec::new()
    }
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;

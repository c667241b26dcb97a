//! Rule to forbid duplicate `id` values within a document.
//!
//! # Rationale
//!
//! `getElementById`, `label[for]`, `aria-labelledby` and htmx targets all
//! resolve to the first element with a given id. Later duplicates are
//! unreachable.
//!
//! Ids produced by template actions (`id="row-{{ .ID }}"`) are skipped, since
//! their rendered values are unknown.

use htmlint_core::{FileContext, Finding, Rule, Severity};
use htmlint_parser::Document;
use std::collections::HashMap;

/// Rule name for duplicate-id.
pub const NAME: &str = "duplicate-id";

/// Flags `id` values that appear more than once.
#[derive(Debug, Clone, Default)]
pub struct DuplicateId;

impl DuplicateId {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for DuplicateId {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "id attributes must be unique within a document"
    }

    fn check(&self, ctx: &FileContext, doc: &Document) -> Vec<Finding> {
        let mut first_seen: HashMap<&str, usize> = HashMap::new();
        let mut findings = Vec::new();

        for (node, element) in doc.elements() {
            let Some(id) = element.attr_value("id") else {
                continue;
            };
            if id.is_empty() || id.contains("{{") || id.contains("TMPL") {
                continue;
            }

            match first_seen.get(id) {
                Some(line) => findings.push(Finding::new(
                    NAME,
                    Severity::Error,
                    ctx.span_location(node.span),
                    format!("duplicate id \"{id}\" (first defined at line {line})"),
                )),
                None => {
                    first_seen.insert(id, node.line());
                }
            }
        }

        findings
    }
}

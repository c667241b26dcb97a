//! The built-in rule set.

use crate::{
    ButtonType, DuplicateId, HtmxAttributes, ImgAlt, NoDupAttr, NoInlineStyle, RequireLang,
    TemplateSyntaxValid,
};
use htmlint_core::RuleBox;

/// Returns every built-in rule, in a fixed order.
///
/// Which rules actually run, and at what severity, is decided by the
/// configuration the linter is built with.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    vec![
        Box::new(ImgAlt::new()),
        Box::new(ButtonType::new()),
        Box::new(DuplicateId::new()),
        Box::new(NoDupAttr::new()),
        Box::new(NoInlineStyle::new()),
        Box::new(RequireLang::new()),
        Box::new(HtmxAttributes::new()),
        Box::new(TemplateSyntaxValid::new()),
    ]
}

/// Names of all built-in rules, in registry order.
#[must_use]
pub fn rule_names() -> Vec<&'static str> {
    all_rules().iter().map(|r| r.name()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_rule_names_are_unique_and_ordered() {
        let names = rule_names();
        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(unique.len(), names.len());
        assert_eq!(names.first(), Some(&"img-alt"));
        assert_eq!(names.last(), Some(&"template-syntax-valid"));
    }

    #[test]
    fn test_every_rule_has_a_description() {
        for rule in all_rules() {
            assert!(!rule.description().is_empty(), "{}", rule.name());
        }
    }
}

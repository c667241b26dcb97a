//! Built-in configuration presets.
//!
//! Presets are flat configs (they never extend anything) that can be named
//! in `extends`. Rule names that htmlint does not implement are kept so a
//! config shared with other html-validate tooling resolves the same way.

use super::{RawConfig, RuleLevel, RuleSetting};

/// Accessibility rules the a11y preset raises to error.
const A11Y_ERRORS: &[&str] = &[
    "img-alt",
    "area-alt",
    "input-label",
    "button-name",
    "link-name",
    "heading-content",
    "heading-level",
    "text-content",
    "empty-title",
    "aria-hidden-body",
    "hidden-focusable",
    "aria-label-misuse",
    "tabindex-no-positive",
    "no-autoplay",
    "meta-refresh",
    "wcag/h36",
    "wcag/h63",
    "wcag/h67",
    "wcag/h71",
    "require-lang",
];

const A11Y_WARNINGS: &[&str] = &[
    "prefer-aria",
    "unique-landmark",
    "form-submit",
    "button-type",
    "svg-focusable",
];

/// Validation-only and style rules the a11y preset turns off.
const A11Y_OFF: &[&str] = &[
    "prefer-tbody",
    "no-inline-style",
    "class-pattern",
    "id-pattern",
    "name-pattern",
    "no-style-tag",
    "deprecated",
    "no-deprecated-attr",
    "no-conditional-comment",
    "element-name",
    "script-type",
    "attribute-allowed-values",
    "void-content",
    "element-required-ancestor",
    "element-permitted-parent",
    "element-permitted-content",
    "element-permitted-occurrences",
    "element-required-content",
    "element-permitted-order",
];

/// Style-preference rules the standard preset turns off.
const STANDARD_OFF: &[&str] = &[
    "prefer-tbody",
    "no-inline-style",
    "prefer-semantic",
    "class-pattern",
    "id-pattern",
    "name-pattern",
    "no-style-tag",
    "prefer-native-element",
];

/// Preset configurations for htmlint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Every rule at its default severity.
    Recommended,
    /// Recommended minus style-preference rules.
    Standard,
    /// Accessibility rules raised, validation-only rules off.
    A11y,
}

impl Preset {
    /// All presets, in documentation order.
    pub const ALL: [Self; 3] = [Self::Recommended, Self::Standard, Self::A11y];

    /// The identifier used in `extends`.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Recommended => "html-validate:recommended",
            Self::Standard => "html-validate:standard",
            Self::A11y => "html-validate:a11y",
        }
    }

    /// Looks up a preset by its `extends` identifier.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.id() == id)
    }

    /// One-line description for `list-rules`.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Recommended => "all rules at their default severity",
            Self::Standard => "recommended without style-preference rules",
            Self::A11y => "accessibility rules as errors, validation-only rules off",
        }
    }

    /// The preset's configuration.
    #[must_use]
    pub fn config(self) -> RawConfig {
        let mut config = RawConfig::default();
        let mut set = |names: &[&str], level: RuleLevel| {
            for name in names {
                config
                    .rules
                    .insert((*name).to_string(), RuleSetting::new(level));
            }
        };
        match self {
            Self::Recommended => {}
            Self::Standard => set(STANDARD_OFF, RuleLevel::Off),
            Self::A11y => {
                set(A11Y_ERRORS, RuleLevel::Error);
                set(A11Y_WARNINGS, RuleLevel::Warn);
                set(A11Y_OFF, RuleLevel::Off);
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_ids_round_trip() {
        for preset in Preset::ALL {
            assert_eq!(Preset::from_id(preset.id()), Some(preset));
        }
        assert_eq!(Preset::from_id("html-validate:strict"), None);
    }

    #[test]
    fn test_presets_are_flat() {
        for preset in Preset::ALL {
            assert!(preset.config().extends.is_empty());
        }
    }

    #[test]
    fn test_recommended_is_empty() {
        assert!(Preset::Recommended.config().rules.is_empty());
    }

    #[test]
    fn test_a11y_levels() {
        let config = Preset::A11y.config();
        assert_eq!(config.rules["img-alt"].level, RuleLevel::Error);
        assert_eq!(config.rules["button-type"].level, RuleLevel::Warn);
        assert_eq!(config.rules["no-inline-style"].level, RuleLevel::Off);
        assert_eq!(config.rules["wcag/h71"].level, RuleLevel::Error);
    }

    #[test]
    fn test_standard_turns_off_style_rules() {
        let config = Preset::Standard.config();
        assert_eq!(config.rules.len(), STANDARD_OFF.len());
        assert!(config.rules.values().all(|s| s.level == RuleLevel::Off));
    }
}

//! `hx-swap`: a swap style followed by `name:value` modifiers.

use super::time::is_time;
use super::vocab::HtmxVocabulary;
use super::Issue;

const MODIFIERS: &[&str] = &[
    "swap",
    "settle",
    "scroll",
    "show",
    "focus-scroll",
    "transition",
    "ignoretitle",
];

pub(crate) fn validate(vocab: &HtmxVocabulary, value: &str) -> Vec<Issue> {
    let mut tokens = value.split_whitespace().peekable();
    let Some(first) = tokens.peek() else {
        return Vec::new();
    };

    // A value may consist of modifiers only, e.g. "swap:1s".
    if !first.contains(':') {
        let style = first.to_ascii_lowercase();
        if vocab.is_newer_swap_style(&style) {
            return vec![Issue::warning(format!(
                "hx-swap value '{style}' is only available in htmx 4"
            ))];
        }
        if !vocab.is_swap_style(&style) {
            return vec![Issue::error(format!("invalid hx-swap value '{first}'"))];
        }
        tokens.next();
    }

    tokens.filter_map(validate_modifier).collect()
}

fn validate_modifier(token: &str) -> Option<Issue> {
    let Some((name, value)) = token.split_once(':') else {
        return Some(Issue::error(format!(
            "invalid hx-swap modifier '{token}' (missing colon)"
        )));
    };
    let name = name.to_ascii_lowercase();

    if !MODIFIERS.contains(&name.as_str()) {
        return Some(Issue::warning(format!("unknown hx-swap modifier '{name}'")));
    }

    match name.as_str() {
        "swap" | "settle" if !is_time(value) => Some(Issue::error(format!(
            "hx-swap {name} modifier requires a time value (e.g., '1s', '500ms')"
        ))),
        "scroll" | "show" if !is_scroll_target(value) => Some(Issue::warning(format!(
            "hx-swap {name} modifier value should be 'top', 'bottom', or a selector"
        ))),
        "focus-scroll" | "transition" if !is_bool(value) => Some(Issue::error(format!(
            "hx-swap {name} modifier should be 'true' or 'false'"
        ))),
        "ignoretitle" if !is_bool(value) => Some(Issue::error(
            "hx-swap ignoreTitle modifier should be 'true' or 'false'",
        )),
        _ => None,
    }
}

/// `top`, `bottom`, a selector, or `selector:top|bottom`.
fn is_scroll_target(value: &str) -> bool {
    let position = value.rsplit(':').next().unwrap_or(value);
    if value.contains(':') {
        return is_position(position);
    }
    is_position(value) || value.starts_with('#') || value.starts_with('.')
}

fn is_position(value: &str) -> bool {
    value.eq_ignore_ascii_case("top") || value.eq_ignore_ascii_case("bottom")
}

fn is_bool(value: &str) -> bool {
    value == "true" || value == "false"
}

#[cfg(test)]
mod tests {
    use super::*;
    use htmlint_core::{HtmxVersion, Severity};

    fn check(version: HtmxVersion, value: &str) -> Vec<(Severity, String)> {
        validate(HtmxVocabulary::for_version(version), value)
            .into_iter()
            .map(|i| (i.severity, i.message))
            .collect()
    }

    fn v2(value: &str) -> Vec<(Severity, String)> {
        check(HtmxVersion::V2, value)
    }

    #[test]
    fn test_valid_swap_values() {
        assert!(v2("innerHTML").is_empty());
        assert!(v2("outerHTML swap:1s settle:500ms").is_empty());
        assert!(v2("beforeend scroll:bottom show:#list:top").is_empty());
        assert!(v2("none focus-scroll:true transition:false ignoreTitle:true").is_empty());
        assert!(v2("  ").is_empty());
    }

    #[test]
    fn test_modifiers_without_style_are_accepted() {
        assert!(v2("swap:1s").is_empty());
        assert!(v2("settle:nope")
            .iter()
            .any(|(s, m)| *s == Severity::Error && m.contains("settle modifier")));
    }

    #[test]
    fn test_invalid_style_is_error() {
        assert_eq!(
            v2("sideways"),
            vec![(Severity::Error, "invalid hx-swap value 'sideways'".to_string())]
        );
    }

    #[test]
    fn test_missing_colon_is_error() {
        assert_eq!(
            v2("innerHTML notamodifier"),
            vec![(
                Severity::Error,
                "invalid hx-swap modifier 'notamodifier' (missing colon)".to_string()
            )]
        );
    }

    #[test]
    fn test_bad_time_is_error() {
        assert_eq!(
            v2("innerHTML swap:nottime"),
            vec![(
                Severity::Error,
                "hx-swap swap modifier requires a time value (e.g., '1s', '500ms')".to_string()
            )]
        );
    }

    #[test]
    fn test_unknown_modifier_is_warning() {
        assert_eq!(
            v2("innerHTML wobble:3"),
            vec![(Severity::Warning, "unknown hx-swap modifier 'wobble'".to_string())]
        );
    }

    #[test]
    fn test_scroll_and_boolean_modifiers() {
        assert_eq!(v2("innerHTML scroll:middle")[0].0, Severity::Warning);
        assert_eq!(v2("innerHTML focus-scroll:yes")[0].0, Severity::Error);
        assert_eq!(
            v2("innerHTML ignoreTitle:maybe")[0].1,
            "hx-swap ignoreTitle modifier should be 'true' or 'false'"
        );
    }

    #[test]
    fn test_v4_styles_warn_under_v2() {
        assert_eq!(
            v2("textContent swap:bad"),
            vec![(
                Severity::Warning,
                "hx-swap value 'textcontent' is only available in htmx 4".to_string()
            )]
        );
        assert_eq!(v2("append")[0].0, Severity::Warning);
        assert!(check(HtmxVersion::V4, "textContent").is_empty());
        assert!(check(HtmxVersion::V4, "prepend settle:10ms").is_empty());
    }
}

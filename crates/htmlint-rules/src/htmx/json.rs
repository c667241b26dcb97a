//! `hx-vals` and `hx-headers`: strict JSON.

use super::Issue;
use serde_json::Value;

pub(crate) fn validate(name: &str, value: &str) -> Vec<Issue> {
    let value = value.trim();
    if value.is_empty() {
        return Vec::new();
    }
    // Script expressions are evaluated by htmx at request time.
    if name == "hx-vals" && (value.starts_with("js:") || value.starts_with("javascript:")) {
        return Vec::new();
    }

    match serde_json::from_str::<Value>(value) {
        Ok(_) => Vec::new(),
        Err(err) => vec![Issue::error(format!("{name} contains invalid JSON: {err}"))],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use htmlint_core::Severity;

    #[test]
    fn test_valid_objects() {
        assert!(validate("hx-vals", r#"{"id": 1, "tags": ["a"]}"#).is_empty());
        assert!(validate("hx-headers", r#"{"X-Token": "abc"}"#).is_empty());
        assert!(validate("hx-vals", "").is_empty());
    }

    #[test]
    fn test_script_prefixes_skip_hx_vals_only() {
        assert!(validate("hx-vals", "js:{id: getId()}").is_empty());
        assert!(validate("hx-vals", "javascript:{id: 1}").is_empty());
        assert_eq!(validate("hx-headers", "js:{a: 1}").len(), 1);
    }

    #[test]
    fn test_invalid_json_names_position() {
        let issues = validate("hx-vals", "{id: 1}");
        assert_eq!(issues[0].severity, Severity::Error);
        assert!(issues[0].message.starts_with("hx-vals contains invalid JSON: "));
        assert!(issues[0].message.contains("line 1 column 2"));
    }

    #[test]
    fn test_any_json_value_is_accepted() {
        assert!(validate("hx-vals", "[1, 2]").is_empty());
        assert!(validate("hx-vals", "null").is_empty());
        assert!(validate("hx-headers", r#""x""#).is_empty());
    }
}

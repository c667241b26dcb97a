//! `hx-status:<code>`: htmx 4 per-status response handling.

use super::vocab::HtmxVocabulary;
use super::Issue;
use once_cell::sync::Lazy;
use regex::Regex;

/// `404`, `40x` or `4xx`.
#[allow(clippy::expect_used)]
static STATUS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[1-5](?:\d{2}|\dx|xx)$").expect("status pattern is valid"));

pub(crate) fn validate(vocab: &HtmxVocabulary, attr: &str) -> Vec<Issue> {
    if !vocab.is_v4() {
        return vec![Issue::warning(
            "hx-status:* attributes are only available in htmx 4",
        )];
    }

    let code = attr
        .strip_prefix("hx-status:")
        .or_else(|| attr.strip_prefix("hx-status-"))
        .unwrap_or_default();
    if code.is_empty() {
        return vec![Issue::error(
            "hx-status:* requires a status code (e.g., hx-status:404, hx-status:2xx)",
        )];
    }

    match check_code(code) {
        Ok(()) => Vec::new(),
        Err(reason) => vec![Issue::error(format!("invalid hx-status pattern: {reason}"))],
    }
}

fn check_code(code: &str) -> Result<(), String> {
    if !STATUS_PATTERN.is_match(code) {
        return Err(format!(
            "'{code}' is not a valid HTTP status code; use 3 digits (e.g., 404) or wildcard (e.g., 4xx)"
        ));
    }
    if let Ok(number) = code.parse::<u16>() {
        if !(100..=599).contains(&number) {
            return Err(format!(
                "'{code}' is outside valid HTTP status range (100-599)"
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use htmlint_core::{HtmxVersion, Severity};

    fn v4(attr: &str) -> Vec<Issue> {
        validate(HtmxVocabulary::for_version(HtmxVersion::V4), attr)
    }

    #[test]
    fn test_accepted_codes() {
        for attr in ["hx-status:404", "hx-status:2xx", "hx-status:40x", "hx-status-500", "hx-status:100"] {
            assert!(v4(attr).is_empty(), "{attr}");
        }
    }

    #[test]
    fn test_rejected_codes() {
        for code in ["99", "600", "6xx", "abc", "4xxx", "x04"] {
            let issues = v4(&format!("hx-status:{code}"));
            assert_eq!(issues.len(), 1, "{code}");
            assert_eq!(issues[0].severity, Severity::Error);
            assert!(issues[0].message.starts_with("invalid hx-status pattern: "));
        }
    }

    #[test]
    fn test_missing_code() {
        assert_eq!(
            v4("hx-status:")[0].message,
            "hx-status:* requires a status code (e.g., hx-status:404, hx-status:2xx)"
        );
    }

    #[test]
    fn test_v2_warns_without_checking() {
        let issues = validate(HtmxVocabulary::for_version(HtmxVersion::V2), "hx-status:abc");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
    }
}

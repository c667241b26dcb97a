//! Time values shared by `hx-swap` and `hx-trigger`.

use once_cell::sync::Lazy;
use regex::Regex;

#[allow(clippy::expect_used)]
static TIME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+(?:ms|s)$").expect("time pattern is valid"));

/// True for values like `1s` or `500ms`.
pub(crate) fn is_time(value: &str) -> bool {
    TIME_PATTERN.is_match(value)
}

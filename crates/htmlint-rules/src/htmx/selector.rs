//! `hx-include`: plausibility checks for CSS selectors.
//!
//! This is not a selector parser. It catches the mistakes that show up in
//! hand-written templates: unbalanced brackets, dangling combinators and
//! stray leading characters.

use super::Issue;

const KEYWORDS: &[&str] = &["closest", "next", "previous", "find"];
const COMBINATORS: &[char] = &['>', '+', '~'];

pub(crate) fn validate_include(value: &str) -> Vec<Issue> {
    let mut value = value.trim();
    if value == "this" {
        return Vec::new();
    }
    if let Some((keyword, rest)) = value.split_once(char::is_whitespace) {
        if KEYWORDS.contains(&keyword) {
            value = rest.trim();
        }
    } else if KEYWORDS.contains(&value) {
        return Vec::new();
    }

    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .find_map(|selector| check_selector(selector).err())
        .map(|reason| {
            vec![Issue::error(format!(
                "hx-include contains invalid CSS selector: {reason}"
            ))]
        })
        .unwrap_or_default()
}

/// Returns why `selector` is not a plausible CSS selector.
pub(crate) fn check_selector(selector: &str) -> Result<(), String> {
    let mut open = Vec::new();
    for ch in selector.chars() {
        match ch {
            '[' => open.push(']'),
            '(' => open.push(')'),
            ']' | ')' => {
                if open.pop() != Some(ch) {
                    return Err(format!("unbalanced brackets in '{selector}'"));
                }
            }
            _ => {}
        }
    }
    if !open.is_empty() {
        return Err(format!("unclosed bracket in '{selector}'"));
    }

    if let Some(last) = selector.chars().last().filter(|c| COMBINATORS.contains(c)) {
        return Err(format!("selector ends with combinator '{last}'"));
    }

    let Some(first) = selector.chars().next() else {
        return Ok(());
    };
    if COMBINATORS.contains(&first) {
        return Err(format!("selector starts with combinator '{first}'"));
    }
    if !(first.is_ascii_alphabetic() || "#.*[:_-".contains(first)) {
        return Err(format!("selector starts with invalid character '{first}'"));
    }

    if selector.contains("[]") {
        return Err("empty attribute selector '[]'".to_string());
    }
    if [">>", "++", "~~"].iter().any(|d| selector.contains(d)) {
        return Err("invalid double combinator".to_string());
    }

    Ok(())
}

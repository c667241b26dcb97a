//! `hx-trigger`: a comma-separated list of trigger specs.
//!
//! Each spec is an event name (not checked, custom events are legal), or one
//! of the special forms `every <time>` and `intersect`, followed by
//! modifiers and `[...]` filters.

use super::time::is_time;
use super::Issue;

const MODIFIERS: &[&str] = &[
    "once",
    "changed",
    "delay",
    "throttle",
    "from",
    "target",
    "consume",
    "queue",
    "root",
    "threshold",
];

const QUEUE_MODES: &[&str] = &["first", "last", "all", "none"];

/// Keywords after `from:` that take the next token as their selector.
const RELATIVE_KEYWORDS: &[&str] = &["closest", "find", "next", "previous"];

pub(crate) fn validate(value: &str) -> Vec<Issue> {
    split_specs(value)
        .into_iter()
        .flat_map(validate_spec)
        .collect()
}

/// Splits on commas that are not inside a `[...]` filter.
fn split_specs(value: &str) -> Vec<&str> {
    let mut specs = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, ch) in value.char_indices() {
        match ch {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                specs.push(&value[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    specs.push(&value[start..]);
    specs.into_iter().map(str::trim).filter(|s| !s.is_empty()).collect()
}

fn validate_spec(spec: &str) -> Vec<Issue> {
    let tokens: Vec<&str> = spec.split_whitespace().collect();
    let Some((event, mut modifiers)) = tokens.split_first() else {
        return Vec::new();
    };

    // The event may carry a filter that continues past the first token.
    let mut depth = bracket_depth(event);
    while depth > 0 {
        let Some((token, rest)) = modifiers.split_first() else {
            break;
        };
        depth += bracket_depth(token);
        modifiers = rest;
    }

    match event.to_ascii_lowercase().as_str() {
        "every" => validate_every(modifiers),
        "intersect" => validate_intersect(modifiers),
        _ => validate_modifiers(modifiers),
    }
}

fn validate_every(rest: &[&str]) -> Vec<Issue> {
    match rest.first() {
        None => vec![Issue::error(
            "hx-trigger 'every' requires a time value (e.g., 'every 1s')",
        )],
        Some(time) if !is_time(time) => vec![Issue::error(
            "hx-trigger 'every' requires a valid time value (e.g., '1s', '500ms')",
        )],
        Some(_) => validate_modifiers(&rest[1..]),
    }
}

fn validate_intersect(modifiers: &[&str]) -> Vec<Issue> {
    let mut issues = Vec::new();
    let mut tokens = modifiers.iter();
    while let Some(token) = tokens.next() {
        if token.starts_with('[') {
            skip_filter(token, &mut tokens);
            continue;
        }
        if token.starts_with("root:") || token.starts_with("threshold:") || *token == "once" {
            continue;
        }
        issues.push(Issue::warning(format!("unknown intersect modifier '{token}'")));
    }
    issues
}

fn validate_modifiers(modifiers: &[&str]) -> Vec<Issue> {
    let mut issues = Vec::new();
    let mut tokens = modifiers.iter();

    while let Some(token) = tokens.next() {
        if token.starts_with('[') {
            skip_filter(token, &mut tokens);
            continue;
        }

        let Some((name, value)) = token.split_once(':') else {
            if !MODIFIERS.contains(&token.to_ascii_lowercase().as_str()) {
                issues.push(Issue::warning(format!("unknown hx-trigger modifier '{token}'")));
            }
            continue;
        };

        let name = name.to_ascii_lowercase();
        if !MODIFIERS.contains(&name.as_str()) {
            issues.push(Issue::warning(format!("unknown hx-trigger modifier '{name}'")));
            continue;
        }

        match name.as_str() {
            "delay" | "throttle" if !is_time(value) => issues.push(Issue::error(format!(
                "hx-trigger {name} requires a time value (e.g., '1s', '500ms')"
            ))),
            "queue" if !QUEUE_MODES.contains(&value.to_ascii_lowercase().as_str()) => {
                issues.push(Issue::error(
                    "hx-trigger queue mode should be 'first', 'last', 'all', or 'none'",
                ));
            }
            // from:closest form, from:find .row
            "from" | "target" if RELATIVE_KEYWORDS.contains(&value) => {
                tokens.next();
            }
            _ => {}
        }
    }

    issues
}

/// Consumes the rest of a `[...]` filter that spans several tokens.
fn skip_filter(first: &str, tokens: &mut std::slice::Iter<'_, &str>) {
    let mut depth = bracket_depth(first);
    while depth > 0 {
        let Some(token) = tokens.next() else {
            return;
        };
        depth += bracket_depth(token);
    }
}

fn bracket_depth(token: &str) -> isize {
    token.chars().fold(0, |depth, ch| match ch {
        '[' => depth + 1,
        ']' => depth - 1,
        _ => depth,
    })
}

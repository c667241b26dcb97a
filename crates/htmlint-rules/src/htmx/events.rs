//! `hx-on:*` event names.
//!
//! Accepted forms: `hx-on:click`, `hx-on-click`, `hx-on:htmx:after-request`,
//! and the shorthands `hx-on::after-request` / `hx-on--after-request`, which
//! expand to the `htmx:` namespace.

use super::vocab::{
    HtmxVocabulary, DOM_EVENTS, V2_EVENTS, V4_EVENT_ACTIONS, V4_EVENT_PHASES,
    V4_STANDALONE_EVENTS,
};
use super::Issue;

/// Pulls the event name out of an `hx-on` attribute name.
fn event_name(attr: &str) -> &str {
    attr.strip_prefix("hx-on:")
        .or_else(|| attr.strip_prefix("hx-on-"))
        .unwrap_or_default()
}

pub(crate) fn validate(vocab: &HtmxVocabulary, attr: &str, custom_events: &[String]) -> Vec<Issue> {
    let raw = event_name(attr);
    if raw.is_empty() {
        return vec![Issue::error("hx-on:* requires an event name")];
    }

    let event = match raw.strip_prefix(':').or_else(|| raw.strip_prefix('-')) {
        Some(rest) => format!("htmx:{rest}"),
        None => raw.to_string(),
    };

    let lower = event.to_ascii_lowercase();
    if DOM_EVENTS.contains(&lower.as_str())
        || custom_events.iter().any(|c| c.eq_ignore_ascii_case(&event))
    {
        return Vec::new();
    }

    match lower.strip_prefix("htmx:") {
        Some(_) if vocab.is_v4() => validate_v4(&event),
        Some(name) => validate_v2(&event, name),
        None => vec![Issue::warning(format!(
            "unknown event '{event}' in hx-on:*; if this is a custom event, ignore this warning"
        ))],
    }
}

/// Flat `htmx:eventName` names, matched without regard to case or dashes.
fn validate_v2(event: &str, name: &str) -> Vec<Issue> {
    let wanted = fold(name);
    if V2_EVENTS.iter().any(|known| fold(known) == wanted) {
        return Vec::new();
    }
    vec![Issue::warning(format!("unknown htmx event '{event}'"))]
}

/// `htmx:phase:action[:sub-action]`, or `htmx:phase-action`.
fn validate_v4(event: &str) -> Vec<Issue> {
    let remainder = &event["htmx:".len()..];
    let (phase, action) = match remainder.split_once(':') {
        Some((phase, action)) => (phase, action),
        None => remainder.split_once('-').unwrap_or((remainder, "")),
    };

    if phase.is_empty() {
        return vec![Issue::error(format!("invalid htmx event format '{event}'"))];
    }

    let phase_lower = phase.to_ascii_lowercase();
    if !V4_EVENT_PHASES.contains(&phase_lower.as_str()) {
        if V4_STANDALONE_EVENTS.contains(&phase_lower.as_str()) {
            return Vec::new();
        }
        return vec![Issue::warning(format!(
            "unknown htmx 4 event phase '{phase}' in '{event}'"
        ))];
    }

    let action = action.split(':').next().unwrap_or_default();
    if action.is_empty() || V4_EVENT_ACTIONS.contains(&fold(action).as_str()) {
        return Vec::new();
    }
    vec![Issue::warning(format!(
        "unknown htmx 4 event action '{action}' in '{event}'"
    ))]
}

fn fold(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '-')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use htmlint_core::{HtmxVersion, Severity};

    fn check(version: HtmxVersion, attr: &str) -> Vec<Issue> {
        validate(HtmxVocabulary::for_version(version), attr, &[])
    }

    fn v2(attr: &str) -> Vec<Issue> {
        check(HtmxVersion::V2, attr)
    }

    fn v4(attr: &str) -> Vec<Issue> {
        check(HtmxVersion::V4, attr)
    }

    #[test]
    fn test_dom_events() {
        assert!(v2("hx-on:click").is_empty());
        assert!(v2("hx-on-keyup").is_empty());
        assert!(v4("hx-on:submit").is_empty());
    }

    #[test]
    fn test_empty_event_is_error() {
        let issues = v2("hx-on:");
        assert_eq!(issues[0].severity, Severity::Error);
        assert_eq!(issues[0].message, "hx-on:* requires an event name");
    }

    #[test]
    fn test_v2_htmx_events_ignore_case_and_dashes() {
        assert!(v2("hx-on:htmx:afterrequest").is_empty());
        assert!(v2("hx-on:htmx:after-request").is_empty());
        assert!(v2("hx-on::before-swap").is_empty());
        assert!(v2("hx-on--config-request").is_empty());
        assert!(v2("hx-on:htmx:xhr:progress").is_empty());
    }

    #[test]
    fn test_v2_unknown_htmx_event() {
        let issues = v2("hx-on:htmx:afterfoo");
        assert_eq!(issues[0].severity, Severity::Warning);
        assert_eq!(issues[0].message, "unknown htmx event 'htmx:afterfoo'");
    }

    #[test]
    fn test_v4_phase_and_action() {
        assert!(v4("hx-on:htmx:after:request").is_empty());
        assert!(v4("hx-on::before:swap").is_empty());
        assert!(v4("hx-on::after-request").is_empty());
        assert!(v4("hx-on:htmx:before:viewtransition").is_empty());
        assert!(v4("hx-on:htmx:error").is_empty());
        assert!(v4("hx-on:htmx:load").is_empty());
    }

    #[test]
    fn test_v4_unknown_parts() {
        assert_eq!(
            v4("hx-on:htmx:during:request")[0].message,
            "unknown htmx 4 event phase 'during' in 'htmx:during:request'"
        );
        assert_eq!(
            v4("hx-on:htmx:after:teleport")[0].message,
            "unknown htmx 4 event action 'teleport' in 'htmx:after:teleport'"
        );
        assert_eq!(v4("hx-on:htmx::request")[0].severity, Severity::Error);
    }

    #[test]
    fn test_unknown_event_and_custom_events() {
        let issues = v2("hx-on:item-added");
        assert_eq!(
            issues[0].message,
            "unknown event 'item-added' in hx-on:*; if this is a custom event, ignore this warning"
        );

        let custom = vec!["Item-Added".to_string()];
        let vocab = HtmxVocabulary::for_version(HtmxVersion::V2);
        assert!(validate(vocab, "hx-on:item-added", &custom).is_empty());
    }
}

//! Request attributes on submit buttons inside a form.
//!
//! A click on such a button sends the htmx request directly, skipping the
//! form's own submit handling and its constraint validation.

use super::Issue;
use htmlint_parser::{Document, Element, Node};

const REQUEST_ATTRIBUTES: &[&str] = &["hx-get", "hx-post", "hx-put", "hx-patch", "hx-delete"];

pub(crate) fn check(doc: &Document, node: &Node, element: &Element) -> Option<Issue> {
    if !is_submit_control(element) {
        return None;
    }

    let request = element
        .attrs
        .iter()
        .rev()
        .find(|a| REQUEST_ATTRIBUTES.contains(&request_name(&a.name)))?;

    if !doc.has_ancestor(node.id, "form") {
        return None;
    }

    let name = request_name(&request.name);
    Some(
        Issue::warning(format!(
            "{name} on submit button inside form may bypass form validation; consider moving to the form element"
        ))
        .with_suggestion(format!(
            "move {name} to the enclosing <form>, or set type=\"button\" if this button should not submit"
        )),
    )
}

fn request_name(name: &str) -> &str {
    name.strip_prefix("data-").unwrap_or(name)
}

fn is_submit_control(element: &Element) -> bool {
    let kind = element.attr_value("type").map(str::to_ascii_lowercase);
    match element.name.as_str() {
        "button" => kind.as_deref().map_or(true, |t| t.is_empty() || t == "submit"),
        "input" => kind.as_deref() == Some("submit"),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issues(html: &str) -> Vec<Issue> {
        let doc = htmlint_parser::parse(html).unwrap();
        doc.elements()
            .filter_map(|(node, el)| check(&doc, node, el))
            .collect()
    }

    #[test]
    fn test_submit_button_in_form() {
        let found = issues(r#"<form><button hx-post="/save">Save</button></form>"#);
        assert_eq!(found.len(), 1);
        assert_eq!(
            found[0].message,
            "hx-post on submit button inside form may bypass form validation; consider moving to the form element"
        );
        assert!(found[0].suggestion.is_some());
    }

    #[test]
    fn test_input_submit_and_nested_form() {
        let found = issues(
            r#"<form><div><input type="submit" hx-delete="/x"></div></form>"#,
        );
        assert_eq!(found.len(), 1);
        assert!(found[0].message.starts_with("hx-delete"));
    }

    #[test]
    fn test_not_reported() {
        assert!(issues(r#"<form><button type="button" hx-post="/x">A</button></form>"#).is_empty());
        assert!(issues(r#"<button hx-post="/x">outside</button>"#).is_empty());
        assert!(issues(r#"<form><button>plain</button></form>"#).is_empty());
        assert!(issues(r#"<form><input type="text" hx-get="/x"></form>"#).is_empty());
    }
}

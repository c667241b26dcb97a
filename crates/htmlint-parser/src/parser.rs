use crate::ast::{Document, Element, NodeId, NodeKind};
use crate::error::{ParseError, ParseResult};
use crate::lexer::{Lexer, Token, TokenKind};

/// Elements that never have content or an end tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Block elements whose start tag closes an open `<p>`.
const P_CLOSERS: &[&str] = &[
    "address",
    "article",
    "aside",
    "blockquote",
    "div",
    "dl",
    "fieldset",
    "footer",
    "form",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "header",
    "hr",
    "main",
    "nav",
    "ol",
    "p",
    "pre",
    "section",
    "table",
    "ul",
];

/// Parses a document from a string.
///
/// # Errors
///
/// Returns an error when a comment, template action, tag or quoted
/// attribute value is never terminated. Structural problems such as
/// unclosed elements or stray end tags are tolerated.
pub fn parse(source: &str) -> ParseResult<Document> {
    let tokens = Lexer::new(source).tokenize()?;
    let mut builder = TreeBuilder::new();
    for token in tokens {
        builder.push(token);
    }
    Ok(builder.finish())
}

/// Parses a document from raw bytes.
///
/// # Errors
///
/// Returns [`ParseError::InvalidUtf8`] if the bytes are not UTF-8, or any
/// error [`parse`] returns.
pub fn parse_bytes(bytes: &[u8]) -> ParseResult<Document> {
    let source = std::str::from_utf8(bytes).map_err(|e| ParseError::InvalidUtf8 {
        offset: e.valid_up_to(),
    })?;
    parse(source)
}

fn implicitly_closes(open: &str, new: &str) -> bool {
    match open {
        "li" => new == "li",
        "option" => matches!(new, "option" | "optgroup"),
        "dt" | "dd" => matches!(new, "dt" | "dd"),
        "tr" => new == "tr",
        "td" | "th" => matches!(new, "td" | "th" | "tr"),
        "p" => P_CLOSERS.contains(&new),
        _ => false,
    }
}

struct TreeBuilder {
    doc: Document,
    open: Vec<NodeId>,
    fragment: bool,
}

impl TreeBuilder {
    fn new() -> Self {
        Self {
            doc: Document::new(),
            open: Vec::new(),
            fragment: true,
        }
    }

    fn current(&self) -> NodeId {
        self.open.last().copied().unwrap_or(NodeId(0))
    }

    fn push(&mut self, token: Token) {
        let parent = self.current();
        match token.kind {
            TokenKind::Text(text) => {
                self.doc.append(parent, NodeKind::Text(text), token.span);
            }
            TokenKind::Template(action) => {
                self.doc.append(parent, NodeKind::Template(action), token.span);
            }
            TokenKind::Comment(text) => {
                self.doc.append(parent, NodeKind::Comment(text), token.span);
            }
            TokenKind::Doctype(text) => {
                self.fragment = false;
                self.doc.append(parent, NodeKind::Doctype(text), token.span);
            }
            TokenKind::StartTag {
                name,
                attrs,
                self_closing,
            } => {
                if name == "html" {
                    self.fragment = false;
                }
                self.close_implied(&name);
                let leaf = self_closing || VOID_ELEMENTS.contains(&name.as_str());
                let element = Element {
                    name,
                    attrs,
                    self_closing,
                };
                let id = self
                    .doc
                    .append(self.current(), NodeKind::Element(element), token.span);
                if !leaf {
                    self.open.push(id);
                }
            }
            TokenKind::EndTag(name) => self.close(&name),
        }
    }

    fn close_implied(&mut self, new: &str) {
        while let Some(&top) = self.open.last() {
            let closes = self
                .doc
                .get(top)
                .and_then(|n| n.as_element())
                .is_some_and(|el| implicitly_closes(&el.name, new));
            if !closes {
                break;
            }
            self.open.pop();
        }
    }

    /// Pops up to and including the nearest open element named `name`.
    /// End tags with no matching open element are ignored.
    fn close(&mut self, name: &str) {
        let doc = &self.doc;
        if let Some(pos) = self
            .open
            .iter()
            .rposition(|id| doc.get(*id).is_some_and(|n| n.is_element(name)))
        {
            self.open.truncate(pos);
        }
    }

    fn finish(mut self) -> Document {
        self.doc.set_fragment(self.fragment);
        self.doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn child_names(doc: &Document, id: NodeId) -> Vec<String> {
        doc.get(id)
            .unwrap()
            .children
            .iter()
            .filter_map(|c| doc.get(*c).and_then(|n| n.as_element()))
            .map(|e| e.name.clone())
            .collect()
    }

    fn find(doc: &Document, tag: &str) -> NodeId {
        doc.elements()
            .find(|(_, el)| el.name == tag)
            .map(|(n, _)| n.id)
            .unwrap()
    }

    #[test]
    fn test_full_document_is_not_fragment() {
        let doc = parse("<!DOCTYPE html><html lang=\"en\"><body></body></html>").unwrap();
        assert!(!doc.is_fragment());
        let doc = parse("<html><body></body></html>").unwrap();
        assert!(!doc.is_fragment());
    }

    #[test]
    fn test_partial_template_is_fragment() {
        let doc = parse("{{ define \"row\" }}<tr><td>{{ .X }}</td></tr>{{ end }}").unwrap();
        assert!(doc.is_fragment());
        assert_eq!(doc.elements().count(), 2);
    }

    #[test]
    fn test_unclosed_template_keeps_later_markup() {
        let doc = parse("<p>{{ .Name </p>\n<img src=a>").unwrap();
        assert!(!doc.has_ancestor(find(&doc, "img"), "p"));
    }

    #[test]
    fn test_void_elements_do_not_nest() {
        let doc = parse("<div><img src=a><br><span>x</span></div>").unwrap();
        let div = find(&doc, "div");
        assert_eq!(child_names(&doc, div), vec!["img", "br", "span"]);
    }

    #[test]
    fn test_implicit_close_of_list_items() {
        let doc = parse("<ul><li>one<li>two</ul>").unwrap();
        let ul = find(&doc, "ul");
        assert_eq!(child_names(&doc, ul), vec!["li", "li"]);
    }

    #[test]
    fn test_table_cells_close_on_new_row() {
        let doc = parse("<table><tr><td>a<td>b<tr><td>c</table>").unwrap();
        let table = find(&doc, "table");
        assert_eq!(child_names(&doc, table), vec!["tr", "tr"]);
    }

    #[test]
    fn test_paragraph_closed_by_block() {
        let doc = parse("<p>text<div>block</div>").unwrap();
        assert_eq!(child_names(&doc, NodeId(0)), vec!["p", "div"]);
    }

    #[test]
    fn test_stray_end_tag_is_ignored() {
        let doc = parse("<div></span><p>x</p></div>").unwrap();
        let div = find(&doc, "div");
        assert_eq!(child_names(&doc, div), vec!["p"]);
    }

    #[test]
    fn test_unclosed_elements_are_tolerated() {
        let doc = parse("<form><div><button>Go").unwrap();
        let button = find(&doc, "button");
        assert!(doc.has_ancestor(button, "form"));
    }

    #[test]
    fn test_end_tag_closes_intervening_elements() {
        let doc = parse("<form><div><span>x</form><button>b</button>").unwrap();
        let button = find(&doc, "button");
        assert!(!doc.has_ancestor(button, "form"));
    }

    #[test]
    fn test_parse_bytes_rejects_invalid_utf8() {
        let err = parse_bytes(b"<p>\xff</p>").unwrap_err();
        assert_eq!(err, ParseError::InvalidUtf8 { offset: 3 });
    }

    #[test]
    fn test_node_positions() {
        let doc = parse("<div>\n  <img src=x>\n</div>").unwrap();
        let img = doc.get(find(&doc, "img")).unwrap();
        assert_eq!((img.line(), img.column()), (2, 3));
    }
}

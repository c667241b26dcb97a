//! Tolerant HTML parser for htmlint.
//!
//! Parses HTML documents and partial templates that contain `{{ ... }}`
//! actions into an arena-backed tree. The parser keeps duplicate
//! attributes, records the position of every node, and only fails when it
//! cannot find the end of a comment, tag or quoted value. A `{{` that never
//! closes is kept as text.
//!
//! # Example
//!
//! ```
//! use htmlint_parser::parse;
//!
//! let doc = parse(r#"<form><button hx-post="/save">Save</button></form>"#).unwrap();
//! let (button, _) = doc.elements().find(|(_, el)| el.name == "button").unwrap();
//! assert!(doc.has_ancestor(button.id, "form"));
//! assert!(doc.is_fragment());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod ast;
pub mod error;
pub mod lexer;
mod parser;

pub use ast::{Attribute, Document, Element, Node, NodeId, NodeKind, Position, Span};
pub use error::{ParseError, ParseResult};
pub use parser::{parse, parse_bytes};

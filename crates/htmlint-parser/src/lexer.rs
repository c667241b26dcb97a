use crate::ast::{Attribute, Position, Span};
use crate::error::{ParseError, ParseResult};

/// Elements whose content is raw text up to the matching end tag.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style", "textarea", "title"];

/// Token types for HTML with embedded template actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// Character data between tags.
    Text(String),
    /// A `{{ ... }}` action in text content (inner text, trimmed).
    Template(String),
    /// `<!-- ... -->` contents.
    Comment(String),
    /// `<!DOCTYPE ...>` contents after the keyword.
    Doctype(String),
    /// `<name attr=value ...>` or `<name ... />`.
    StartTag {
        /// Lower-cased tag name.
        name: String,
        /// Attributes in source order.
        attrs: Vec<Attribute>,
        /// Whether the tag ended with `/>`.
        self_closing: bool,
    },
    /// `</name>`, name lower-cased.
    EndTag(String),
}

/// A token with its position in the source.
#[derive(Debug, Clone)]
pub struct Token {
    /// The kind and payload of this token.
    pub kind: TokenKind,
    /// Source span of the token.
    pub span: Span,
}

/// Lexer for HTML documents that may contain `{{ ... }}` template actions.
///
/// Template actions are opaque: inside tags and attribute values they are
/// skipped as a unit, so quotes and `>` inside an action never end the
/// surrounding construct.
pub struct Lexer<'a> {
    source: &'a str,
    offset: usize,
    line: usize,
    column: usize,
    raw_text_end: Option<String>,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source text.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            offset: 0,
            line: 1,
            column: 1,
            raw_text_end: None,
        }
    }

    /// Consumes the whole input.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParseError`] encountered.
    pub fn tokenize(mut self) -> ParseResult<Vec<Token>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    fn position(&self) -> Position {
        Position::new(self.line, self.column, self.offset)
    }

    fn rest(&self) -> &'a str {
        &self.source[self.offset..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn starts_with(&self, s: &str) -> bool {
        self.rest().starts_with(s)
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.offset += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn advance_by(&mut self, bytes: usize) {
        let end = self.offset + bytes;
        while self.offset < end {
            if self.advance().is_none() {
                break;
            }
        }
    }

    fn take_while<P: Fn(char) -> bool>(&mut self, pred: P) -> &'a str {
        let start = self.offset;
        while let Some(ch) = self.peek() {
            if !pred(ch) {
                break;
            }
            self.advance();
        }
        &self.source[start..self.offset]
    }

    /// True if the input at the cursor opens a tag, end tag, comment or declaration.
    fn at_markup(&self) -> bool {
        let rest = self.rest();
        let starts_alpha = |s: &str| s.starts_with(|c: char| c.is_ascii_alphabetic());
        rest.starts_with("<!")
            || (rest.starts_with("</") && starts_alpha(&rest[2..]))
            || (rest.starts_with('<') && starts_alpha(&rest[1..]))
    }

    /// Returns the next token, or `None` at end of input.
    ///
    /// # Errors
    ///
    /// Returns an error for constructs that never terminate.
    pub fn next_token(&mut self) -> ParseResult<Option<Token>> {
        if let Some(end_tag) = self.raw_text_end.take() {
            if let Some(token) = self.lex_raw_text(&end_tag) {
                return Ok(Some(token));
            }
        }

        if self.offset >= self.source.len() {
            return Ok(None);
        }

        let start = self.position();
        let kind = if self.starts_with("{{") {
            self.lex_template()
        } else if self.starts_with("<!--") {
            self.lex_comment()?
        } else if self.starts_with("<!") {
            self.lex_declaration()?
        } else if self.at_markup() && self.starts_with("</") {
            self.lex_end_tag()?
        } else if self.at_markup() {
            self.lex_start_tag()?
        } else {
            self.lex_text()
        };

        Ok(Some(Token {
            kind,
            span: Span::new(start, self.position()),
        }))
    }

    fn lex_raw_text(&mut self, end_tag: &str) -> Option<Token> {
        let rest = self.rest();
        let closing = format!("</{end_tag}");
        let len = rest
            .to_ascii_lowercase()
            .find(&closing)
            .unwrap_or(rest.len());
        if len == 0 {
            return None;
        }

        let start = self.position();
        let text = rest[..len].to_string();
        self.advance_by(len);
        Some(Token {
            kind: TokenKind::Text(text),
            span: Span::new(start, self.position()),
        })
    }

    /// Lexes a `{{ ... }}` action in text content.
    ///
    /// A `{{` that never closes is plain text up to the next markup or end
    /// of input.
    fn lex_template(&mut self) -> TokenKind {
        let start = self.offset;
        if self.skip_template() {
            let inner = self.source[start + 2..self.offset - 2].trim().to_string();
            return TokenKind::Template(inner);
        }
        while let Some(ch) = self.peek() {
            if ch == '<' && self.at_markup() {
                break;
            }
            self.advance();
        }
        TokenKind::Text(self.source[start..self.offset].to_string())
    }

    /// Skips a template action at the cursor. Returns false, having consumed
    /// only the `{{`, when there is no closing `}}`.
    fn skip_template(&mut self) -> bool {
        match self.rest()[2..].find("}}") {
            Some(end) => {
                self.advance_by(end + 4);
                true
            }
            None => {
                self.advance_by(2);
                false
            }
        }
    }

    fn lex_comment(&mut self) -> ParseResult<TokenKind> {
        let start = self.position();
        let rest = self.rest();
        let Some(end) = rest[4..].find("-->") else {
            return Err(ParseError::UnterminatedComment { position: start });
        };
        let inner = rest[4..4 + end].to_string();
        self.advance_by(end + 7);
        Ok(TokenKind::Comment(inner))
    }

    fn lex_declaration(&mut self) -> ParseResult<TokenKind> {
        let start = self.position();
        let rest = self.rest();
        let Some(end) = rest[2..].find('>') else {
            let name = rest[2..]
                .split(|c: char| c.is_whitespace() || c == '>')
                .next()
                .unwrap_or_default();
            return Err(ParseError::UnterminatedTag {
                name: format!("!{name}"),
                position: start,
            });
        };
        let inner = &rest[2..2 + end];
        self.advance_by(end + 3);

        let is_doctype = inner
            .get(..7)
            .is_some_and(|kw| kw.eq_ignore_ascii_case("doctype"));
        if is_doctype {
            Ok(TokenKind::Doctype(inner[7..].trim().to_string()))
        } else {
            Ok(TokenKind::Comment(inner.to_string()))
        }
    }

    fn lex_end_tag(&mut self) -> ParseResult<TokenKind> {
        let start = self.position();
        self.advance_by(2);
        let name = self.take_while(|c| !c.is_whitespace() && c != '>');
        let Some(end) = self.rest().find('>') else {
            return Err(ParseError::UnterminatedTag {
                name: format!("/{name}"),
                position: start,
            });
        };
        self.advance_by(end + 1);
        Ok(TokenKind::EndTag(name.to_ascii_lowercase()))
    }

    fn lex_start_tag(&mut self) -> ParseResult<TokenKind> {
        let start = self.position();
        self.advance();
        let raw_name = self.take_while(|c| !c.is_whitespace() && c != '>' && c != '/');
        let name = raw_name.to_ascii_lowercase();

        let mut attrs = Vec::new();
        let mut self_closing = false;
        loop {
            self.take_while(char::is_whitespace);
            if self.starts_with("{{") {
                self.skip_template();
                continue;
            }
            match self.peek() {
                None => {
                    return Err(ParseError::UnterminatedTag {
                        name: raw_name.to_string(),
                        position: start,
                    })
                }
                Some('>') => {
                    self.advance();
                    break;
                }
                Some('/') => {
                    self.advance();
                    if self.peek() == Some('>') {
                        self.advance();
                        self_closing = true;
                        break;
                    }
                }
                Some(_) => attrs.push(self.lex_attribute()?),
            }
        }

        if !self_closing && RAW_TEXT_ELEMENTS.contains(&name.as_str()) {
            self.raw_text_end = Some(name.clone());
        }

        Ok(TokenKind::StartTag {
            name,
            attrs,
            self_closing,
        })
    }

    fn lex_attribute(&mut self) -> ParseResult<Attribute> {
        let start = self.position();
        let name = self.take_while(|c| !c.is_whitespace() && c != '=' && c != '>' && c != '/');
        let name_end = self.position();
        self.take_while(char::is_whitespace);

        let mut value = String::new();
        if self.peek() == Some('=') {
            self.advance();
            self.take_while(char::is_whitespace);
            value = self.lex_attribute_value(name)?;
        }

        Ok(Attribute {
            name: name.to_ascii_lowercase(),
            value,
            span: Span::new(start, name_end),
        })
    }

    fn lex_attribute_value(&mut self, name: &str) -> ParseResult<String> {
        match self.peek() {
            Some(quote @ ('"' | '\'')) => {
                let open = self.position();
                self.advance();
                let start = self.offset;
                loop {
                    if self.starts_with("{{") {
                        self.skip_template();
                        continue;
                    }
                    match self.peek() {
                        None => {
                            return Err(ParseError::UnterminatedAttributeValue {
                                name: name.to_string(),
                                position: open,
                            })
                        }
                        Some(c) if c == quote => {
                            let value = self.source[start..self.offset].to_string();
                            self.advance();
                            return Ok(value);
                        }
                        Some(_) => {
                            self.advance();
                        }
                    }
                }
            }
            _ => {
                let start = self.offset;
                loop {
                    if self.starts_with("{{") {
                        self.skip_template();
                        continue;
                    }
                    match self.peek() {
                        Some(c) if !c.is_whitespace() && c != '>' => {
                            self.advance();
                        }
                        _ => break,
                    }
                }
                Ok(self.source[start..self.offset].to_string())
            }
        }
    }

    fn lex_text(&mut self) -> TokenKind {
        let start = self.offset;
        while let Some(ch) = self.peek() {
            if self.offset > start && (self.starts_with("{{") || (ch == '<' && self.at_markup())) {
                break;
            }
            self.advance();
        }
        TokenKind::Text(self.source[start..self.offset].to_string())
    }
}

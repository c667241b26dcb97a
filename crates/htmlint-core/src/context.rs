//! Context types for rule execution.

use crate::types::Location;
use htmlint_parser::{Position, Span};
use std::path::Path;

/// Context provided to rules for the file being checked.
#[derive(Debug, Clone, Copy)]
pub struct FileContext<'a> {
    /// Path of the file as it will appear in findings.
    pub path: &'a Path,
    /// File contents as a string.
    pub content: &'a str,
}

impl<'a> FileContext<'a> {
    /// Creates a new file context.
    #[must_use]
    pub fn new(path: &'a Path, content: &'a str) -> Self {
        Self { path, content }
    }

    /// Location of a parser position in this file.
    #[must_use]
    pub fn location(&self, position: Position) -> Location {
        Location::from_position(self.path.to_path_buf(), position)
    }

    /// Location covering a parser span in this file.
    #[must_use]
    pub fn span_location(&self, span: Span) -> Location {
        self.location(span.start).with_span(span.start.offset, span.len())
    }

    /// Location for a 1-indexed line and column, with the byte offset filled in.
    #[must_use]
    pub fn location_at(&self, line: usize, column: usize) -> Location {
        Location::new(self.path.to_path_buf(), line, column)
            .with_span(self.offset_for(line, column), 0)
    }

    /// Calculates byte offset for a given line and column.
    ///
    /// # Arguments
    ///
    /// * `line` - 1-indexed line number
    /// * `column` - 1-indexed column number
    ///
    /// # Returns
    ///
    /// Byte offset from the start of the file, or 0 if out of bounds.
    #[must_use]
    pub fn offset_for(&self, line: usize, column: usize) -> usize {
        if line == 0 {
            return 0;
        }

        let mut offset = 0;
        for (i, line_content) in self.content.split('\n').enumerate() {
            if i + 1 == line {
                return offset + column.saturating_sub(1);
            }
            offset += line_content.len() + 1;
        }

        0
    }

    /// Line and column (1-indexed) of a byte offset.
    #[must_use]
    pub fn line_column(&self, offset: usize) -> (usize, usize) {
        let before = self.content.get(..offset).unwrap_or(self.content);
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let column = before[line_start..].chars().count() + 1;
        (line, column)
    }
}

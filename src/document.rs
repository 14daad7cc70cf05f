//! Host document interfaces
//!
//! The reflow core never touches a concrete buffer. It reads lines through
//! [`LineSource`] and edits through [`Document`], so an editor can plug in its
//! own rope or gap buffer. [`InMemoryDocument`] is the plain `Vec<String>`
//! implementation used by the command-line tool and the tests.

use crate::paragraph::ParagraphRange;
use crate::utils::{LineEnding, line_spans};
use serde::Serialize;
use std::borrow::Cow;
use std::collections::VecDeque;

/// Maximum number of undo steps kept by [`InMemoryDocument`]
const MAX_UNDO_STEPS: usize = 100;

/// Read-only, line-indexed access to text
pub trait LineSource {
    /// Number of lines
    fn line_count(&self) -> usize;

    /// Text of line `index` without its terminator.
    /// Returns an empty string for indices past the last line.
    fn line(&self, index: usize) -> Cow<'_, str>;
}

impl<S: AsRef<str>> LineSource for [S] {
    fn line_count(&self) -> usize {
        self.len()
    }

    fn line(&self, index: usize) -> Cow<'_, str> {
        Cow::Borrowed(self.get(index).map_or("", |line| line.as_ref()))
    }
}

impl<S: AsRef<str>> LineSource for Vec<S> {
    fn line_count(&self) -> usize {
        self.as_slice().line_count()
    }

    fn line(&self, index: usize) -> Cow<'_, str> {
        self.as_slice().line(index)
    }
}

/// Cursor position: zero-based line and a column counted in characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Cursor {
    pub line: usize,
    pub column: usize,
}

impl Cursor {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Errors reported by a [`Document`] when an edit cannot be applied
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocumentError {
    /// The replaced line range does not fit the document
    #[error("Line range {begin}..{end} is out of bounds for a document of {line_count} lines")]
    RangeOutOfBounds { begin: usize, end: usize, line_count: usize },

    /// The cursor was placed on a line that does not exist
    #[error("Cursor line {line} is out of bounds for a document of {line_count} lines")]
    CursorOutOfBounds { line: usize, line_count: usize },
}

/// An editable document with a cursor
pub trait Document: LineSource {
    fn cursor(&self) -> Cursor;

    fn set_cursor(&mut self, cursor: Cursor) -> Result<(), DocumentError>;

    /// Replace the lines in `range` with `text` as one undoable edit.
    ///
    /// `text` may span several lines separated by `\n`. The terminator after
    /// the last replaced line is kept.
    fn replace_lines(&mut self, range: ParagraphRange, text: &str) -> Result<(), DocumentError>;

    fn cursor_line(&self) -> usize {
        self.cursor().line
    }
}

#[derive(Debug, Clone)]
struct UndoStep {
    lines: Vec<String>,
    cursor: Cursor,
}

/// A document held as a vector of lines
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocument {
    lines: Vec<String>,
    cursor: Cursor,
    line_ending: LineEnding,
    trailing_newline: bool,
    undo_stack: VecDeque<UndoStep>,
}

impl InMemoryDocument {
    /// Build a document from raw text, remembering its line ending and
    /// whether it ended with a newline
    pub fn from_text(text: &str) -> Self {
        let lines = line_spans(text).into_iter().map(|span| text[span].to_string()).collect();
        Self {
            lines,
            cursor: Cursor::default(),
            line_ending: LineEnding::detect(text),
            trailing_newline: text.ends_with('\n'),
            undo_stack: VecDeque::new(),
        }
    }

    /// Build a document from already split lines, joined with `\n`
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Same document with the cursor moved, for building fixtures
    pub fn with_cursor(mut self, cursor: Cursor) -> Result<Self, DocumentError> {
        self.set_cursor(cursor)?;
        Ok(self)
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// Full text with the original line ending and trailing newline state
    pub fn text(&self) -> String {
        let mut text = self.lines.join(self.line_ending.as_str());
        if self.trailing_newline && !self.lines.is_empty() {
            text.push_str(self.line_ending.as_str());
        }
        text
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Revert the most recent edit, restoring its lines and cursor.
    /// Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.undo_stack.pop_back() {
            Some(step) => {
                self.lines = step.lines;
                self.cursor = step.cursor;
                true
            }
            None => false,
        }
    }

    fn push_undo(&mut self) {
        self.undo_stack.push_back(UndoStep {
            lines: self.lines.clone(),
            cursor: self.cursor,
        });
        if self.undo_stack.len() > MAX_UNDO_STEPS {
            self.undo_stack.pop_front();
        }
    }
}

impl LineSource for InMemoryDocument {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line(&self, index: usize) -> Cow<'_, str> {
        self.lines.as_slice().line(index)
    }
}

impl Document for InMemoryDocument {
    fn cursor(&self) -> Cursor {
        self.cursor
    }

    fn set_cursor(&mut self, cursor: Cursor) -> Result<(), DocumentError> {
        // An empty document still has one (empty) line to put the cursor on
        let line_count = self.lines.len().max(1);
        if cursor.line >= line_count {
            return Err(DocumentError::CursorOutOfBounds {
                line: cursor.line,
                line_count: self.lines.len(),
            });
        }
        let line_len = self.lines.get(cursor.line).map_or(0, |line| line.chars().count());
        self.cursor = Cursor::new(cursor.line, cursor.column.min(line_len));
        Ok(())
    }

    fn replace_lines(&mut self, range: ParagraphRange, text: &str) -> Result<(), DocumentError> {
        if range.begin > range.end || range.end > self.lines.len() {
            return Err(DocumentError::RangeOutOfBounds {
                begin: range.begin,
                end: range.end,
                line_count: self.lines.len(),
            });
        }

        self.push_undo();
        let replacement: Vec<String> = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
            .collect();
        let inserted = replacement.len();
        self.lines.splice(range.lines(), replacement);

        // The cursor sticks to the end of the inserted text when it was inside
        // the replaced lines, and shifts with the text after them.
        if range.contains(self.cursor.line) {
            let last = range.begin + inserted - 1;
            self.cursor = Cursor::new(last, self.lines[last].chars().count());
        } else if self.cursor.line >= range.end && !range.is_empty() {
            self.cursor.line = self.cursor.line + inserted - range.len();
        }
        log::debug!(
            "[reflow-document] Replaced lines {}..{} ({} lines now)",
            range.begin,
            range.end,
            self.lines.len()
        );
        Ok(())
    }
}

pub mod config;
pub mod document;
pub mod exit_codes;
pub mod paragraph;
pub mod types;
pub mod utils;

pub use crate::document::{Cursor, Document, DocumentError, InMemoryDocument, LineSource};
pub use crate::paragraph::{ParagraphRange, locate_paragraph};
pub use crate::types::WrapWidth;
pub use crate::utils::prefix::{PrefixSplit, split_line};
pub use crate::utils::text_reflow::{ParagraphReflow, ReflowOptions, fill_lines, fill_text, reflow_paragraph_at_line};

use crate::utils::char_len;
use serde::Serialize;

/// What a reflow did to the document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum ReflowOutcome {
    /// The cursor was not on a paragraph; the document was not touched
    Unchanged,
    /// The paragraph was replaced
    Reflowed {
        /// Lines replaced, in the original document
        range: ParagraphRange,
        /// Lines holding the filled paragraph afterwards
        new_range: ParagraphRange,
        /// Cursor position after the edit
        cursor: Cursor,
        /// False when the filled text equals the original lines
        changed: bool,
    },
}

impl ReflowOutcome {
    pub fn is_unchanged(&self) -> bool {
        matches!(self, ReflowOutcome::Unchanged)
    }
}

/// Reflow the paragraph under the document's cursor
///
/// Locates the paragraph touching the cursor line, fills it to
/// `options.wrap_width` and replaces it in a single edit. A paragraph that
/// already fills to the same text is left alone, cursor included. When
/// `options.restore_cursor` is set the cursor is moved to an approximate
/// equivalent of its old position inside the new text.
pub fn reflow_current_paragraph<D: Document + ?Sized>(
    doc: &mut D,
    options: &ReflowOptions,
) -> Result<ReflowOutcome, DocumentError> {
    let cursor_line = doc.cursor_line();
    let range = locate_paragraph(&*doc, cursor_line);
    if range.is_empty() {
        return Ok(ReflowOutcome::Unchanged);
    }

    let cursor = doc.cursor();
    let lines: Vec<String> = range.lines().map(|index| doc.line(index).into_owned()).collect();
    let filled = fill_lines(&lines, options);
    if filled == lines.join("\n") {
        log::debug!(
            "[reflow] Lines {}..{} already fit width {}",
            range.begin,
            range.end,
            options.wrap_width
        );
        return Ok(ReflowOutcome::Reflowed {
            range,
            new_range: range,
            cursor,
            changed: false,
        });
    }

    // Measured before the edit, the lines are gone afterwards
    let cursor_offset = options
        .restore_cursor
        .then(|| pre_cursor_offset(&lines, cursor_line - range.begin, cursor.column, options));

    doc.replace_lines(range, &filled)?;

    let new_range = ParagraphRange::new(range.begin, range.begin + filled.split('\n').count());
    if let Some(offset) = cursor_offset {
        doc.set_cursor(cursor_in_block(&filled, range.begin, offset))?;
    }

    log::debug!(
        "[reflow] Reflowed lines {}..{} into {}..{} at width {}",
        range.begin,
        range.end,
        new_range.begin,
        new_range.end,
        options.wrap_width
    );

    Ok(ReflowOutcome::Reflowed {
        range,
        new_range,
        cursor: doc.cursor(),
        changed: true,
    })
}

/// Length of the filled text preceding the cursor.
///
/// This fills everything from the paragraph start up to the cursor on its own.
/// Trailing whitespace before the cursor is dropped by the fill, so a cursor
/// right after a space lands one character early.
fn pre_cursor_offset(lines: &[String], row: usize, column: usize, options: &ReflowOptions) -> usize {
    let mut before: Vec<&str> = lines[..row].iter().map(String::as_str).collect();
    let current = &lines[row];
    let cut = current.char_indices().nth(column).map_or(current.len(), |(idx, _)| idx);
    if cut > 0 {
        before.push(&current[..cut]);
    }
    char_len(&fill_lines(&before, options))
}

/// Cursor reached by walking `offset` characters into `block`, which starts
/// at `first_line`. Newlines count as one character.
fn cursor_in_block(block: &str, first_line: usize, offset: usize) -> Cursor {
    let mut cursor = Cursor::new(first_line, 0);
    for c in block.chars().take(offset) {
        if c == '\n' {
            cursor.line += 1;
            cursor.column = 0;
        } else {
            cursor.column += 1;
        }
    }
    cursor
}

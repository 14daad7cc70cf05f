//! Paragraph boundary detection
//!
//! Starting from the cursor line, the locator grows a half-open line range in
//! both directions while neighbouring lines carry a compatible prefix and
//! non-blank content.
//!
//! Scanning upwards, a line with a different prefix still joins the paragraph
//! (and ends the scan) when it looks like the paragraph's lead line: no longer
//! than the established prefix but carrying at least as many marker
//! characters. This is what attaches `"- "` above a run of `"  "` lines.
//!
//! Scanning downwards depends on where the cursor sits. On the first line of
//! a paragraph, following lines must start with exactly the cursor line's
//! prefix. Otherwise their prefix is auto-detected and compared as a whole.

use crate::document::LineSource;
use crate::utils::char_len;
use crate::utils::prefix::split_line;
use serde::Serialize;
use std::ops::Range;

/// Half-open range of line indices `[begin, end)` forming a paragraph.
///
/// `begin == end` means no paragraph was found and nothing should be edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ParagraphRange {
    pub begin: usize,
    pub end: usize,
}

impl ParagraphRange {
    pub fn new(begin: usize, end: usize) -> Self {
        debug_assert!(begin <= end, "paragraph range must not be reversed: {begin}..{end}");
        Self { begin, end }
    }

    /// An empty range anchored at `line`
    pub fn empty(line: usize) -> Self {
        Self { begin: line, end: line }
    }

    pub fn is_empty(&self) -> bool {
        self.begin >= self.end
    }

    /// Number of lines in the range
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.begin)
    }

    pub fn contains(&self, line: usize) -> bool {
        self.begin <= line && line < self.end
    }

    pub fn lines(&self) -> Range<usize> {
        self.begin..self.end
    }
}

impl From<ParagraphRange> for Range<usize> {
    fn from(range: ParagraphRange) -> Self {
        range.lines()
    }
}

/// Whether a line above the paragraph with a different prefix is its lead line.
///
/// Both comparisons count characters: the candidate may not be longer than
/// the established prefix, and once surrounding whitespace is removed it must
/// be at least as long.
fn is_lead_prefix(candidate: &str, established: &str) -> bool {
    char_len(candidate) <= char_len(established) && char_len(candidate.trim()) >= char_len(established.trim())
}

/// Find the paragraph touching `cursor_line`.
///
/// A blank cursor line, or one past the end of the source, yields an empty
/// range. A single matching line yields `cursor_line..cursor_line + 1`.
pub fn locate_paragraph<S: LineSource + ?Sized>(source: &S, cursor_line: usize) -> ParagraphRange {
    let line_count = source.line_count();
    if cursor_line >= line_count {
        log::debug!("[reflow-locate] Cursor line {cursor_line} is past the last line ({line_count} lines)");
        return ParagraphRange::empty(cursor_line);
    }

    let cursor_text = source.line(cursor_line);
    let cursor_split = split_line(&cursor_text, None);
    let prefix = match cursor_split.prefix {
        Some(prefix) if !cursor_split.is_blank() => prefix,
        _ => {
            log::debug!("[reflow-locate] Cursor line {cursor_line} is blank, nothing to reflow");
            return ParagraphRange::empty(cursor_line);
        }
    };

    let mut start = cursor_line;
    let mut end = cursor_line;

    while start > 0 {
        let other_text = source.line(start - 1);
        let other = split_line(&other_text, None);
        if other.is_blank() {
            break;
        }
        // A marked paragraph never grows into an unmarked line above it
        let other_prefix = other.prefix_or_empty();
        if !prefix.is_empty() && other_prefix.is_empty() {
            break;
        }

        if other_prefix != prefix {
            if is_lead_prefix(other_prefix, prefix) {
                log::trace!(
                    "[reflow-locate] Line {} with prefix {other_prefix:?} leads paragraph prefixed {prefix:?}",
                    start - 1
                );
                start -= 1;
            }
            break;
        }
        start -= 1;
    }

    // On the first line every following line must carry this exact prefix
    let search_prefix = if start == end { Some(prefix) } else { None };

    while end < line_count {
        end += 1;
        if end == line_count {
            break;
        }
        let next_text = source.line(end);
        let next = split_line(&next_text, search_prefix);
        if next.prefix != Some(prefix) || next.is_blank() {
            break;
        }
    }

    log::debug!("[reflow-locate] Paragraph for line {cursor_line} spans lines {start}..{end} (prefix {prefix:?})");
    ParagraphRange::new(start, end)
}

//!
//! Utility functions and modules for reflow.
//! This module contains helpers shared by the locator, the filler and the
//! document implementations.

pub mod prefix;
pub mod text_reflow;

use std::ops::Range;

pub use prefix::{PrefixSplit, detect_prefix, split_line};
pub use text_reflow::{ParagraphReflow, ReflowOptions, fill_lines, fill_text, reflow_paragraph_at_line, wrap_words};

/// Line terminator used by a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    /// Detect the line ending from the first terminated line.
    /// Text without any newline is treated as LF.
    pub fn detect(content: &str) -> Self {
        match content.find('\n') {
            Some(pos) if content[..pos].ends_with('\r') => LineEnding::CrLf,
            _ => LineEnding::Lf,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Byte ranges of every line's text, excluding `\n` and a preceding `\r`.
///
/// Follows `str::lines`: a final terminator does not start an extra line, and
/// empty content has no lines.
pub fn line_spans(content: &str) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut start = 0;
    for chunk in content.split_inclusive('\n') {
        let text = chunk.strip_suffix('\n').unwrap_or(chunk);
        let text = text.strip_suffix('\r').unwrap_or(text);
        spans.push(start..start + text.len());
        start += chunk.len();
    }
    spans
}

/// Number of characters in a string, the unit every width in this crate uses
#[inline]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

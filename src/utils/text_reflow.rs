//! Text reflow utilities
//!
//! This module implements the prefix-aware paragraph fill: strip each line's
//! prefix, join the contents, greedily re-wrap the words to the configured
//! width, and put the first line's prefix on the first output line and the
//! last line's prefix on every continuation line.

use crate::paragraph::locate_paragraph;
use crate::types::WrapWidth;
use crate::utils::prefix::{PrefixSplit, split_line};
use crate::utils::{LineEnding, char_len, line_spans};

/// Options for reflowing text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReflowOptions {
    /// Target line width, prefixes included
    pub wrap_width: WrapWidth,
    /// Whether to move the cursor back to its approximate position after a reflow
    pub restore_cursor: bool,
}

impl Default for ReflowOptions {
    fn default() -> Self {
        Self {
            wrap_width: WrapWidth::default(),
            restore_cursor: true,
        }
    }
}

impl ReflowOptions {
    pub fn with_width(wrap_width: WrapWidth) -> Self {
        Self {
            wrap_width,
            ..Self::default()
        }
    }
}

/// Greedily pack whitespace-separated words into lines.
///
/// The first line may hold up to `first_width` characters and every other
/// line up to `rest_width`. Words are never split: a word longer than the
/// available width sits alone on its own line. A width of zero therefore
/// yields one word per line.
pub fn wrap_words(text: &str, first_width: usize, rest_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current_line = String::new();
    let mut current_length = 0;

    for word in text.split_whitespace() {
        let word_len = char_len(word);
        let width = if lines.is_empty() { first_width } else { rest_width };

        if current_length > 0 && current_length + 1 + word_len > width {
            lines.push(std::mem::take(&mut current_line));
            current_length = 0;
        }

        if current_length > 0 {
            current_line.push(' ');
            current_length += 1;
        }
        current_line.push_str(word);
        current_length += word_len;
    }

    // Don't forget the last line
    if !current_line.is_empty() {
        lines.push(current_line);
    }

    lines
}

/// Fill the given paragraph lines into a single block of text.
///
/// Lines in the result are joined with `\n`. When no line has any content the
/// result is empty, prefixes included.
pub fn fill_lines<S: AsRef<str>>(lines: &[S], options: &ReflowOptions) -> String {
    let splits: Vec<PrefixSplit<'_>> = lines.iter().map(|line| split_line(line.as_ref(), None)).collect();
    let (Some(first), Some(last)) = (splits.first(), splits.last()) else {
        return String::new();
    };
    let first_prefix = first.prefix_or_empty();
    let rest_prefix = last.prefix_or_empty();

    let text = splits
        .iter()
        .map(|split| split.content.trim())
        .filter(|content| !content.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    let width = options.wrap_width.get();
    let wrapped = wrap_words(
        &text,
        width.saturating_sub(char_len(first_prefix)),
        width.saturating_sub(char_len(rest_prefix)),
    );
    log::trace!(
        "[reflow-fill] {} input lines -> {} output lines at width {width}",
        lines.len(),
        wrapped.len()
    );

    let mut result = String::with_capacity(text.len() + wrapped.len() * (rest_prefix.len() + 1));
    for (i, line) in wrapped.iter().enumerate() {
        if i == 0 {
            result.push_str(first_prefix);
        } else {
            result.push('\n');
            result.push_str(rest_prefix);
        }
        result.push_str(line);
    }
    result
}

/// Fill a block of text given as a single string, one paragraph line per text line
pub fn fill_text(text: &str, options: &ReflowOptions) -> String {
    let lines: Vec<&str> = text.lines().collect();
    fill_lines(&lines, options)
}

/// Result of reflowing the paragraph around a line of a string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParagraphReflow {
    /// First line of the paragraph (0-based)
    pub start_line: usize,
    /// Line after the paragraph (0-based, exclusive)
    pub end_line: usize,
    /// Starting byte offset of the paragraph in the original content
    pub start_byte: usize,
    /// Ending byte offset of the paragraph's last line, before its terminator
    pub end_byte: usize,
    /// The reflowed text for this paragraph, using the content's line ending
    pub reflowed_text: String,
}

impl ParagraphReflow {
    /// Apply the reflow to the content it was computed from
    pub fn apply(&self, content: &str) -> String {
        let mut result = String::with_capacity(content.len() + self.reflowed_text.len());
        result.push_str(&content[..self.start_byte]);
        result.push_str(&self.reflowed_text);
        result.push_str(&content[self.end_byte..]);
        result
    }
}

/// Reflow a single paragraph at the specified line number
///
/// This function finds the paragraph containing the given line number,
/// reflows it to the specified width, and returns information about the
/// paragraph location and its reflowed text.
///
/// # Arguments
///
/// * `content` - The full document content
/// * `line_number` - The 1-based line number within the paragraph to reflow
/// * `wrap_width` - The target line width
///
/// # Returns
///
/// Returns `Some(ParagraphReflow)` if a paragraph was found, or `None` if the
/// line number is out of bounds or the line is blank.
pub fn reflow_paragraph_at_line(content: &str, line_number: usize, wrap_width: WrapWidth) -> Option<ParagraphReflow> {
    if line_number == 0 {
        return None;
    }

    let spans = line_spans(content);
    let target_idx = line_number - 1;
    if target_idx >= spans.len() {
        return None;
    }

    let lines: Vec<&str> = spans.iter().map(|span| &content[span.clone()]).collect();
    let range = locate_paragraph(lines.as_slice(), target_idx);
    if range.is_empty() {
        return None;
    }

    let filled = fill_lines(&lines[range.lines()], &ReflowOptions::with_width(wrap_width));
    let reflowed_text = match LineEnding::detect(content) {
        LineEnding::Lf => filled,
        LineEnding::CrLf => filled.replace('\n', "\r\n"),
    };

    Some(ParagraphReflow {
        start_line: range.begin,
        end_line: range.end,
        start_byte: spans[range.begin].start,
        end_byte: spans[range.end - 1].end,
        reflowed_text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn width(columns: usize) -> ReflowOptions {
        ReflowOptions::with_width(WrapWidth::new(columns).unwrap())
    }

    #[test]
    fn test_wrap_words_greedy_packing() {
        let lines = wrap_words("aa bb cc dd", 5, 5);
        assert_eq!(lines, vec!["aa bb", "cc dd"]);
    }

    #[test]
    fn test_wrap_words_first_line_width_differs() {
        let lines = wrap_words("aa bb cc dd ee", 2, 8);
        assert_eq!(lines, vec!["aa", "bb cc dd", "ee"]);
    }

    #[test]
    fn test_wrap_words_long_word_stays_whole() {
        let lines = wrap_words("a extraordinarily b", 5, 5);
        assert_eq!(lines, vec!["a", "extraordinarily", "b"]);
    }

    #[test]
    fn test_wrap_words_zero_width_one_word_per_line() {
        let lines = wrap_words("one two three", 0, 0);
        assert_eq!(lines, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_wrap_words_no_words() {
        assert!(wrap_words("  \t ", 10, 10).is_empty());
    }

    #[test]
    fn test_fill_counts_prefix_in_width() {
        let filled = fill_lines(&["# aaa bbb ccc"], &width(9));
        assert_eq!(filled, "# aaa bbb\n# ccc");
    }

    #[test]
    fn test_fill_blank_lines_produce_nothing() {
        assert_eq!(fill_lines(&["#   ", "#"], &width(80)), "");
        assert_eq!(fill_lines::<&str>(&[], &width(80)), "");
    }

    #[test]
    fn test_fill_text_splits_lines() {
        assert_eq!(fill_text("// a\n// b", &width(80)), "// a b");
    }
}

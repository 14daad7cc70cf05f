//! Line prefix detection
//!
//! A prefix is the run of comment, quote and bullet markers (`#`, `*`, `"`,
//! `/`, `-`, `+`) interleaved with whitespace at the start of a line. It is
//! what gets stripped before filling and re-applied afterwards, so `"# "`,
//! `"// "`, `"  * "` and plain indentation are all prefixes.

/// Characters that may appear in a line prefix besides whitespace
pub const PREFIX_MARKERS: &[char] = &['#', '*', '"', '/', '-', '+'];

/// A line split into its prefix and the remaining content.
///
/// Both halves borrow from the original line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixSplit<'a> {
    /// The matched prefix. `None` only when an explicit prefix was requested
    /// and the line does not start with it.
    pub prefix: Option<&'a str>,
    /// Everything after the prefix (the whole line when `prefix` is `None`)
    pub content: &'a str,
}

impl<'a> PrefixSplit<'a> {
    /// True when the content has no non-whitespace characters
    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }

    /// The prefix, or an empty string when there is none
    pub fn prefix_or_empty(&self) -> &'a str {
        self.prefix.unwrap_or("")
    }
}

/// Check whether a character can be part of a line prefix
#[inline]
pub fn is_prefix_char(c: char) -> bool {
    PREFIX_MARKERS.contains(&c) || c.is_whitespace()
}

/// Byte length of the longest prefix at the start of `line`.
///
/// Alternating runs of markers and whitespace collapse into a single run of
/// prefix characters, so the scanner just consumes until the first character
/// that is neither.
pub fn prefix_len(line: &str) -> usize {
    line.char_indices()
        .find(|&(_, c)| !is_prefix_char(c))
        .map_or(line.len(), |(idx, _)| idx)
}

/// Split a line into prefix and content.
///
/// With `explicit_prefix == None` the prefix is auto-detected and always
/// present (possibly empty). With an explicit prefix, the split succeeds only
/// if the line starts with exactly that prefix; otherwise the result has no
/// prefix and the whole line as content.
pub fn split_line<'a>(line: &'a str, explicit_prefix: Option<&str>) -> PrefixSplit<'a> {
    match explicit_prefix {
        None => {
            let (prefix, content) = line.split_at(prefix_len(line));
            PrefixSplit {
                prefix: Some(prefix),
                content,
            }
        }
        Some(expected) => match line.strip_prefix(expected) {
            Some(content) => PrefixSplit {
                prefix: Some(&line[..expected.len()]),
                content,
            },
            None => PrefixSplit {
                prefix: None,
                content: line,
            },
        },
    }
}

/// Auto-detect the prefix of a line
pub fn detect_prefix(line: &str) -> &str {
    &line[..prefix_len(line)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scanner_consumes_alternating_runs() {
        assert_eq!(prefix_len("# // -- text"), 8);
        assert_eq!(prefix_len("  *  item"), 5);
        assert_eq!(prefix_len("\t\"quoted\""), 2);
    }

    #[test]
    fn test_scanner_stops_at_first_content_char() {
        assert_eq!(prefix_len("plain"), 0);
        assert_eq!(prefix_len("1. numbered"), 0);
        assert_eq!(prefix_len(">quote"), 0);
    }

    #[test]
    fn test_scanner_whole_line() {
        assert_eq!(prefix_len(""), 0);
        assert_eq!(prefix_len("#  "), 3);
        assert_eq!(prefix_len("----"), 4);
    }

    #[test]
    fn test_scanner_unicode_whitespace() {
        // U+00A0 is whitespace to char::is_whitespace
        let line = "#\u{a0}word";
        assert_eq!(detect_prefix(line), "#\u{a0}");
    }
}

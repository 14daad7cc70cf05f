use reflow_lib::{ParagraphRange, locate_paragraph};

fn locate(lines: &[&str], cursor_line: usize) -> (usize, usize) {
    let range = locate_paragraph(lines, cursor_line);
    (range.begin, range.end)
}

#[test]
fn test_single_line_paragraph() {
    assert_eq!(locate(&["hello world"], 0), (0, 1));
}

#[test]
fn test_blank_cursor_line_is_noop() {
    assert_eq!(locate(&["", "text"], 0), (0, 0));
    assert_eq!(locate(&["text", "   ", "more"], 1), (1, 1));
}

#[test]
fn test_prefix_only_cursor_line_is_noop() {
    assert_eq!(locate(&["# text", "#  ", "# more"], 1), (1, 1));
}

#[test]
fn test_cursor_past_end_is_noop() {
    assert_eq!(locate(&["text"], 3), (3, 3));
    let empty: [&str; 0] = [];
    assert_eq!(locate(&empty, 0), (0, 0));
}

#[test]
fn test_plain_paragraph_between_blank_lines() {
    let lines = ["intro", "", "one two", "three four", "five", "", "outro"];
    assert_eq!(locate(&lines, 3), (2, 5));
    assert_eq!(locate(&lines, 2), (2, 5));
    assert_eq!(locate(&lines, 4), (2, 5));
}

#[test]
fn test_paragraph_at_document_edges() {
    let lines = ["first", "second", "third"];
    assert_eq!(locate(&lines, 0), (0, 3));
    assert_eq!(locate(&lines, 2), (0, 3));
}

#[test]
fn test_comment_block() {
    let lines = ["fn main() {}", "// one", "// two", "// three", "let x = 1;"];
    assert_eq!(locate(&lines, 2), (1, 4));
    // The code line above has the empty prefix, which is not a lead line for "// "
    assert_eq!(locate(&lines, 1), (1, 4));
}

#[test]
fn test_unmarked_line_does_not_join_indented_block() {
    // The empty prefix passes the lead-line length test against "    " but
    // an unmarked line never joins a marked paragraph
    assert_eq!(locate(&["if ready:", "    launch the rockets now"], 1), (1, 2));
    let lines = ["term", "    definition of", "    the term"];
    assert_eq!(locate(&lines, 2), (1, 3));
}

#[test]
fn test_unmarked_lines_join_unmarked_paragraph() {
    assert_eq!(locate(&["one", "two", "three"], 2), (0, 3));
}

#[test]
fn test_bullet_first_line_does_not_take_continuation() {
    // On a paragraph's first line, following lines need the exact same prefix
    let lines = ["- item one", "  continued", "", "next para"];
    assert_eq!(locate(&lines, 0), (0, 1));
}

#[test]
fn test_bullet_continuation_line_includes_bullet() {
    let lines = ["- item one", "  continued", "", "next para"];
    assert_eq!(locate(&lines, 1), (0, 2));
}

#[test]
fn test_mixed_bullet_continuation() {
    let lines = ["* first line of item", "  second line same item"];
    assert_eq!(locate(&lines, 0), (0, 1));
    assert_eq!(locate(&lines, 1), (0, 2));
}

#[test]
fn test_lead_line_stops_backward_scan() {
    // The bullet line is included, the line above it is not
    let lines = ["  stray", "- item", "  more", "  text"];
    assert_eq!(locate(&lines, 3), (1, 4));
}

#[test]
fn test_backward_scan_rejects_heavier_prefix_mismatch() {
    // "  " is not a lead line for "# " (fewer markers)
    let lines = ["  indented", "# comment", "# again"];
    assert_eq!(locate(&lines, 2), (1, 3));
}

#[test]
fn test_forward_scan_from_middle_uses_detected_prefix() {
    // Below the cursor, lines are compared by their detected prefix as a whole
    let lines = ["# a", "# b", "# c", "## d"];
    assert_eq!(locate(&lines, 1), (0, 3));
}

#[test]
fn test_forward_scan_from_first_line_uses_exact_prefix() {
    // "#  x" starts with "# " but its detected prefix is "#  "; in exact mode
    // the prefix is compared literally and the line joins
    let lines = ["# a", "#  x", "# y"];
    assert_eq!(locate(&lines, 0), (0, 3));
    // From the middle, "# " above is accepted as the lead line but "# y"
    // below has a different detected prefix
    assert_eq!(locate(&lines, 1), (0, 2));
}

#[test]
fn test_forward_scan_stops_at_blank_content() {
    let lines = ["# a", "# b", "#   ", "# c"];
    assert_eq!(locate(&lines, 0), (0, 2));
}

#[test]
fn test_forward_scan_stops_at_bare_marker() {
    // "#" does not start with "# "
    let lines = ["# a", "#", "# c"];
    assert_eq!(locate(&lines, 0), (0, 1));
}

#[test]
fn test_range_is_well_formed() {
    let lines = ["- a", "  b", "  c", "", "- d"];
    for cursor in 0..lines.len() + 2 {
        let range: ParagraphRange = locate_paragraph(&lines[..], cursor);
        assert!(range.begin <= range.end);
        if !range.is_empty() {
            assert!(range.contains(cursor));
            assert!(range.end <= lines.len());
        }
    }
}

//! Bracketed-span highlighting for answer text.
//!
//! Answers may carry `[term]` spans marking names and keywords. Rendering
//! drops the brackets and colors the inner text, leaving everything else
//! verbatim.

use regex::Regex;
use std::sync::OnceLock;

use crate::ui::Style;

/// A piece of an answer: either plain text or the inside of a `[...]` span.
#[derive(Debug, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    Span(&'a str),
}

#[allow(clippy::unwrap_used)]
fn bracket_span() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // unwrap is safe: the pattern is a compile-time constant
    RE.get_or_init(|| Regex::new(r"\[(.+?)\]").unwrap())
}

/// Splits answer text into plain segments and bracketed spans, left to
/// right. Brackets themselves are not part of any segment. Text without
/// bracket pairs comes back as a single plain segment.
pub fn split_spans(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut last = 0;

    for found in bracket_span().find_iter(text) {
        if found.start() > last {
            segments.push(Segment::Text(&text[last..found.start()]));
        }
        // The pattern guarantees single-byte brackets at both ends.
        segments.push(Segment::Span(&text[found.start() + 1..found.end() - 1]));
        last = found.end();
    }

    if last < text.len() {
        segments.push(Segment::Text(&text[last..]));
    }

    segments
}

/// Renders answer text for display: spans highlighted, surrounding text in
/// the answer color, brackets dropped.
pub fn render(text: &str) -> String {
    split_spans(text)
        .iter()
        .map(|segment| match segment {
            Segment::Text(plain) => Style::answer(plain),
            Segment::Span(inner) => Style::highlight(inner),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_brackets_single_text_segment() {
        let segments = split_spans("Gehrman is the first hunter.");
        assert_eq!(segments, vec![Segment::Text("Gehrman is the first hunter.")]);
    }

    #[test]
    fn test_empty_input() {
        assert!(split_spans("").is_empty());
    }

    #[test]
    fn test_single_span() {
        let segments = split_spans("See [Note 1] for details");
        assert_eq!(
            segments,
            vec![
                Segment::Text("See "),
                Segment::Span("Note 1"),
                Segment::Text(" for details"),
            ]
        );
    }

    #[test]
    fn test_multiple_spans_left_to_right() {
        let segments = split_spans("See [Note 1] and [Note 2]");
        assert_eq!(
            segments,
            vec![
                Segment::Text("See "),
                Segment::Span("Note 1"),
                Segment::Text(" and "),
                Segment::Span("Note 2"),
            ]
        );
    }

    #[test]
    fn test_adjacent_spans() {
        let segments = split_spans("[a][b]");
        assert_eq!(segments, vec![Segment::Span("a"), Segment::Span("b")]);
    }

    #[test]
    fn test_empty_brackets_not_matched() {
        // The span pattern requires at least one inner character.
        let segments = split_spans("empty [] stays");
        assert_eq!(segments, vec![Segment::Text("empty [] stays")]);
    }

    #[test]
    fn test_unclosed_bracket_untouched() {
        let segments = split_spans("dangling [bracket");
        assert_eq!(segments, vec![Segment::Text("dangling [bracket")]);
    }

    #[test]
    fn test_non_greedy_matching() {
        // "[a] b [c]" must yield two spans, not one greedy "a] b [c".
        let segments = split_spans("[a] b [c]");
        assert_eq!(
            segments,
            vec![
                Segment::Span("a"),
                Segment::Text(" b "),
                Segment::Span("c"),
            ]
        );
    }

    #[test]
    fn test_render_keeps_inner_text_and_drops_brackets() {
        let rendered = render("See [Note 1] and [Note 2]");
        assert!(rendered.contains("Note 1"));
        assert!(rendered.contains("Note 2"));
        // The literal bracketed form must be gone (ANSI escapes contain
        // '[' on their own, so check the full original spans).
        assert!(!rendered.contains("[Note 1]"));
        assert!(!rendered.contains("[Note 2]"));
    }

    #[test]
    fn test_render_plain_text_keeps_content() {
        let rendered = render("Gehrman is the first hunter.");
        assert!(rendered.contains("Gehrman is the first hunter."));
    }
}

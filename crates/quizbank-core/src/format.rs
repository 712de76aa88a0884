//! Display formatting for question content.
//!
//! Fill-in-the-blank content carries one marker per blank. Each marker is
//! rewritten into an indexed blank element the client renders as an input.

use crate::model::Answer;

/// Preferred inline blank token.
pub const BLANK_TOKEN: &str = "{{ANS}}";

/// Legacy blank marker, used once no [`BLANK_TOKEN`] remains.
pub const LEGACY_BLANK_TOKEN: &str = "____";

const BLANK_PLACEHOLDER: &str = "__________";

/// The markup that replaces the blank with the given 0-based index.
pub fn blank_marker(index: usize) -> String {
    format!(r#"<span class="fill-blank" data-index="{index}">{BLANK_PLACEHOLDER}</span>"#)
}

/// Rewrite question content for display.
///
/// Only fill answers change the content: blank `i` replaces the first
/// remaining [`BLANK_TOKEN`], or the first remaining [`LEGACY_BLANK_TOKEN`]
/// once no token is left. Extra answer elements without a marker are
/// ignored; non-fill content is returned unchanged.
pub fn format_content(content: &str, answer: &Answer) -> String {
    render_blanks(content, answer, blank_marker)
}

/// Like [`format_content`], with each blank drawn by `render`.
pub fn render_blanks(content: &str, answer: &Answer, render: impl Fn(usize) -> String) -> String {
    let Answer::Fill(blanks) = answer else {
        return content.to_string();
    };

    let mut formatted = String::with_capacity(content.len() + blanks.len() * 64);
    let mut cursor = 0;
    for span in consume_markers(content, blanks.len()) {
        formatted.push_str(&content[cursor..span.start]);
        formatted.push_str(&render(span.index));
        cursor = span.start + span.len;
    }
    formatted.push_str(&content[cursor..]);
    formatted
}

/// Number of blank markers [`format_content`] could consume in `content`.
pub fn count_markers(content: &str) -> usize {
    consume_markers(content, usize::MAX).len()
}

/// A marker consumed by blank `index`, as a byte range of the content.
#[derive(Debug, Clone, Copy)]
struct MarkerSpan {
    start: usize,
    len: usize,
    index: usize,
}

/// Consume up to `limit` markers, returned in document order.
///
/// Searches only the original text between spans already consumed, so a
/// replacement is never matched again.
fn consume_markers(content: &str, limit: usize) -> Vec<MarkerSpan> {
    let mut spans: Vec<MarkerSpan> = Vec::new();
    while spans.len() < limit {
        let Some((start, len)) = find_unconsumed(content, &spans, BLANK_TOKEN)
            .or_else(|| find_unconsumed(content, &spans, LEGACY_BLANK_TOKEN))
        else {
            break;
        };
        let index = spans.len();
        let at = spans.partition_point(|s| s.start < start);
        spans.insert(at, MarkerSpan { start, len, index });
    }
    spans
}

/// First occurrence of `token` lying wholly inside unconsumed text.
fn find_unconsumed(content: &str, spans: &[MarkerSpan], token: &str) -> Option<(usize, usize)> {
    let mut gap_start = 0;
    for span in spans {
        if let Some(pos) = content[gap_start..span.start].find(token) {
            return Some((gap_start + pos, token.len()));
        }
        gap_start = span.start + span.len;
    }
    content[gap_start..]
        .find(token)
        .map(|pos| (gap_start + pos, token.len()))
}

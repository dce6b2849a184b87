//! Search-match highlighting for list rows.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Lower-case `text` one char at a time, recording for every byte of the
/// result the byte range of the source char it came from.
fn lower_with_origins(text: &str) -> (String, Vec<(usize, usize)>) {
    let mut lower = String::with_capacity(text.len());
    let mut origins = Vec::with_capacity(text.len());
    for (start, c) in text.char_indices() {
        let end = start + c.len_utf8();
        for lc in c.to_lowercase() {
            lower.push(lc);
            origins.extend(std::iter::repeat((start, end)).take(lc.len_utf8()));
        }
    }
    (lower, origins)
}

/// Split `text` into spans with every case-insensitive occurrence of `query`
/// highlighted. `base` styles the unmatched parts.
///
/// Matches found in the lower-cased text are mapped back to whole source
/// chars, so slicing `text` always lands on char boundaries.
pub fn highlight_text(text: &str, query: &str, base: Style) -> Line<'static> {
    let query_lower = query.to_lowercase();
    if query_lower.is_empty() {
        return Line::from(Span::styled(text.to_string(), base));
    }

    let (text_lower, origins) = lower_with_origins(text);

    let matched = base
        .bg(Color::Yellow)
        .fg(Color::Black)
        .add_modifier(Modifier::BOLD);

    let mut spans = Vec::new();
    let mut last_end = 0;

    for (start, m) in text_lower.match_indices(&query_lower) {
        let (src_start, _) = origins[start];
        let (_, src_end) = origins[start + m.len() - 1];
        // A match starting inside a char already highlighted.
        if src_start < last_end {
            continue;
        }
        if src_start > last_end {
            spans.push(Span::styled(text[last_end..src_start].to_string(), base));
        }
        spans.push(Span::styled(text[src_start..src_end].to_string(), matched));
        last_end = src_end;
    }

    if last_end < text.len() {
        spans.push(Span::styled(text[last_end..].to_string(), base));
    }

    Line::from(spans)
}

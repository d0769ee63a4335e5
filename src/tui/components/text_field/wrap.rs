//! Pure layout helpers and dimensional constants for `TextField`.
//!
//! Stateless; no dependency on the field itself.

use unicode_width::UnicodeWidthStr;

/// Left + right borders
pub(super) const HORIZONTAL_OVERHEAD: u16 = 2;
/// Top + bottom borders
pub(super) const VERTICAL_OVERHEAD: u16 = 2;
/// Maximum visible content lines in a multi-line field before it scrolls
pub(super) const MAX_VISIBLE_LINES: u16 = 6;
/// Offset from area edge to content (border width)
pub(super) const BORDER_OFFSET: u16 = 1;

pub(super) fn wrap_options(inner_width: u16) -> textwrap::Options<'static> {
    textwrap::Options::new(inner_width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
}

/// Content width inside the borders. 0 if the area is too narrow.
pub(super) fn inner_width(area_width: u16) -> u16 {
    area_width.saturating_sub(HORIZONTAL_OVERHEAD)
}

/// Wrap `text` into display lines, keeping a trailing empty line after a
/// final newline so the cursor has somewhere to sit.
pub(super) fn wrap_lines(text: &str, width: u16) -> Vec<String> {
    if width == 0 || text.is_empty() {
        return vec![String::new()];
    }
    let mut lines: Vec<String> = textwrap::wrap(text, wrap_options(width))
        .into_iter()
        .map(|l| l.into_owned())
        .collect();
    if text.ends_with('\n') && !lines.last().is_some_and(|l| l.is_empty()) {
        lines.push(String::new());
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Byte offset of the character boundary before `pos`.
pub(super) fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Byte offset of the character boundary after `pos`.
pub(super) fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

pub(super) fn display_width(text: &str) -> u16 {
    text.width() as u16
}

/// Wrapped (line, column) of the cursor at byte `pos`.
///
/// The column is counted from the logical line start rather than taken from
/// the wrapped segment, because textwrap trims trailing spaces.
pub(super) fn cursor_line_col(text: &str, pos: usize, width: u16) -> (u16, u16) {
    if width == 0 {
        return (0, 0);
    }
    let before = &text[..pos];
    let line = (wrap_lines(before, width).len() as u16).saturating_sub(1);

    let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    let logical = &before[line_start..];
    let segments = textwrap::wrap(logical, wrap_options(width));
    let in_prev_segments: usize = segments
        .iter()
        .take(segments.len().saturating_sub(1))
        .map(|seg| seg.chars().count())
        .sum();
    let col = logical.chars().count().saturating_sub(in_prev_segments) as u16;

    (line, col)
}

//! Character-offset string helpers.
//!
//! All engine lengths are counted in Unicode scalar values, never bytes, so emoji and CJK
//! text reveal and delete one `char` at a time without splitting UTF-8 sequences.

use unicode_width::UnicodeWidthChar;

pub(crate) fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Borrow the first `count` characters of `text` (all of it if `count` exceeds its length).
pub(crate) fn char_prefix(text: &str, count: usize) -> &str {
    match text.char_indices().nth(count) {
        Some((byte, _)) => &text[..byte],
        None => text,
    }
}

/// Remove up to `count` trailing characters; never underflows.
pub(crate) fn truncate_chars_from_end(text: &mut String, count: usize) {
    let keep = char_len(text).saturating_sub(count);
    let byte = text
        .char_indices()
        .nth(keep)
        .map_or(text.len(), |(byte, _)| byte);
    text.truncate(byte);
}

pub(crate) fn split_lines(text: &str) -> Vec<String> {
    // N newlines => N+1 lines, so a trailing newline opens an empty active line.
    text.split('\n').map(str::to_string).collect()
}

/// Visual width of a character in monospace cells (UAX #11, unknown → 1).
pub fn char_width(ch: char) -> usize {
    UnicodeWidthChar::width(ch).unwrap_or(1)
}

/// Visual width of a string in monospace cells.
pub fn str_width(text: &str) -> usize {
    text.chars().map(char_width).sum()
}

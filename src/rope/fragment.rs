//! Char-indexed helpers over the `String` fragments stored in rope nodes.
//!
//! Rope positions count chars, while `String` indexes bytes. Everything that
//! turns one into the other lives here.

/// Number of chars in a fragment.
pub(crate) fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Byte offset of the char at `index`, or `text.len()` when `index` is the
/// char length of the fragment.
fn byte_offset(text: &str, index: usize) -> usize {
    text.char_indices()
        .nth(index)
        .map(|(offset, _)| offset)
        .unwrap_or(text.len())
}

/// The char at `index`, if the fragment is long enough.
pub(crate) fn nth_char(text: &str, index: usize) -> Option<char> {
    text.chars().nth(index)
}

/// Splits a fragment in place, returning `(text[..index], text[index..])`
/// where `index` is a char position.
pub(crate) fn split_chars(mut text: String, index: usize) -> (String, String) {
    let end = text.split_off(byte_offset(&text, index));
    (text, end)
}

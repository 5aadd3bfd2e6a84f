//! Variable-width text metrics.
//!
//! Character offsets used throughout this crate count *logical characters*:
//! every byte that is not a UTF-8 continuation byte (`0b10xx_xxxx`) starts a
//! character. The byte-level functions accept arbitrary `&[u8]` so that
//! malformed input degrades to extra boundaries instead of out-of-bounds
//! reads.

use std::ops::Range;

/// Default glyph used to mask secure-entry text (U+2022 BULLET).
pub const DEFAULT_MASK_GLYPH: char = '\u{2022}';

#[inline]
fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// Count character starts in a raw byte sequence.
///
/// # Examples
///
/// ```
/// use edit_core::count_char_starts;
///
/// assert_eq!(count_char_starts("a€b".as_bytes()), 3);
/// // A stray continuation byte is not a character start.
/// assert_eq!(count_char_starts(&[b'a', 0x80, b'b']), 2);
/// // A malformed lead byte still counts as a boundary.
/// assert_eq!(count_char_starts(&[0xFF, b'x']), 2);
/// ```
pub fn count_char_starts(bytes: &[u8]) -> usize {
    bytes.iter().filter(|b| !is_continuation(**b)).count()
}

/// Byte offset of the start of the `n`-th character (0-indexed) in `bytes`.
///
/// Scans from the start. If `n` is at or beyond the character count, returns
/// `bytes.len()`.
pub fn char_start_offset(bytes: &[u8], n: usize) -> usize {
    let mut seen = 0usize;
    for (i, b) in bytes.iter().enumerate() {
        if is_continuation(*b) {
            continue;
        }
        if seen == n {
            return i;
        }
        seen += 1;
    }
    bytes.len()
}

/// Number of logical characters in `text` (not its byte length).
///
/// # Examples
///
/// ```
/// use edit_core::char_count;
///
/// assert_eq!(char_count(""), 0);
/// assert_eq!(char_count("héllo"), 5);
/// assert_eq!("héllo".len(), 6);
/// ```
#[inline]
pub fn char_count(text: &str) -> usize {
    count_char_starts(text.as_bytes())
}

/// Byte offset of the start of the `n`-th character in `text`.
///
/// `n == char_count(text)` (or anything larger) maps to `text.len()`.
///
/// # Examples
///
/// ```
/// use edit_core::byte_offset_of_char;
///
/// let s = "a€b"; // '€' is 3 bytes
/// assert_eq!(byte_offset_of_char(s, 0), 0);
/// assert_eq!(byte_offset_of_char(s, 1), 1);
/// assert_eq!(byte_offset_of_char(s, 2), 4);
/// assert_eq!(byte_offset_of_char(s, 3), 5);
/// assert_eq!(byte_offset_of_char(s, 99), 5);
/// ```
#[inline]
pub fn byte_offset_of_char(text: &str, n: usize) -> usize {
    char_start_offset(text.as_bytes(), n)
}

/// Byte range covering characters `start..end` of `text`.
///
/// Offsets are clamped to the character count and normalized so the range
/// is never inverted.
pub fn char_byte_range(text: &str, start: usize, end: usize) -> Range<usize> {
    let (start, end) = (start.min(end), start.max(end));
    let a = byte_offset_of_char(text, start);
    let b = byte_offset_of_char(text, end);
    a..b
}

/// Substring covering characters `start..end` of `text`.
pub fn char_slice(text: &str, start: usize, end: usize) -> &str {
    &text[char_byte_range(text, start, end)]
}

/// Start of the character that ends at byte `pos`, found by walking back over
/// continuation bytes. Never moves below 0.
pub(crate) fn prev_char_start(bytes: &[u8], pos: usize) -> usize {
    let pos = pos.min(bytes.len());
    if pos == 0 {
        return 0;
    }
    let mut i = pos - 1;
    while i > 0 && is_continuation(bytes[i]) {
        i -= 1;
    }
    i
}

/// End of the character that starts at byte `pos`, found by walking forward
/// over continuation bytes. Never moves past `bytes.len()`.
pub(crate) fn next_char_end(bytes: &[u8], pos: usize) -> usize {
    if pos >= bytes.len() {
        return bytes.len();
    }
    let mut i = pos + 1;
    while i < bytes.len() && is_continuation(bytes[i]) {
        i += 1;
    }
    i
}

/// Byte offsets of every character start plus the end of `text`.
///
/// # Examples
///
/// ```
/// use edit_core::rebuild_char_starts;
///
/// let mut starts = Vec::new();
/// rebuild_char_starts("a€b", &mut starts);
/// assert_eq!(starts, vec![0, 1, 4, 5]);
/// ```
pub fn rebuild_char_starts(text: &str, out: &mut Vec<usize>) {
    out.clear();
    out.extend(
        text.as_bytes()
            .iter()
            .enumerate()
            .filter(|(_, b)| !is_continuation(**b))
            .map(|(i, _)| i),
    );
    if out.first().copied() != Some(0) {
        out.insert(0, 0);
    }
    if out.last().copied() != Some(text.len()) {
        out.push(text.len());
    }
}

/// Split `s` at its first `'\n'`.
///
/// Returns the text before the newline and whether a newline was present.
/// A newline in typed input means "submit"; anything after it is dropped.
///
/// # Examples
///
/// ```
/// use edit_core::truncate_at_newline;
///
/// assert_eq!(truncate_at_newline("abc"), ("abc", false));
/// assert_eq!(truncate_at_newline("ab\ncd"), ("ab", true));
/// assert_eq!(truncate_at_newline("\n"), ("", true));
/// ```
pub fn truncate_at_newline(s: &str) -> (&str, bool) {
    match s.find('\n') {
        Some(pos) => (&s[..pos], true),
        None => (s, false),
    }
}

/// Build the masked display string: `glyph` repeated `count` times.
pub fn mask_text(count: usize, glyph: char) -> String {
    let mut out = String::with_capacity(count * glyph.len_utf8());
    out.extend(std::iter::repeat_n(glyph, count));
    out
}

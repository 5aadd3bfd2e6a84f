use crate::text::{byte_offset_of_char, char_count};

/// Map a horizontal pixel coordinate to a character offset in `text`.
///
/// `x` is in text space (0 is the left edge of the first glyph).
/// `measure_prefix` returns the rendered width of a prefix of `text`; it is
/// called O(log n) times.
///
/// The search narrows `[lo, hi]` until the two bounds are adjacent, then
/// snaps to whichever boundary is nearer to `x`.
///
/// # Examples
///
/// ```
/// use edit_core::offset_at_x;
///
/// // Fixed 10 px advance.
/// let measure = |s: &str| s.chars().count() as f32 * 10.0;
/// assert_eq!(offset_at_x("hello", 0.0, measure), 0);
/// assert_eq!(offset_at_x("hello", 14.0, measure), 1);
/// assert_eq!(offset_at_x("hello", 16.0, measure), 2);
/// assert_eq!(offset_at_x("hello", 500.0, measure), 5);
/// ```
pub fn offset_at_x(text: &str, x: f32, mut measure_prefix: impl FnMut(&str) -> f32) -> usize {
    let count = char_count(text);
    if count == 0 || x.is_nan() || x <= 0.0 {
        return 0;
    }

    let full = measure_prefix(text).max(0.0);
    if x >= full {
        return count;
    }

    let mut lo = 0usize;
    let mut hi = count;
    let mut x_lo = 0.0f32;
    let mut x_hi = full;

    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        let w = measure_prefix(&text[..byte_offset_of_char(text, mid)]).max(0.0);
        if x < w {
            hi = mid;
            x_hi = w;
        } else {
            lo = mid;
            x_lo = w;
        }
    }

    if x >= (x_lo + x_hi) * 0.5 { hi } else { lo }
}

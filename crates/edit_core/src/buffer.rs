//! Owned text storage for a single field.

use std::ops::Range;

use crate::text::{
    DEFAULT_MASK_GLYPH, char_byte_range, char_count, mask_text, next_char_end, prev_char_start,
};

/// Raw input text plus the derived string that is actually displayed.
///
/// `display()` is the raw text, a masked copy of it (secure entry), or the
/// placeholder when the buffer is empty. Masking repeats one glyph per
/// logical character, so character offsets into the raw text are valid
/// offsets into the display text as well.
#[derive(Clone, Debug)]
pub struct TextBuffer {
    raw: String,
    display: String,
    char_count: usize,
    placeholder: String,
    secure_entry: bool,
    mask_glyph: char,
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl TextBuffer {
    pub fn new(placeholder: impl Into<String>) -> Self {
        let placeholder = placeholder.into();
        Self {
            raw: String::new(),
            display: placeholder.clone(),
            char_count: 0,
            placeholder,
            secure_entry: false,
            mask_glyph: DEFAULT_MASK_GLYPH,
        }
    }

    /// Replace the whole content.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.raw = text.into();
        self.refresh();
    }

    /// The raw text, never masked and never the placeholder.
    pub fn content(&self) -> &str {
        &self.raw
    }

    /// The text that should be measured and drawn.
    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn char_count(&self) -> usize {
        self.char_count
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// `true` while the placeholder is displayed (and the placeholder color
    /// should be used).
    pub fn showing_placeholder(&self) -> bool {
        self.raw.is_empty()
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.placeholder = placeholder.into();
        self.refresh();
    }

    pub fn is_secure_entry(&self) -> bool {
        self.secure_entry
    }

    /// Toggle secure entry. Returns `true` if the mode changed.
    pub fn set_secure_entry(&mut self, secure: bool) -> bool {
        if self.secure_entry == secure {
            return false;
        }
        self.secure_entry = secure;
        self.refresh();
        true
    }

    pub fn mask_glyph(&self) -> char {
        self.mask_glyph
    }

    pub fn set_mask_glyph(&mut self, glyph: char) {
        self.mask_glyph = glyph;
        self.refresh();
    }

    /// Raw substring covering characters `start..end`.
    pub fn slice(&self, start: usize, end: usize) -> &str {
        &self.raw[char_byte_range(&self.raw, start, end)]
    }

    /// Byte range of the character immediately before character offset
    /// `cursor`, decoded backward over continuation bytes.
    pub fn char_before(&self, cursor: usize) -> Range<usize> {
        let end = char_byte_range(&self.raw, 0, cursor).end;
        prev_char_start(self.raw.as_bytes(), end)..end
    }

    /// Byte range of the character starting at character offset `cursor`.
    pub fn char_at(&self, cursor: usize) -> Range<usize> {
        let start = char_byte_range(&self.raw, 0, cursor).end;
        start..next_char_end(self.raw.as_bytes(), start)
    }

    /// Replace characters `start..end` with `with`.
    pub fn replace_chars(&mut self, start: usize, end: usize, with: &str) {
        let range = char_byte_range(&self.raw, start, end);
        self.replace_bytes(range, with);
    }

    /// Replace a byte range that lies on character boundaries.
    pub(crate) fn replace_bytes(&mut self, range: Range<usize>, with: &str) {
        let start = range.start.min(self.raw.len());
        let end = range.end.clamp(start, self.raw.len());
        if !(self.raw.is_char_boundary(start) && self.raw.is_char_boundary(end)) {
            log::debug!(target: "edit_core.buffer", "ignored splice off char boundary: {start}..{end}");
            return;
        }
        self.raw.replace_range(start..end, with);
        self.refresh();
    }

    fn refresh(&mut self) {
        self.char_count = char_count(&self.raw);
        self.display = if self.raw.is_empty() {
            self.placeholder.clone()
        } else if self.secure_entry {
            mask_text(self.char_count, self.mask_glyph)
        } else {
            self.raw.clone()
        };
    }
}

use crate::text::DEFAULT_MASK_GLYPH;

/// Construction options for a [`TextField`](crate::TextField).
#[derive(Clone, Debug)]
pub struct FieldConfig {
    /// Shown (in the placeholder color) while the field is empty.
    pub placeholder: String,
    /// Glyph repeated once per character when `secure_entry` is on.
    pub mask_glyph: char,
    pub secure_entry: bool,
    pub initial_text: String,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            placeholder: String::new(),
            mask_glyph: DEFAULT_MASK_GLYPH,
            secure_entry: false,
            initial_text: String::new(),
        }
    }
}

impl FieldConfig {
    /// Password-style field: secure entry with the default bullet glyph.
    pub fn password(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            secure_entry: true,
            ..Self::default()
        }
    }
}

use edit_core::char_count;

use crate::style::TextStyle;

/// Layout can depend on this without knowing about egui or any renderer.
pub trait TextMeasurer {
    /// Width of `text` in px when rendered with `style`. Must accept empty
    /// and whitespace-only strings.
    fn measure(&self, text: &str, style: &TextStyle) -> f32;

    /// Line height in px for `style`.
    fn line_height(&self, style: &TextStyle) -> f32;
}

/// A measurer that can also rasterize text into something a
/// [`SpriteSink`](crate::SpriteSink) can draw.
pub trait TextShaper: TextMeasurer {
    type Glyphs;

    fn shape(&self, text: &str, style: &TextStyle) -> Self::Glyphs;
}

/// Fixed-advance measurer: every character is `advance_em * font_px` wide.
///
/// Useful for headless layout and for deterministic tests.
#[derive(Clone, Copy, Debug)]
pub struct MonospaceMeasurer {
    pub advance_em: f32,
    pub line_height_em: f32,
}

impl Default for MonospaceMeasurer {
    fn default() -> Self {
        Self {
            advance_em: 0.6,
            line_height_em: 1.2,
        }
    }
}

impl MonospaceMeasurer {
    /// Measurer whose advance is `advance_px` at the given font size.
    pub fn with_advance(advance_px: f32, font_px: f32) -> Self {
        Self {
            advance_em: advance_px / font_px,
            ..Self::default()
        }
    }
}

impl TextMeasurer for MonospaceMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> f32 {
        char_count(text) as f32 * self.advance_em * style.font_px
    }

    fn line_height(&self, style: &TextStyle) -> f32 {
        style.font_px * self.line_height_em
    }
}

impl TextShaper for MonospaceMeasurer {
    type Glyphs = String;

    fn shape(&self, text: &str, _style: &TextStyle) -> String {
        text.to_owned()
    }
}

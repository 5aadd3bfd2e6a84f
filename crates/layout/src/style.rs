/// RGBA color, unpremultiplied.
pub type Rgba = (u8, u8, u8, u8);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontFamily {
    #[default]
    Proportional,
    Monospace,
}

/// Font settings a field is laid out with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub font_px: f32,
    pub family: FontFamily,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_px: 16.0,
            family: FontFamily::Proportional,
        }
    }
}

/// Colors used when painting a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub text: Rgba,
    pub placeholder: Rgba,
    pub selection_fill: Rgba,
    pub selected_text: Rgba,
    pub cursor: Rgba,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            text: (255, 255, 255, 255),
            placeholder: (127, 127, 127, 255),
            selection_fill: (0, 0, 255, 255),
            selected_text: (0, 255, 0, 255),
            cursor: (0, 0, 255, 255),
        }
    }
}

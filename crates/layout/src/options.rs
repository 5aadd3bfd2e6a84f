use crate::geometry::Size;

/// Default cursor width in px.
pub const CURSOR_WIDTH: f32 = 1.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum VAlign {
    #[default]
    Top,
    Center,
    Bottom,
}

/// Per-field configuration for the layout composer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutOptions {
    pub h_align: HAlign,
    pub v_align: VAlign,
    /// Content box size. A zero component sizes that axis to the text.
    pub viewport: Size,
    pub cursor_width: f32,
    /// Emit a cursor rect while the field is attached to the input method.
    pub show_cursor: bool,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self::single_line()
    }
}

impl LayoutOptions {
    /// Auto-sized, top-left aligned field with a 1 px cursor.
    pub fn single_line() -> Self {
        Self {
            h_align: HAlign::Left,
            v_align: VAlign::Top,
            viewport: Size::ZERO,
            cursor_width: CURSOR_WIDTH,
            show_cursor: true,
        }
    }

    pub fn with_viewport(mut self, width: f32, height: f32) -> Self {
        self.viewport = Size::new(width, height);
        self
    }

    pub fn with_align(mut self, h_align: HAlign, v_align: VAlign) -> Self {
        self.h_align = h_align;
        self.v_align = v_align;
        self
    }
}

//! Field layout: geometry, measurement seams, the layout composer and
//! display-list emission.
//!
//! Nothing here knows about egui or any renderer. Text measurement comes in
//! through [`TextMeasurer`] / [`TextShaper`], and drawing goes out through
//! [`SpriteSink`].

mod compose;
mod geometry;
mod options;
mod paint;
mod style;
mod text;

pub use compose::{FieldLayout, LayoutComposer};
pub use geometry::{Point, Rectangle, Size};
pub use options::{CURSOR_WIDTH, HAlign, LayoutOptions, VAlign};
pub use paint::{SpriteSink, paint_field};
pub use style::{FontFamily, Palette, Rgba, TextStyle};
pub use text::{MonospaceMeasurer, TextMeasurer, TextShaper};

use edit_core::{EditOutcome, TextField};

/// Pointer press at content-box x `local_x`, hit-tested against the
/// composer's current scroll.
pub fn pointer_down_at(
    field: &mut TextField,
    composer: &LayoutComposer,
    local_x: f32,
    extend: bool,
    style: &TextStyle,
    measurer: &dyn TextMeasurer,
) -> EditOutcome {
    field.pointer_down(composer.field_x(local_x), extend, |s: &str| {
        measurer.measure(s, style)
    })
}

/// Pointer drag to content-box x `local_x`.
pub fn pointer_drag_to(
    field: &mut TextField,
    composer: &LayoutComposer,
    local_x: f32,
    style: &TextStyle,
    measurer: &dyn TextMeasurer,
) -> EditOutcome {
    field.pointer_drag(composer.field_x(local_x), |s: &str| measurer.measure(s, style))
}

/// Compose `field` (if stale), shape its display text and paint it.
#[allow(clippy::too_many_arguments)]
pub fn render_field<S: TextShaper>(
    field: &TextField,
    composer: &mut LayoutComposer,
    style: &TextStyle,
    options: &LayoutOptions,
    palette: &Palette,
    shaper: &S,
    origin: Point,
    cursor_visible: bool,
    sink: &mut dyn SpriteSink<S::Glyphs>,
) {
    let layout = composer.compose(field, style, options, shaper);
    let glyphs = shaper.shape(field.display_text(), style);
    paint_field(layout, &glyphs, origin, palette, cursor_visible, sink);
}

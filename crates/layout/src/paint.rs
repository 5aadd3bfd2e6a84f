use crate::compose::FieldLayout;
use crate::geometry::{Point, Rectangle};
use crate::style::{Palette, Rgba};

/// Display service that draws what the layout composer produced.
///
/// `G` is whatever the paired [`TextShaper`](crate::TextShaper) rasterizes
/// text into.
pub trait SpriteSink<G> {
    /// Draw `glyphs` with their top-left at `origin`, showing only the part
    /// inside `clip`.
    fn draw_glyphs(&mut self, glyphs: &G, origin: Point, clip: Rectangle, color: Rgba);

    fn fill_rect(&mut self, rect: Rectangle, color: Rgba);
}

/// Emit draw requests for one field whose content box starts at `origin`.
///
/// Order: selection fill, text, selected text re-drawn in the highlight
/// color and clipped to the selection, cursor.
pub fn paint_field<G>(
    layout: &FieldLayout,
    glyphs: &G,
    origin: Point,
    palette: &Palette,
    cursor_visible: bool,
    sink: &mut dyn SpriteSink<G>,
) {
    let content = layout.content_rect().translate(origin);
    let text_origin = Point::new(origin.x + layout.text_offset.x, origin.y + layout.text_offset.y);
    let selection = layout.selection.map(|r| r.translate(origin));

    if let Some(sel) = selection {
        sink.fill_rect(sel, palette.selection_fill);
    }

    let color = if layout.showing_placeholder {
        palette.placeholder
    } else {
        palette.text
    };
    sink.draw_glyphs(glyphs, text_origin, content, color);

    if let Some(sel) = selection {
        sink.draw_glyphs(glyphs, text_origin, sel, palette.selected_text);
    }

    if cursor_visible && let Some(cursor) = layout.cursor {
        sink.fill_rect(cursor.translate(origin), palette.cursor);
    }
}

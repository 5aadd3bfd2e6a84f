use std::sync::Arc;

use egui::{Color32, Galley, Painter, Pos2, Rect, Vec2};
use layout::{Point, Rectangle, Rgba, SpriteSink};

/// [`SpriteSink`] that draws onto an egui [`Painter`].
pub struct PainterSink<'a> {
    painter: &'a Painter,
}

impl<'a> PainterSink<'a> {
    pub fn new(painter: &'a Painter) -> Self {
        Self { painter }
    }
}

pub(crate) fn to_color(c: Rgba) -> Color32 {
    let (r, g, b, a) = c;
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

pub(crate) fn to_rect(r: Rectangle) -> Rect {
    Rect::from_min_size(Pos2::new(r.x, r.y), Vec2::new(r.width, r.height))
}

impl SpriteSink<Arc<Galley>> for PainterSink<'_> {
    fn draw_glyphs(&mut self, glyphs: &Arc<Galley>, origin: Point, clip: Rectangle, color: Rgba) {
        let clip = to_rect(clip).intersect(self.painter.clip_rect());
        if !clip.is_positive() {
            return;
        }
        self.painter.with_clip_rect(clip).galley_with_override_text_color(
            Pos2::new(origin.x, origin.y),
            Arc::clone(glyphs),
            to_color(color),
        );
    }

    fn fill_rect(&mut self, rect: Rectangle, color: Rgba) {
        self.painter.rect_filled(to_rect(rect), 0.0, to_color(color));
    }
}
